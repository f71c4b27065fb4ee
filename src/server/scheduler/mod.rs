//! Scheduler for periodic flight status refresh.
//!
//! [`RefreshScheduler`] owns a `JobScheduler` with a single repeated job that runs a refresh
//! cycle every interval, plus one immediate cycle when it starts. A run guard ensures at
//! most one cycle executes at a time: a tick that fires while a cycle is still running is
//! skipped, and a manual trigger is refused with [`RefreshError::AlreadyRunning`].

pub mod config;

#[cfg(test)]
mod tests;

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    model::report::RefreshReport,
    server::{
        error::{refresh::RefreshError, Error},
        service::refresh::StatusRefresher,
    },
};

/// Owned refresh scheduler with an explicit start/stop lifecycle.
#[derive(Clone)]
pub struct RefreshScheduler {
    inner: Arc<RefreshSchedulerRef>,
}

struct RefreshSchedulerRef {
    refresher: StatusRefresher,
    interval: Duration,
    in_progress: Arc<AtomicBool>,
    sched: Mutex<Option<JobScheduler>>,
}

/// Marks a refresh cycle as in progress until dropped.
struct RunGuard(Arc<AtomicBool>);

impl RunGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs one cycle unless another is in progress.
async fn run_guarded(
    refresher: &StatusRefresher,
    in_progress: &Arc<AtomicBool>,
) -> Result<RefreshReport, Error> {
    let _guard = RunGuard::acquire(in_progress).ok_or(RefreshError::AlreadyRunning)?;

    Ok(refresher.refresh_all().await?)
}

/// Scheduled entry point; logs instead of returning.
async fn run_tick(refresher: StatusRefresher, in_progress: Arc<AtomicBool>) {
    match run_guarded(&refresher, &in_progress).await {
        Ok(report) => tracing::info!(
            "Refreshed flight status for {} passenger(s), {} failed",
            report.succeeded.len(),
            report.failed.len()
        ),
        Err(Error::RefreshError(RefreshError::AlreadyRunning)) => {
            tracing::warn!("Skipping scheduled refresh; previous refresh still running")
        }
        Err(e) => tracing::error!("Scheduled flight status refresh failed: {}", e),
    }
}

impl RefreshScheduler {
    /// Creates a new instance of [`RefreshScheduler`].
    ///
    /// The scheduler is created stopped; call [`RefreshScheduler::start`] to begin ticking.
    pub fn new(refresher: StatusRefresher, interval: Duration) -> Self {
        Self {
            inner: Arc::new(RefreshSchedulerRef {
                refresher,
                interval,
                in_progress: Arc::new(AtomicBool::new(false)),
                sched: Mutex::new(None),
            }),
        }
    }

    /// Registers the repeated refresh job, starts ticking and kicks off one immediate cycle.
    ///
    /// Idempotent: calling it while already running logs a warning and returns Ok.
    ///
    /// # Returns
    /// - `Ok(())` - Scheduler started (or already running)
    /// - `Err(Error::SchedulerError)` - The job could not be registered or the scheduler started
    pub async fn start(&self) -> Result<(), Error> {
        let mut slot = self.inner.sched.lock().await;

        if slot.is_some() {
            tracing::warn!("Refresh scheduler is already running");
            return Ok(());
        }

        let sched = JobScheduler::new().await?;

        let refresher = self.inner.refresher.clone();
        let in_progress = Arc::clone(&self.inner.in_progress);

        sched
            .add(Job::new_repeated_async(self.inner.interval, move |_, _| {
                let refresher = refresher.clone();
                let in_progress = Arc::clone(&in_progress);

                Box::pin(async move {
                    run_tick(refresher, in_progress).await;
                })
            })?)
            .await?;

        sched.start().await?;
        *slot = Some(sched);

        tracing::info!(
            "Started flight status refresh every {}s",
            self.inner.interval.as_secs()
        );

        tokio::spawn(run_tick(
            self.inner.refresher.clone(),
            Arc::clone(&self.inner.in_progress),
        ));

        Ok(())
    }

    /// Stops scheduling further cycles.
    ///
    /// A cycle already in progress is allowed to finish. Calling it while stopped is a no-op.
    pub async fn stop(&self) -> Result<(), Error> {
        let Some(mut sched) = self.inner.sched.lock().await.take() else {
            return Ok(());
        };

        sched.shutdown().await?;
        tracing::info!("Stopped flight status refresh scheduler");

        Ok(())
    }

    pub async fn is_running(&self) -> bool {
        self.inner.sched.lock().await.is_some()
    }

    /// Whether a refresh cycle is executing right now.
    pub fn is_refreshing(&self) -> bool {
        self.inner.in_progress.load(Ordering::Acquire)
    }

    /// Runs one refresh cycle immediately, outside the schedule.
    ///
    /// # Returns
    /// - `Ok(RefreshReport)` - The cycle completed
    /// - `Err(Error::RefreshError)` - Another cycle is in progress
    /// - `Err(Error::StoreError)` - Storage failed during the cycle
    pub async fn run_now(&self) -> Result<RefreshReport, Error> {
        run_guarded(&self.inner.refresher, &self.inner.in_progress).await
    }
}
