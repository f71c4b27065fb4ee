use crate::server::{scheduler::RefreshScheduler, store::TrackerStore};

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub store: TrackerStore,
    pub scheduler: RefreshScheduler,
}
