use std::{path::Path, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    provider::{HttpStatusProvider, StatusProvider},
    scheduler::RefreshScheduler,
    service::{
        manifest::ManifestService,
        refresh::{RefreshConfig, StatusRefresher},
    },
    store::TrackerStore,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the HTTP status provider with the configured credentials
pub fn build_status_provider(config: &Config) -> Result<Arc<dyn StatusProvider>, Error> {
    let provider = HttpStatusProvider::new(
        &config.provider_url,
        config.provider_api_key.clone(),
        &config.user_agent,
        config.provider_timeout,
    )?;

    Ok(Arc::new(provider))
}

/// Ingest the manifest at `path` into the store, used for the optional startup import
pub async fn ingest_manifest_file(store: &TrackerStore, path: &str) -> Result<(), Error> {
    let file = std::fs::File::open(path)?;
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());

    let report = ManifestService::new(store).ingest(&file_name, file).await?;

    tracing::info!(
        "Imported {} passenger(s) from {}, skipped {} row(s)",
        report.ingested,
        path,
        report.skipped.len()
    );

    Ok(())
}

/// Build the refresh scheduler and start it, which also runs the first cycle
pub async fn start_scheduler(
    config: &Config,
    store: &TrackerStore,
    provider: Arc<dyn StatusProvider>,
) -> Result<RefreshScheduler, Error> {
    let refresher = StatusRefresher::new(
        store.clone(),
        provider,
        RefreshConfig {
            provider_timeout: config.provider_timeout,
            concurrency: config.refresh_concurrency,
        },
    );

    let scheduler = RefreshScheduler::new(refresher, config.refresh_interval);
    scheduler.start().await?;

    Ok(scheduler)
}
