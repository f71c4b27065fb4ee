use skyward::server::{config::Config, model::app::AppState, router, startup, store::TrackerStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skyward=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("Skyward stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), skyward::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;
    let store = TrackerStore::open(db).await?;

    // Optional manifest to import before the first refresh
    if let Some(path) = std::env::args().nth(1) {
        startup::ingest_manifest_file(&store, &path).await?;
    }

    let provider = startup::build_status_provider(&config)?;
    let scheduler = startup::start_scheduler(&config, &store, provider).await?;

    let router = router::routes().with_state(AppState {
        store,
        scheduler: scheduler.clone(),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down");
        })
        .await?;

    scheduler.stop().await?;

    Ok(())
}
