use std::fs::File;

use inv_axum::{router, start_server};
use inv_json::JsonStore;
use invdemo::{AppConfig, Cli};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // By convention, we leverage `tracing` to instrument and log various
    // operations throughout this project. Accordingly, we subscribe to
    // these events so we can write them to stdio.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Create config with proper layering of CLI args
    let cli = Cli::import()?;
    let AppConfig { server, database } = AppConfig::load(&cli)?;

    // Open (or create) the dataset store
    let store = JsonStore::open(&database).await?;
    match &database.database_path {
        Some(path) => tracing::info!("serving inventory from {}", path.display()),
        None => tracing::info!("serving inventory from memory"),
    }

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let schema = router(store).1;
        serde_json::to_writer_pretty(File::create(path)?, &*schema)?;
        return Ok(());
    }

    start_server(server, store).await?;

    Ok(())
}
