//! First-boot initialization for MongoDB.
//!
//! Run with:
//! ```
//! MONGO_INITDB_ROOT_PASSWORD=... N8N_MONGODB_PASSWORD=... cargo run -p mongo-init
//! ```

use mongo_init::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let connection = ConnectionConfig::from_env();
    let config = InitConfig::from_env();

    tracing::debug!("Resolved configuration: {:?}", config);

    let server = MongoServer::connect(&connection).await?;
    let report = Bootstrap::new(&server, config).run().await?;

    // Summary output
    tracing::info!("  Root user: {}", serde_json::to_string(&report.root_login)?);
    tracing::info!("  n8n user: {}", serde_json::to_string(&report.app_login)?);
    tracing::info!("  Files database: {}", serde_json::to_string(&report.files_database)?);
    tracing::info!("  n8n database: {}", serde_json::to_string(&report.app_database)?);
    if report.has_failures() {
        tracing::warn!("Some optional steps failed; see the errors above");
    }

    Ok(())
}
