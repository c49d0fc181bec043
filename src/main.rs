use anyhow::Result;
use i18nly::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("i18nly=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting I18nly admin service v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from environment
    let config = config::Config::from_env()?;

    server::run(config).await
}
