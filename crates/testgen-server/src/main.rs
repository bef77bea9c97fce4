use anyhow::{Context, Result};
use testgen_server::config::ServerConfig;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    let dotenv_loaded = dotenv::dotenv().is_ok();

    // Load configuration from environment variables
    let config = ServerConfig::load().context("Failed to load configuration")?;

    testgen_server::init_logging(&config);
    if !dotenv_loaded {
        warn!(".env file not found");
    }

    // Run the server using the library's run function
    testgen_server::run(config).await.context("Server error")?;

    Ok(())
}
