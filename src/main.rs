use dotenvy::dotenv;

mod config;
mod services;
mod utils;

use crate::config::ServerConfig;
use crate::services::rest::server::RestServer;
use crate::utils::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, config falls back to defaults.
    let _ = dotenv();

    let config = ServerConfig::from_env()?;
    init_logging(config.log_level);

    let server = RestServer::new(&config).await?;
    server.serve().await
}
