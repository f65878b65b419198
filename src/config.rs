use std::env;
use std::str::FromStr;

use anyhow::Context;
use tracing::Level;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

/// Listener configuration, read from the environment with defaults
/// matching the service's documented behavior.
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: Level,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("SERVER_PORT") {
            Ok(raw_port) => raw_port
                .parse()
                .with_context(|| format!("Invalid SERVER_PORT value: {}", raw_port))?,
            Err(_) => DEFAULT_PORT,
        };
        let log_level = match env::var("LOG_LEVEL") {
            Ok(raw_level) => Level::from_str(&raw_level)
                .with_context(|| format!("Invalid LOG_LEVEL value: {}", raw_level))?,
            Err(_) => DEFAULT_LOG_LEVEL,
        };

        Ok(ServerConfig {
            host,
            port,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test because the process environment is shared between tests.
    #[test]
    fn reads_environment_with_defaults() {
        env::remove_var("SERVER_HOST");
        env::remove_var("SERVER_PORT");
        env::remove_var("LOG_LEVEL");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, Level::INFO);

        env::set_var("SERVER_PORT", "3030");
        env::set_var("LOG_LEVEL", "debug");
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.port, 3030);
        assert_eq!(config.log_level, Level::DEBUG);

        env::set_var("SERVER_PORT", "not-a-port");
        assert!(ServerConfig::from_env().is_err());

        env::remove_var("SERVER_PORT");
        env::remove_var("LOG_LEVEL");
    }
}
