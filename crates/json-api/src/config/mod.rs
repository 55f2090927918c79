//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Tally JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "tally-json", about = "Tally JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request logging and metrics settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_database_url_is_given() -> Result<(), clap::Error> {
        let config = ServerConfig::try_parse_from([
            "tally-json",
            "--database-url",
            "postgres://tally@localhost/tally",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698", "default bind address");
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);
        assert_eq!(config.database.database_url, "postgres://tally@localhost/tally");

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> Result<(), clap::Error> {
        let config = ServerConfig::try_parse_from([
            "tally-json",
            "--database-url",
            "postgres://tally@localhost/tally",
            "-H",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-format",
            "json",
        ])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:9000", "overridden bind address");
        assert!(
            matches!(config.logging.log_format, observability::LogFormat::Json),
            "expected json log format"
        );

        Ok(())
    }
}
