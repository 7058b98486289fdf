//! Server configuration module

use clap::Parser;
use printshop_app::secrets::OpenBaoArgs;

use crate::config::{
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    store::StoreConfig,
};

pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod store;

/// Printshop JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "printshop-json", about = "Printshop JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request diagnostics settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Catalog and checkout settings.
    #[command(flatten)]
    pub store: StoreConfig,

    /// `OpenBao` gateway secret settings.
    #[command(flatten)]
    pub secrets: OpenBaoArgs,
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
    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 5] = [
        "printshop-json",
        "--openbao-addr",
        "http://bao:8200",
        "--openbao-token",
        "token",
    ];

    #[test]
    fn defaults_apply_when_only_secrets_are_given() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.store.currency, "INR");
        assert_eq!(config.store.min_order_value, "259");
        assert_eq!(config.secrets.openbao_kv_mount, "secret");
        assert_eq!(config.store.max_carts, 100_000);
        assert_eq!(config.store.cart_idle_timeout_secs, 86_400);
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn missing_openbao_token_is_an_error() {
        let result = ServerConfig::try_parse_from([
            "printshop-json",
            "--openbao-addr",
            "http://bao:8200",
        ]);

        assert!(result.is_err(), "token must be required");
    }
}
