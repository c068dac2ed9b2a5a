//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing secret and lifetimes
//! - `blacklist` - Revocation ledger maintenance
//! - `environment` - Deployment environment detection
//! - `logging` - Subscriber level and output format
//! - `server` - HTTP server binding

pub mod auth;
pub mod blacklist;
pub mod environment;
pub mod logging;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use blacklist::BlacklistConfig;
pub use environment::Environment;
pub use logging::{LogFormat, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Token signing configuration
    pub jwt: JwtConfig,

    /// Revocation ledger maintenance
    #[serde(default)]
    pub blacklist: BlacklistConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            jwt: JwtConfig::default(),
            blacklist: BlacklistConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            jwt: JwtConfig::from_env(),
            blacklist: BlacklistConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.jwt.access_token_expiry_minutes, auth::DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES);
        assert_eq!(config.blacklist.cleanup_interval_seconds, 3600);
        assert_eq!(config.server.port, 8080);
    }
}
