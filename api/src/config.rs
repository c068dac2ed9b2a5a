//! Runtime configuration for the API server

use aegis_core::{BlacklistCleanupConfig, TokenServiceConfig};
use aegis_shared::config::AppConfig;
use aegis_shared::Environment;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
}

impl Config {
    /// Load every sub-configuration from the process environment
    pub fn from_env() -> Self {
        Self {
            app: AppConfig::from_env(),
        }
    }

    pub fn environment(&self) -> Environment {
        self.app.environment
    }

    pub fn bind_address(&self) -> String {
        self.app.server.bind_address()
    }

    /// Token service settings; resolves (and possibly generates) the secret
    pub fn token_service_config(&self) -> TokenServiceConfig {
        TokenServiceConfig::from_jwt_config(&self.app.jwt)
    }

    pub fn cleanup_config(&self) -> BlacklistCleanupConfig {
        BlacklistCleanupConfig::from(&self.app.blacklist)
    }
}

impl From<AppConfig> for Config {
    fn from(app: AppConfig) -> Self {
        Self { app }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_shared::JwtConfig;

    #[test]
    fn test_token_service_config_uses_configured_secret() {
        let mut app = AppConfig::default();
        app.jwt = JwtConfig::new("configured").with_access_expiry_minutes(5);
        let config = Config::from(app);

        let token_config = config.token_service_config();
        assert!(!token_config.secret.is_generated());
        assert_eq!(token_config.access_token_expiry_minutes, 5);
    }

    #[test]
    fn test_cleanup_config_defaults() {
        let config = Config::from(AppConfig::default());
        let cleanup = config.cleanup_config();
        assert_eq!(cleanup.interval_seconds, 3600);
        assert!(cleanup.enabled);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
