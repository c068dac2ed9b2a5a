//! Server configuration module

use serde::{Deserialize, Serialize};
use std::env;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8080,
            workers: 0,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load from `AEGIS_SERVER_HOST` / `AEGIS_SERVER_PORT`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("AEGIS_SERVER_HOST").unwrap_or(defaults.host);
        let port = match env::var("AEGIS_SERVER_PORT") {
            Ok(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => {
                    tracing::info!("Using server port from environment: {}", port);
                    port
                }
                Err(_) => {
                    tracing::warn!(
                        "Invalid AEGIS_SERVER_PORT '{}', using default {}",
                        raw,
                        defaults.port
                    );
                    defaults.port
                }
            },
            Err(_) => defaults.port,
        };

        Self {
            host,
            port,
            workers: defaults.workers,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ServerConfig::new("127.0.0.1", 9090);
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(ServerConfig::default().bind_address(), "0.0.0.0:8080");
    }
}
