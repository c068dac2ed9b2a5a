//! Revocation ledger maintenance configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding the cleanup interval
pub const CLEANUP_INTERVAL_ENV: &str = "AEGIS_BLACKLIST_CLEANUP_INTERVAL_SECS";

/// Default cleanup interval (one hour)
pub const DEFAULT_CLEANUP_INTERVAL_SECONDS: u64 = 3600;

/// Configuration for the periodic blacklist sweep
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlacklistConfig {
    /// How often expired entries are purged, in seconds
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_seconds: u64,

    /// Whether the background sweep runs at all
    #[serde(default = "default_cleanup_enabled")]
    pub cleanup_enabled: bool,
}

impl Default for BlacklistConfig {
    fn default() -> Self {
        Self {
            cleanup_interval_seconds: DEFAULT_CLEANUP_INTERVAL_SECONDS,
            cleanup_enabled: true,
        }
    }
}

impl BlacklistConfig {
    pub fn from_env() -> Self {
        let cleanup_interval_seconds = env::var(CLEANUP_INTERVAL_ENV)
            .ok()
            .map(|raw| parse_interval(&raw))
            .unwrap_or(DEFAULT_CLEANUP_INTERVAL_SECONDS);

        Self {
            cleanup_interval_seconds,
            cleanup_enabled: true,
        }
    }
}

fn parse_interval(raw: &str) -> u64 {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => secs,
        _ => {
            tracing::warn!(
                "Invalid {} value '{}', using default {} seconds",
                CLEANUP_INTERVAL_ENV,
                raw,
                DEFAULT_CLEANUP_INTERVAL_SECONDS
            );
            DEFAULT_CLEANUP_INTERVAL_SECONDS
        }
    }
}

fn default_cleanup_interval() -> u64 {
    DEFAULT_CLEANUP_INTERVAL_SECONDS
}

fn default_cleanup_enabled() -> bool {
    true
}
