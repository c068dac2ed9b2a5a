//! Token signing configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable holding the HMAC signing secret
pub const JWT_SECRET_ENV: &str = "AEGIS_JWT_SECRET";

/// Environment variable holding the access token lifetime in minutes
pub const JWT_EXP_TIME_ENV: &str = "AEGIS_JWT_EXP_TIME";

/// Access token lifetime used when nothing valid is configured (24 hours)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 1440;

/// JWT signing configuration
///
/// The secret is optional here: resolving a missing secret into a generated
/// one is the token codec's job, so that the generated value never leaves
/// process memory.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret for signing tokens, if configured
    #[serde(default)]
    pub secret: Option<String>,

    /// Access token lifetime in minutes
    #[serde(default = "default_access_token_expiry_minutes")]
    pub access_token_expiry_minutes: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: None,
            access_token_expiry_minutes: DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Some(secret.into()),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes, falling back to the default for
    /// non-positive values
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = if minutes > 0 {
            minutes
        } else {
            DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES
        };
        self
    }

    /// Load from `AEGIS_JWT_SECRET` and `AEGIS_JWT_EXP_TIME`
    pub fn from_env() -> Self {
        let secret = configured_secret(env::var(JWT_SECRET_ENV).ok());
        let raw_expiry = env::var(JWT_EXP_TIME_ENV).ok();

        Self {
            secret,
            access_token_expiry_minutes: parse_expiry_minutes(raw_expiry.as_deref()),
        }
    }
}

/// An empty secret counts as unset; anything else is used verbatim.
fn configured_secret(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty())
}

/// Parse an access token lifetime in minutes.
///
/// Absent, non-numeric and non-positive values all yield the default.
pub fn parse_expiry_minutes(raw: Option<&str>) -> i64 {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        tracing::info!(
            "Using default token expiration: {} minutes",
            DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES
        );
        return DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES;
    };

    match raw.parse::<i64>() {
        Ok(minutes) if minutes > 0 => {
            tracing::info!("Using token expiration: {} minutes", minutes);
            minutes
        }
        _ => {
            tracing::warn!(
                "Invalid {} value '{}', using default {} minutes",
                JWT_EXP_TIME_ENV,
                raw,
                DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES
            );
            DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES
        }
    }
}

fn default_access_token_expiry_minutes() -> i64 {
    DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expiry_minutes() {
        assert_eq!(parse_expiry_minutes(None), DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES);
        assert_eq!(parse_expiry_minutes(Some("")), DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES);
        assert_eq!(parse_expiry_minutes(Some("30")), 30);
        assert_eq!(parse_expiry_minutes(Some(" 45 ")), 45);
    }

    #[test]
    fn test_parse_expiry_minutes_rejects_invalid() {
        assert_eq!(parse_expiry_minutes(Some("0")), DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES);
        assert_eq!(parse_expiry_minutes(Some("-5")), DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES);
        assert_eq!(parse_expiry_minutes(Some("ten")), DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES);
        assert_eq!(parse_expiry_minutes(Some("1.5")), DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES);
    }

    #[test]
    fn test_with_access_expiry_minutes() {
        let config = JwtConfig::new("secret").with_access_expiry_minutes(60);
        assert_eq!(config.access_token_expiry_minutes, 60);
        assert_eq!(config.secret.as_deref(), Some("secret"));

        let config = JwtConfig::default().with_access_expiry_minutes(-1);
        assert_eq!(config.access_token_expiry_minutes, DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES);
        assert!(config.secret.is_none());
    }

    #[test]
    fn test_configured_secret_kept_verbatim() {
        assert_eq!(configured_secret(None), None);
        assert_eq!(configured_secret(Some(String::new())), None);
        assert_eq!(configured_secret(Some("   ".to_string())).as_deref(), Some("   "));
        assert_eq!(configured_secret(Some(" s3cret ".to_string())).as_deref(), Some(" s3cret "));
    }
}
