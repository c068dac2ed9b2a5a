//! Configuration for the token service

use aegis_shared::config::auth::{JwtConfig, DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES, JWT_SECRET_ENV};
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;

use crate::domain::entities::token::{JWT_ISSUER, REFRESH_GRACE_MINUTES};

/// Number of random bytes in a generated secret
const GENERATED_SECRET_BYTES: usize = 32;

/// HMAC signing secret
///
/// A generated secret lives only in process memory: every token signed with
/// it becomes unverifiable once the process restarts.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningSecret {
    value: String,
    generated: bool,
}

impl SigningSecret {
    /// Use the configured secret verbatim, or generate one when it is absent
    /// or empty
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured.filter(|s| !s.is_empty()) {
            Some(secret) => Self {
                value: secret.to_string(),
                generated: false,
            },
            None => {
                tracing::warn!(
                    "Using randomly generated JWT secret, consider setting the environment variable '{}'; \
                     tokens will not survive a restart",
                    JWT_SECRET_ENV
                );
                Self::generate()
            }
        }
    }

    /// Generate a hex-encoded random secret from the OS RNG
    pub fn generate() -> Self {
        let mut bytes = [0u8; GENERATED_SECRET_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self {
            value: hex::encode(bytes),
            generated: true,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningSecret")
            .field("value", &"<redacted>")
            .field("generated", &self.generated)
            .finish()
    }
}

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub secret: SigningSecret,
    /// Access token expiry in minutes
    pub access_token_expiry_minutes: i64,
    /// Extra refresh token lifetime in minutes
    pub refresh_grace_minutes: i64,
    /// JWT issuer
    pub issuer: String,
}

impl TokenServiceConfig {
    /// Configuration with an explicit secret and default lifetimes
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        Self {
            secret: SigningSecret::resolve(Some(&secret)),
            access_token_expiry_minutes: DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
            refresh_grace_minutes: REFRESH_GRACE_MINUTES,
            issuer: JWT_ISSUER.to_string(),
        }
    }

    /// Resolve the startup configuration
    pub fn from_jwt_config(jwt: &JwtConfig) -> Self {
        Self {
            secret: SigningSecret::resolve(jwt.secret.as_deref()),
            access_token_expiry_minutes: DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES,
            refresh_grace_minutes: REFRESH_GRACE_MINUTES,
            issuer: JWT_ISSUER.to_string(),
        }
        .with_access_expiry_minutes(jwt.access_token_expiry_minutes)
    }

    /// Set the access token lifetime; non-positive values keep the default
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry_minutes = if minutes > 0 {
            minutes
        } else {
            DEFAULT_ACCESS_TOKEN_EXPIRY_MINUTES
        };
        self
    }

    /// Access token lifetime in seconds, `None` on overflow
    pub fn access_lifetime_seconds(&self) -> Option<i64> {
        self.access_token_expiry_minutes.checked_mul(60)
    }

    /// Refresh grace interval in seconds, `None` on overflow
    pub fn refresh_grace_seconds(&self) -> Option<i64> {
        self.refresh_grace_minutes.checked_mul(60)
    }
}
