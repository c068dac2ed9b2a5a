//! Token entities for JWT-based authentication.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// JWT issuer
pub const JWT_ISSUER: &str = "aegis";

/// Extra lifetime of a refresh token beyond its paired access token
pub const REFRESH_GRACE_MINUTES: i64 = 1;

/// Discriminates the two halves of a token pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Access => "access",
            TokenKind::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Stable user identifier (UUID)
    pub user_id: String,

    /// Subject, typically the user's email
    pub subject: String,

    /// Role names, order irrelevant
    #[serde(default)]
    pub roles: Vec<String>,

    /// Permission names, order irrelevant
    #[serde(default)]
    pub permissions: Vec<String>,

    /// Access or refresh
    pub token_type: TokenKind,

    /// JWT ID, the revocation key
    pub jti: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl Claims {
    /// Creates claims with a fresh JTI
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `subject` - The user's subject (email or username)
    /// * `roles` - Roles granted to the user
    /// * `permissions` - Permissions granted to the user
    /// * `kind` - Access or refresh
    /// * `issued_at` - Issue time in seconds since the epoch
    /// * `expires_at` - Expiry time in seconds since the epoch
    pub fn new(
        user_id: Uuid,
        subject: impl Into<String>,
        roles: Vec<String>,
        permissions: Vec<String>,
        kind: TokenKind,
        issued_at: i64,
        expires_at: i64,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            subject: subject.into(),
            roles,
            permissions,
            token_type: kind,
            jti: Uuid::new_v4().to_string(),
            iat: issued_at,
            exp: expires_at,
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_uuid(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.user_id)
    }

    /// Expiry as a timestamp, `None` if `exp` is out of range
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// Token pair returned to the client
///
/// Nothing is kept server-side once the pair is handed out; only revocation
/// leaves a trace, in the blacklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry
    pub expires_at: DateTime<Utc>,

    /// Refresh token expiry, always `expires_at` plus the grace interval
    pub refresh_expires_at: DateTime<Utc>,
}
