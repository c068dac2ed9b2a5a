//! Revocation record for a single token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A revoked token, tracked until it would have expired on its own
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    /// JWT ID from the token's claims
    pub jti: String,

    /// When the token expires naturally (copied from its `exp` claim)
    pub expires_at: DateTime<Utc>,

    /// When the token was revoked
    pub revoked_at: DateTime<Utc>,
}

impl BlacklistEntry {
    pub fn new(jti: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            jti: jti.into(),
            expires_at,
            revoked_at: Utc::now(),
        }
    }

    /// Whether the shadowed token has died naturally by `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
