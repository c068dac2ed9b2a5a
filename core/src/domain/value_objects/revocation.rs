//! Result of a revocation request.

use serde::{Deserialize, Serialize};

pub const REVOKED_MESSAGE: &str = "Token revoked successfully";
pub const ALREADY_REVOKED_MESSAGE: &str = "Token already revoked";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationOutcome {
    pub success: bool,
    pub message: String,
    /// Set when the JTI was blacklisted before this request
    #[serde(skip)]
    pub already_revoked: bool,
}

impl RevocationOutcome {
    pub fn revoked() -> Self {
        Self {
            success: true,
            message: REVOKED_MESSAGE.to_string(),
            already_revoked: false,
        }
    }

    pub fn already_revoked() -> Self {
        Self {
            success: true,
            message: ALREADY_REVOKED_MESSAGE.to_string(),
            already_revoked: true,
        }
    }
}
