use aegis_core::{Claims, RevocationOutcome, TokenPair, ValidationOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ValidateTokenRequest {
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,
}

/// Always returned with 200; `valid` carries the verdict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateTokenResponse {
    pub valid: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ValidationOutcome> for ValidateTokenResponse {
    fn from(outcome: ValidationOutcome) -> Self {
        match outcome {
            ValidationOutcome::Valid { claims, expires_at } => Self {
                valid: true,
                user: Some(UserInfo::from(claims)),
                expires_at: Some(expires_at),
                error: None,
            },
            ValidationOutcome::Invalid { reason } => Self {
                valid: false,
                user: None,
                expires_at: None,
                error: Some(reason.to_string()),
            },
        }
    }
}

/// Identity carried by a validated token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub subject: String,
    pub roles: Vec<String>,
    pub permissions: Vec<String>,
}

impl From<Claims> for UserInfo {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.user_id,
            subject: claims.subject,
            roles: claims.roles,
            permissions: claims.permissions,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct IntrospectTokenRequest {
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,

    /// "access_token" or "refresh_token"; informational only
    #[serde(default)]
    pub token_type_hint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RevokeTokenRequest {
    #[validate(length(min = 1, message = "token is required"))]
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokeTokenResponse {
    pub success: bool,
    pub message: String,
}

impl From<RevocationOutcome> for RevokeTokenResponse {
    fn from(outcome: RevocationOutcome) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "refresh_token is required"))]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            expires_at: pair.expires_at,
            refresh_expires_at: pair.refresh_expires_at,
        }
    }
}
