//! Token error taxonomy
//!
//! Every decode failure lands in exactly one variant. Callers outside the
//! crate see these either as the short `reason()` strings of the validation
//! endpoint or not at all (introspection reports only `active: false`).

use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

use crate::domain::entities::token::TokenKind;

/// Token-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Malformed token")]
    Malformed,

    #[error("Unexpected signing method")]
    UnexpectedAlgorithm,

    #[error("Expected a {expected} token")]
    WrongKind { expected: TokenKind },

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token revoked")]
    Revoked,

    #[error("Token generation failed")]
    SigningFailed,
}

impl TokenError {
    /// Reason string reported by the validation endpoint
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::Expired => "token expired",
            TokenError::InvalidSignature => "invalid signature",
            TokenError::Malformed => "malformed token",
            TokenError::UnexpectedAlgorithm => "invalid signing method",
            TokenError::Revoked => "token revoked",
            TokenError::WrongKind { .. }
            | TokenError::InvalidClaims
            | TokenError::SigningFailed => "invalid token",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                TokenError::UnexpectedAlgorithm
            }
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => TokenError::Malformed,
            _ => TokenError::InvalidClaims,
        }
    }
}
