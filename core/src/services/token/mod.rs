//! Token service module for JWT management
//!
//! This module handles all token-related operations including:
//! - HS256 token pair issuance and verification
//! - Validation and RFC 7662 introspection
//! - Revocation through the blacklist
//! - Background cleanup of expired blacklist entries

mod cleanup;
mod codec;
mod config;
mod service;

#[cfg(test)]
mod tests;

pub use cleanup::{BlacklistCleanupConfig, BlacklistCleanupService, CleanupResult, CleanupTaskHandle};
pub use codec::{TokenCodec, SIGNING_ALGORITHM};
pub use config::{SigningSecret, TokenServiceConfig};
pub use service::TokenService;
