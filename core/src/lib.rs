//! # Aegis Core
//!
//! Token lifecycle subsystem of the Aegis identity provider.
//! This crate contains the token entities, the signing codec, the revocation
//! ledger and the service that composes them into issuance, validation,
//! introspection and revocation.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{BlacklistEntry, Claims, TokenKind, TokenPair};
pub use domain::value_objects::{IntrospectionResponse, RevocationOutcome, ValidationOutcome};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{MemoryRevocationLedger, RevocationLedger};
pub use services::{
    BlacklistCleanupConfig, BlacklistCleanupService, CleanupResult, CleanupTaskHandle,
    SigningSecret, TokenCodec, TokenService, TokenServiceConfig,
};
