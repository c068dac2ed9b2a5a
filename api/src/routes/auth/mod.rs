//! Token verification route handlers
//!
//! Public endpoints for client applications holding tokens issued by Aegis:
//! - Validation with user claims
//! - RFC 7662 introspection
//! - Revocation

pub mod introspect;
pub mod revoke;
pub mod validate;

pub use introspect::introspect;
pub use revoke::revoke;
pub use validate::validate;
