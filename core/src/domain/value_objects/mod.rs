//! Value objects returned by the token lifecycle operations.

pub mod introspection;
pub mod revocation;
pub mod validation;

// Re-export commonly used types
pub use introspection::{build_scope, IntrospectionResponse, DEFAULT_CLIENT_ID};
pub use revocation::RevocationOutcome;
pub use validation::ValidationOutcome;
