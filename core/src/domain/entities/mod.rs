//! Domain entities representing tokens and revocation records.

pub mod blacklist;
pub mod token;


// Re-export commonly used types
pub use blacklist::BlacklistEntry;
pub use token::{Claims, TokenKind, TokenPair, JWT_ISSUER, REFRESH_GRACE_MINUTES};
