//! Repository interfaces and their in-process implementations.

pub mod blacklist;

pub use blacklist::{MemoryRevocationLedger, RevocationLedger};
