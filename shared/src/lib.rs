//! Shared utilities and common types for the Aegis server
//!
//! This crate provides functionality used by both the core and the API crate:
//! - Configuration resolved from the process environment
//! - The common error response body

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, BlacklistConfig, Environment, JwtConfig, LogFormat, LoggingConfig, ServerConfig,
};
pub use errors::ErrorResponse;
