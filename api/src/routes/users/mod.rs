//! User session route handlers

pub mod refresh;

pub use refresh::refresh;
