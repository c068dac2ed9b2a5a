//! HTTP surface of the Aegis token service
//!
//! Exposed as a library so integration tests can build the application
//! without binding a socket.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod routes;
pub mod telemetry;
