//! Route handlers and the state they share

pub mod auth;
pub mod users;

use std::sync::Arc;

use aegis_core::{RevocationLedger, TokenService};

/// Application state that holds shared services
pub struct AppState<L: RevocationLedger> {
    pub token_service: Arc<TokenService<L>>,
}

impl<L: RevocationLedger> AppState<L> {
    pub fn new(token_service: Arc<TokenService<L>>) -> Self {
        Self { token_service }
    }
}
