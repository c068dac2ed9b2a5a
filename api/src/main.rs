use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::info;

use aegis_api::app::{create_app, AppState};
use aegis_api::config::Config;
use aegis_api::telemetry;
use aegis_core::{BlacklistCleanupService, MemoryRevocationLedger, TokenCodec, TokenService};
use aegis_shared::{Environment, LoggingConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing before any configuration is parsed so fallbacks are logged
    telemetry::init_tracing(&LoggingConfig::from_env(Environment::from_env()));

    let config = Config::from_env();
    info!(environment = %config.environment(), "Starting Aegis token service");

    // One ledger per process, shared by the service and the cleanup task
    let ledger = Arc::new(MemoryRevocationLedger::new());
    let codec = TokenCodec::new(config.token_service_config());
    let token_service = Arc::new(TokenService::new(codec, Arc::clone(&ledger)));

    let cleanup_service = Arc::new(BlacklistCleanupService::new(
        Arc::clone(&ledger),
        config.cleanup_config(),
    ));
    let cleanup_handle = cleanup_service.start_background_task();

    let app_state = web::Data::new(AppState::new(token_service));

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.app.server.workers > 0 {
        server = server.workers(config.app.server.workers);
    }

    let result = server.bind(&bind_address)?.run().await;

    if let Some(handle) = cleanup_handle {
        handle.shutdown().await;
    }
    info!("Aegis token service stopped");

    result
}
