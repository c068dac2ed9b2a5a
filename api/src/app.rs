//! Application factory
//!
//! Builds the Actix-web application around a shared `AppState`. The binary
//! and the integration tests both go through `create_app`.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{http::StatusCode, middleware::Logger, web, App, HttpResponse};

use aegis_core::RevocationLedger;

use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::json_error_handler;
use crate::routes::{auth, users};

pub use crate::routes::AppState;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "aegis";

/// Create and configure the application with all dependencies
pub fn create_app<L>(
    app_state: web::Data<AppState<L>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    L: RevocationLedger + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/auth")
                .route("/validate", web::post().to(auth::validate::<L>))
                .route("/introspect", web::post().to(auth::introspect::<L>))
                .route("/revoke", web::post().to(auth::revoke::<L>)),
        )
        .service(web::scope("/users").route("/refresh", web::post().to(users::refresh::<L>)))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new("The requested resource was not found").to_response(StatusCode::NOT_FOUND)
}
