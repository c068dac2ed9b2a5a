use actix_web::{error::InternalError, error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use aegis_core::DomainError;
use validator::ValidationErrors;

use crate::dto::{ErrorResponse, ErrorResponseExt};

/// Message for every token that fails to decode on revocation
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// Handle domain errors and convert them to appropriate HTTP responses
///
/// Token failures are collapsed into a single message so the cause of a
/// rejection is never revealed outside the validation endpoint.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Token(token_error) => {
            tracing::debug!("Rejected token: {}", token_error);
            ErrorResponse::new(INVALID_TOKEN_MESSAGE).to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::RevocationUnavailable => {
            let message = DomainError::RevocationUnavailable.to_string();
            tracing::error!("Domain Error: {}", message);
            ErrorResponse::new(message).to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Turn request DTO validation failures into a 400
pub fn validation_error_response(errors: ValidationErrors) -> HttpResponse {
    tracing::info!("Invalid request body: {}", errors);
    ErrorResponse::new(errors.to_string()).to_response(StatusCode::BAD_REQUEST)
}

/// `JsonConfig` error handler: malformed or mistyped bodies become
/// `400 {error}` instead of actix-web's plain-text default
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Invalid request body for {}: {}", req.path(), err);
    let response = ErrorResponse::new(err.to_string()).to_response(StatusCode::BAD_REQUEST);
    InternalError::from_response(err, response).into()
}
