use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use aegis_core::{DomainError, RevocationLedger, TokenError};

use crate::dto::auth::{RefreshTokenRequest, TokenPairResponse};
use crate::dto::{ErrorResponse, ErrorResponseExt};
use crate::handlers::validation_error_response;
use crate::routes::AppState;

pub const INVALID_REFRESH_TOKEN_MESSAGE: &str = "invalid refresh token";
pub const TOKEN_GENERATION_FAILED_MESSAGE: &str = "failed to generate tokens";

/// Handler for POST /users/refresh
///
/// Exchanges a refresh token for a new token pair carrying the same identity,
/// roles and permissions.
///
/// # Request Body
///
/// ```json
/// {
///     "refresh_token": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "access_token": "eyJ...",
///     "refresh_token": "eyJ...",
///     "expires_at": "2025-08-14T10:00:00Z",
///     "refresh_expires_at": "2025-08-14T10:01:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid body
/// - 401 Unauthorized: Invalid, expired, revoked or non-refresh token
/// - 500 Internal Server Error: Token generation failure
pub async fn refresh<L: RevocationLedger + 'static>(
    state: web::Data<AppState<L>>,
    request: web::Json<RefreshTokenRequest>,
) -> HttpResponse {
    tracing::info!("Token refresh request received");

    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state.token_service.refresh_pair(&request.refresh_token).await {
        Ok(pair) => HttpResponse::Ok().json(TokenPairResponse::from(pair)),
        Err(DomainError::Token(TokenError::SigningFailed)) => {
            tracing::error!("Token refresh failed: could not sign new pair");
            ErrorResponse::new(TOKEN_GENERATION_FAILED_MESSAGE)
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Err(error) => {
            tracing::info!("Token refresh rejected: {}", error);
            ErrorResponse::new(INVALID_REFRESH_TOKEN_MESSAGE).to_response(StatusCode::UNAUTHORIZED)
        }
    }
}
