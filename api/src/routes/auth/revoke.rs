use actix_web::{web, HttpResponse};
use validator::Validate;

use aegis_core::RevocationLedger;

use crate::dto::auth::{RevokeTokenRequest, RevokeTokenResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /auth/revoke
///
/// Blacklists a token until its natural expiry. Revoking a token twice
/// succeeds both times.
///
/// # Request Body
///
/// ```json
/// {
///     "token": "eyJ..."
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "success": true,
///     "message": "Token revoked successfully"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Invalid body, or the token does not verify
/// - 500 Internal Server Error: Revocation system unavailable
pub async fn revoke<L: RevocationLedger + 'static>(
    state: web::Data<AppState<L>>,
    request: web::Json<RevokeTokenRequest>,
) -> HttpResponse {
    tracing::info!("Token revocation request received");

    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    match state.token_service.revoke(&request.token).await {
        Ok(outcome) => HttpResponse::Ok().json(RevokeTokenResponse::from(outcome)),
        Err(error) => handle_domain_error(error),
    }
}
