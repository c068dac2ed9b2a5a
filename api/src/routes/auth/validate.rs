use actix_web::{web, HttpResponse};
use validator::Validate;

use aegis_core::RevocationLedger;

use crate::dto::auth::{ValidateTokenRequest, ValidateTokenResponse};
use crate::handlers::validation_error_response;
use crate::routes::AppState;

/// Handler for POST /auth/validate
///
/// Validates a token of either kind and returns the claims it carries.
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
/// ## 200 OK, valid token
/// ```json
/// {
///     "valid": true,
///     "user": {
///         "id": "550e8400-e29b-41d4-a716-446655440000",
///         "subject": "alice@example.com",
///         "roles": ["admin"],
///         "permissions": ["read:users"]
///     },
///     "expires_at": "2025-08-14T10:00:00Z"
/// }
/// ```
///
/// ## 200 OK, rejected token
/// ```json
/// {
///     "valid": false,
///     "error": "token expired"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: Body is not `{token}` or the token is empty
pub async fn validate<L: RevocationLedger + 'static>(
    state: web::Data<AppState<L>>,
    request: web::Json<ValidateTokenRequest>,
) -> HttpResponse {
    tracing::info!("Token validation request received");

    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    let outcome = state.token_service.validate(&request.token).await;
    HttpResponse::Ok().json(ValidateTokenResponse::from(outcome))
}
