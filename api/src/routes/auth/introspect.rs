use actix_web::{web, HttpResponse};
use validator::Validate;

use aegis_core::RevocationLedger;

use crate::dto::auth::IntrospectTokenRequest;
use crate::handlers::validation_error_response;
use crate::routes::AppState;

/// Handler for POST /auth/introspect
///
/// RFC 7662 token introspection. Always answers 200; a token that is
/// expired, forged, malformed or revoked yields exactly `{"active": false}`.
///
/// # Request Body
///
/// ```json
/// {
///     "token": "eyJ...",
///     "token_type_hint": "access_token"
/// }
/// ```
///
/// # Response
///
/// ## 200 OK, active token
/// ```json
/// {
///     "active": true,
///     "scope": "role:admin read:users",
///     "client_id": "aegis-default-client",
///     "username": "alice@example.com",
///     "token_type": "Bearer",
///     "exp": 1755165600,
///     "iat": 1755079200,
///     "sub": "550e8400-e29b-41d4-a716-446655440000",
///     "iss": "aegis",
///     "roles": ["admin"],
///     "permissions": ["read:users"]
/// }
/// ```
pub async fn introspect<L: RevocationLedger + 'static>(
    state: web::Data<AppState<L>>,
    request: web::Json<IntrospectTokenRequest>,
) -> HttpResponse {
    tracing::info!("Token introspection request received");

    if let Err(errors) = request.validate() {
        return validation_error_response(errors);
    }

    let response = state
        .token_service
        .introspect(&request.token, request.token_type_hint.as_deref())
        .await;
    HttpResponse::Ok().json(response)
}
