//! Integration tests for the validation endpoint

use actix_web::{test, web};
use aegis_api::app::{create_app, AppState};
use aegis_core::{MemoryRevocationLedger, TokenCodec, TokenService, TokenServiceConfig};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

fn create_test_state() -> (
    Arc<TokenService<MemoryRevocationLedger>>,
    web::Data<AppState<MemoryRevocationLedger>>,
) {
    let codec = TokenCodec::new(TokenServiceConfig::new("test_secret"));
    let token_service = Arc::new(TokenService::new(codec, Arc::new(MemoryRevocationLedger::new())));
    let app_state = web::Data::new(AppState::new(token_service.clone()));
    (token_service, app_state)
}

#[actix_web::test]
async fn test_validate_valid_token() {
    let (token_service, app_state) = create_test_state();
    let user_id = Uuid::new_v4();
    let pair = token_service
        .issue(
            user_id,
            "alice@example.com",
            &["admin".to_string()],
            &["read:users".to_string()],
        )
        .unwrap();

    let app = test::init_service(create_app(app_state)).await;

    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .set_json(json!({ "token": pair.access_token }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["valid"], true);
    assert_eq!(body["user"]["id"], user_id.to_string());
    assert_eq!(body["user"]["subject"], "alice@example.com");
    assert_eq!(body["user"]["roles"], json!(["admin"]));
    assert_eq!(body["user"]["permissions"], json!(["read:users"]));
    assert!(body["expires_at"].is_string());
    assert!(body.get("error").is_none());
}

#[actix_web::test]
async fn test_validate_invalid_token_returns_ok() {
    let (_, app_state) = create_test_state();
    let app = test::init_service(create_app(app_state)).await;

    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .set_json(json!({ "token": "garbage" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "valid": false, "error": "malformed token" }));
}

#[actix_web::test]
async fn test_validate_token_from_other_issuer_secret() {
    let (_, app_state) = create_test_state();
    let foreign = TokenCodec::new(TokenServiceConfig::new("some_other_secret"))
        .issue(Uuid::new_v4(), "mallory", &[], &[])
        .unwrap();

    let app = test::init_service(create_app(app_state)).await;

    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .set_json(json!({ "token": foreign.access_token }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["valid"], false);
    assert_eq!(body["error"], "invalid signature");
}

#[actix_web::test]
async fn test_validate_after_revoke() {
    let (token_service, app_state) = create_test_state();
    let pair = token_service
        .issue(Uuid::new_v4(), "bob@example.com", &[], &[])
        .unwrap();

    let app = test::init_service(create_app(app_state)).await;

    let req = test::TestRequest::post()
        .uri("/auth/revoke")
        .set_json(json!({ "token": pair.access_token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .set_json(json!({ "token": pair.access_token }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, json!({ "valid": false, "error": "token revoked" }));
}

#[actix_web::test]
async fn test_validate_rejects_empty_token() {
    let (_, app_state) = create_test_state();
    let app = test::init_service(create_app(app_state)).await;

    let req = test::TestRequest::post()
        .uri("/auth/validate")
        .set_json(json!({ "token": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}
