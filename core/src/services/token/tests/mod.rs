//! Tests for the token service module


use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind};
use crate::services::token::{TokenCodec, TokenServiceConfig};

pub(super) const TEST_SECRET: &str = "test-secret-for-unit-tests";

pub(super) fn test_codec() -> TokenCodec {
    TokenCodec::new(TokenServiceConfig::new(TEST_SECRET).with_access_expiry_minutes(15))
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Claims for an access token issued now and expiring after `ttl_seconds`
pub(super) fn access_claims(ttl_seconds: i64) -> Claims {
    let now = Utc::now().timestamp();
    Claims::new(
        Uuid::new_v4(),
        "alice@example.com",
        strings(&["admin"]),
        strings(&["read:users"]),
        TokenKind::Access,
        now,
        now + ttl_seconds,
    )
}

/// Sign claims with the test secret but an arbitrary algorithm
pub(super) fn sign_with(algorithm: Algorithm, claims: &Claims) -> String {
    encode(
        &Header::new(algorithm),
        claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}
