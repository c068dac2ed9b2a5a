//! RFC 7662 introspection response.
//!
//! An inactive token serializes to exactly `{"active":false}`: RFC 7662
//! section 2.2 forbids returning any claim data for it, so every other field
//! is optional and skipped when absent.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::Claims;

/// Client identifier reported for every active token until clients are
/// registered individually
pub const DEFAULT_CLIENT_ID: &str = "aegis-default-client";

/// Token type reported for active tokens
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    /// Whether the token is currently active
    pub active: bool,

    /// Space-separated roles (`role:` prefixed) and permissions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// The token subject (email or username)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// The user identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl IntrospectionResponse {
    pub fn inactive() -> Self {
        Self::default()
    }

    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            active: true,
            scope: Some(build_scope(&claims.roles, &claims.permissions)),
            client_id: Some(DEFAULT_CLIENT_ID.to_string()),
            username: Some(claims.subject.clone()),
            token_type: Some(BEARER_TOKEN_TYPE.to_string()),
            exp: Some(claims.exp),
            iat: Some(claims.iat),
            sub: Some(claims.user_id.clone()),
            iss: Some(claims.iss.clone()),
            roles: Some(claims.roles.clone()),
            permissions: Some(claims.permissions.clone()),
        }
    }
}

/// Build the OAuth2 scope string: roles prefixed with `role:`, then
/// permissions verbatim, space-joined. Empty names are skipped.
pub fn build_scope(roles: &[String], permissions: &[String]) -> String {
    roles
        .iter()
        .filter(|role| !role.is_empty())
        .map(|role| format!("role:{}", role))
        .chain(
            permissions
                .iter()
                .filter(|permission| !permission.is_empty())
                .cloned(),
        )
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_scope() {
        assert_eq!(
            build_scope(&strings(&["admin"]), &strings(&["read:users"])),
            "role:admin read:users"
        );
        assert_eq!(
            build_scope(&strings(&["admin", "user"]), &strings(&["read:users", "write:users"])),
            "role:admin role:user read:users write:users"
        );
        assert_eq!(build_scope(&[], &strings(&["read:users"])), "read:users");
        assert_eq!(build_scope(&strings(&["admin"]), &[]), "role:admin");
    }

    #[test]
    fn test_build_scope_empty() {
        assert_eq!(build_scope(&[], &[]), "");
        assert_eq!(build_scope(&strings(&["", "admin"]), &strings(&[""])), "role:admin");
    }

    #[test]
    fn test_inactive_serializes_to_active_only() {
        let json = serde_json::to_value(IntrospectionResponse::inactive()).unwrap();
        assert_eq!(json, serde_json::json!({ "active": false }));
    }
}
