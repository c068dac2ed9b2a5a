//! Token codec: the cryptographic trust boundary
//!
//! Turns claims into HS256-signed JWTs and back. Only HS256 is accepted on
//! decode, whatever the token header claims, so a token cannot pick its own
//! verification algorithm.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind, TokenPair};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// The only signing algorithm issued or accepted
pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Encodes and decodes signed tokens with the process-wide secret
pub struct TokenCodec {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec from a resolved configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(SIGNING_ALGORITHM);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss"]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Generates an access/refresh token pair
    ///
    /// Both tokens share the issue instant; the refresh token expires exactly
    /// one grace interval after the access token.
    ///
    /// # Arguments
    ///
    /// * `user_id` - Unique identifier for the user
    /// * `subject` - User's subject (typically email or username)
    /// * `roles` - Roles assigned to the user
    /// * `permissions` - Permissions granted to the user
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both tokens with their expiry timestamps
    /// * `Err(TokenError::SigningFailed)` - Signing failed or the configured
    ///   lifetime overflows
    pub fn issue(
        &self,
        user_id: Uuid,
        subject: &str,
        roles: &[String],
        permissions: &[String],
    ) -> Result<TokenPair, TokenError> {
        let issued_at = Utc::now().timestamp();
        let access_exp = self
            .config
            .access_lifetime_seconds()
            .and_then(|lifetime| issued_at.checked_add(lifetime))
            .ok_or(TokenError::SigningFailed)?;
        let refresh_exp = self
            .config
            .refresh_grace_seconds()
            .and_then(|grace| access_exp.checked_add(grace))
            .ok_or(TokenError::SigningFailed)?;

        let access = Claims::new(
            user_id,
            subject,
            roles.to_vec(),
            permissions.to_vec(),
            TokenKind::Access,
            issued_at,
            access_exp,
        );
        let refresh = Claims::new(
            user_id,
            subject,
            roles.to_vec(),
            permissions.to_vec(),
            TokenKind::Refresh,
            issued_at,
            refresh_exp,
        );

        let expires_at = access.expires_at().ok_or(TokenError::SigningFailed)?;
        let refresh_expires_at = refresh.expires_at().ok_or(TokenError::SigningFailed)?;

        Ok(TokenPair {
            access_token: self.encode(&access)?,
            refresh_token: self.encode(&refresh)?,
            expires_at,
            refresh_expires_at,
        })
    }

    /// Encodes claims into a signed JWT
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(SIGNING_ALGORITHM), claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to sign token: {}", e);
            TokenError::SigningFailed
        })
    }

    /// Verifies structure, algorithm, signature, issuer and expiry
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(TokenError::from)
    }

    /// Decodes a token that must be a refresh token
    pub fn decode_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_kind(token, TokenKind::Refresh)
    }

    /// Decodes a token that must be an access token
    pub fn decode_access(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_kind(token, TokenKind::Access)
    }

    fn decode_kind(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError> {
        let claims = self.decode(token)?;
        if claims.token_type != expected {
            return Err(TokenError::WrongKind { expected });
        }
        Ok(claims)
    }
}
