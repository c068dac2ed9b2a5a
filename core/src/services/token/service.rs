//! Token lifecycle service: the policy layer over the codec and the ledger

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::value_objects::{IntrospectionResponse, RevocationOutcome, ValidationOutcome};
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::RevocationLedger;

use super::codec::TokenCodec;

/// Service for issuing, validating, introspecting, revoking and refreshing
/// tokens
///
/// The ledger is injected by the owner of the process so that the service,
/// the cleanup task and any handler share one instance.
pub struct TokenService<L: RevocationLedger> {
    codec: TokenCodec,
    ledger: Option<Arc<L>>,
}

impl<L: RevocationLedger> TokenService<L> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `codec` - Token codec holding the signing secret
    /// * `ledger` - Shared revocation ledger
    pub fn new(codec: TokenCodec, ledger: Arc<L>) -> Self {
        Self {
            codec,
            ledger: Some(ledger),
        }
    }

    /// Creates a service with no revocation ledger wired in
    ///
    /// Revocation requests fail with `DomainError::RevocationUnavailable`;
    /// validation and introspection skip the blacklist check.
    pub fn without_ledger(codec: TokenCodec) -> Self {
        Self {
            codec,
            ledger: None,
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    pub fn ledger(&self) -> Option<&Arc<L>> {
        self.ledger.as_ref()
    }

    /// Issues a new token pair for a user
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - The generated token pair
    /// * `Err(DomainError::Token(TokenError::SigningFailed))` - Signing failed
    pub fn issue(
        &self,
        user_id: Uuid,
        subject: &str,
        roles: &[String],
        permissions: &[String],
    ) -> DomainResult<TokenPair> {
        let pair = self.codec.issue(user_id, subject, roles, permissions)?;
        tracing::info!(
            user_id = %user_id,
            expires_at = %pair.expires_at,
            "Issued token pair for {}",
            subject
        );
        Ok(pair)
    }

    /// Validates a token: signature, algorithm, expiry, then revocation
    ///
    /// Never fails; a rejected token comes back as `ValidationOutcome::Invalid`
    /// with the reason reported to the caller.
    pub async fn validate(&self, token: &str) -> ValidationOutcome {
        let claims = match self.active_claims(token).await {
            Ok(claims) => claims,
            Err(e) => {
                tracing::info!("Token validation failed: {}", e);
                return ValidationOutcome::invalid(e.reason());
            }
        };

        let Some(expires_at) = claims.expires_at() else {
            return ValidationOutcome::invalid(TokenError::InvalidClaims.reason());
        };

        tracing::info!("Token validated successfully for user: {}", claims.subject);
        ValidationOutcome::Valid { claims, expires_at }
    }

    /// RFC 7662 introspection
    ///
    /// Inactive tokens yield exactly `{active: false}`, whatever the reason.
    /// The type hint is accepted but not enforced.
    pub async fn introspect(&self, token: &str, token_type_hint: Option<&str>) -> IntrospectionResponse {
        if let Some(hint) = token_type_hint.filter(|h| !h.is_empty()) {
            tracing::debug!("Token type hint: {}", hint);
        }

        match self.active_claims(token).await {
            Ok(claims) => {
                tracing::info!("Token introspection successful for user: {}", claims.subject);
                IntrospectionResponse::from_claims(&claims)
            }
            Err(e) => {
                tracing::info!("Token introspection failed: {}", e);
                IntrospectionResponse::inactive()
            }
        }
    }

    /// Revokes a token by blacklisting its JTI until its natural expiry
    ///
    /// # Returns
    ///
    /// * `Ok(RevocationOutcome)` - Revoked now, or already revoked before
    /// * `Err(DomainError::RevocationUnavailable)` - No ledger wired in
    /// * `Err(DomainError::Token(_))` - The token does not decode
    pub async fn revoke(&self, token: &str) -> DomainResult<RevocationOutcome> {
        let Some(ledger) = self.ledger.as_ref() else {
            tracing::error!("Token revocation failed: blacklist system not initialized");
            return Err(DomainError::RevocationUnavailable);
        };

        let claims = self.codec.decode(token).map_err(|e| {
            tracing::info!("Token revocation failed: invalid token - {}", e);
            DomainError::Token(e)
        })?;

        let expires_at = claims.expires_at().ok_or(TokenError::InvalidClaims)?;
        if !ledger.insert_if_absent(&claims.jti, expires_at).await {
            tracing::info!(jti = %claims.jti, "Token already revoked");
            return Ok(RevocationOutcome::already_revoked());
        }

        tracing::info!(
            jti = %claims.jti,
            "Token revoked successfully for user: {}",
            claims.subject
        );
        Ok(RevocationOutcome::revoked())
    }

    /// Exchanges a refresh token for a brand-new pair
    ///
    /// The new pair carries the identity, roles and permissions embedded in
    /// the refresh token; nothing is re-read from storage.
    pub async fn refresh_pair(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.codec.decode_refresh(refresh_token)?;

        if self.is_revoked(&claims).await {
            tracing::warn!(jti = %claims.jti, "Revoked refresh token presented");
            return Err(TokenError::Revoked.into());
        }

        let user_id = claims.user_uuid().map_err(|_| {
            tracing::warn!("Invalid user ID in refresh token: {}", claims.user_id);
            TokenError::InvalidClaims
        })?;

        self.issue(user_id, &claims.subject, &claims.roles, &claims.permissions)
    }

    /// Decodes the token and rejects it if blacklisted
    async fn active_claims(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = self.codec.decode(token)?;
        if self.is_revoked(&claims).await {
            tracing::info!(jti = %claims.jti, "Token is blacklisted (revoked) for user: {}", claims.subject);
            return Err(TokenError::Revoked);
        }
        Ok(claims)
    }

    async fn is_revoked(&self, claims: &Claims) -> bool {
        match self.ledger.as_ref() {
            Some(ledger) => ledger.is_revoked(&claims.jti).await,
            None => {
                tracing::warn!("Revocation ledger not initialized, skipping blacklist check");
                false
            }
        }
    }
}
