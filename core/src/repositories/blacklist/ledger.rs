//! Revocation ledger trait defining the interface for the token blacklist.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::blacklist::BlacklistEntry;

/// Store of revoked token identifiers, tracked until their natural expiry
///
/// None of these operations can fail: the ledger is process-local and an
/// entry for an already-expired token is simply swept by the next cleanup.
///
/// # Consistency
/// An `add` that has completed is visible to every `is_revoked` that starts
/// after it. No guarantee is made across processes.
#[async_trait]
pub trait RevocationLedger: Send + Sync {
    /// Blacklist a JTI until `expires_at`
    ///
    /// Idempotent: re-adding a JTI replaces its entry, so the ledger size
    /// only grows for new identifiers.
    async fn add(&self, jti: &str, expires_at: DateTime<Utc>);

    /// Blacklist a JTI unless it is already present
    ///
    /// Check and insert happen as one step, so among concurrent callers for
    /// the same JTI exactly one gets `true`. An existing entry is left as is.
    async fn insert_if_absent(&self, jti: &str, expires_at: DateTime<Utc>) -> bool;

    /// Whether the JTI is currently blacklisted; false for unknown JTIs
    async fn is_revoked(&self, jti: &str) -> bool;

    /// Remove every entry whose natural expiry is at or before now
    ///
    /// # Returns
    /// The number of entries removed by this call. Concurrent calls never
    /// count the same entry twice.
    async fn cleanup(&self) -> usize;

    /// Current number of entries
    async fn size(&self) -> usize;

    /// Look up the entry for a JTI
    async fn entry(&self, jti: &str) -> Option<BlacklistEntry>;
}
