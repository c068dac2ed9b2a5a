//! In-memory revocation ledger

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::blacklist::BlacklistEntry;

use super::ledger::RevocationLedger;

/// Blacklist held in a map behind a reader/writer lock
///
/// Reads take the shared lock, inserts and `cleanup` the exclusive one. Cleanup
/// holds the write lock for exactly one scan of the map.
#[derive(Debug, Default)]
pub struct MemoryRevocationLedger {
    entries: RwLock<HashMap<String, BlacklistEntry>>,
}

impl MemoryRevocationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entry expired at or before `now`
    pub async fn cleanup_at(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }
}

#[async_trait]
impl RevocationLedger for MemoryRevocationLedger {
    async fn add(&self, jti: &str, expires_at: DateTime<Utc>) {
        let entry = BlacklistEntry::new(jti, expires_at);
        self.entries.write().await.insert(jti.to_string(), entry);
    }

    async fn insert_if_absent(&self, jti: &str, expires_at: DateTime<Utc>) -> bool {
        match self.entries.write().await.entry(jti.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(BlacklistEntry::new(jti, expires_at));
                true
            }
        }
    }

    async fn is_revoked(&self, jti: &str) -> bool {
        self.entries.read().await.contains_key(jti)
    }

    async fn cleanup(&self) -> usize {
        self.cleanup_at(Utc::now()).await
    }

    async fn size(&self) -> usize {
        self.entries.read().await.len()
    }

    async fn entry(&self, jti: &str) -> Option<BlacklistEntry> {
        self.entries.read().await.get(jti).cloned()
    }
}
