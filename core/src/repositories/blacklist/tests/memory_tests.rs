//! Tests for the in-memory revocation ledger

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::repositories::blacklist::{MemoryRevocationLedger, RevocationLedger};

#[tokio::test]
async fn test_add_marks_revoked() {
    let ledger = MemoryRevocationLedger::new();

    ledger.add("test-jti-123", Utc::now() + Duration::hours(1)).await;

    assert!(ledger.is_revoked("test-jti-123").await);
    assert_eq!(ledger.size().await, 1);
}

#[tokio::test]
async fn test_unknown_jti_is_not_revoked() {
    let ledger = MemoryRevocationLedger::new();
    assert!(!ledger.is_revoked("non-existent-token").await);
    assert!(ledger.entry("non-existent-token").await.is_none());
}

#[tokio::test]
async fn test_readd_overwrites_expiry() {
    let ledger = MemoryRevocationLedger::new();
    let first = Utc::now() + Duration::hours(1);
    let second = Utc::now() + Duration::hours(2);

    ledger.add("test-jti-456", first).await;
    ledger.add("test-jti-456", second).await;

    assert_eq!(ledger.size().await, 1);
    let entry = ledger.entry("test-jti-456").await.unwrap();
    assert_eq!(entry.expires_at, second);
    assert_eq!(entry.jti, "test-jti-456");
}

#[tokio::test]
async fn test_insert_if_absent_keeps_first_entry() {
    let ledger = MemoryRevocationLedger::new();
    let first = Utc::now() + Duration::hours(1);
    let second = Utc::now() + Duration::hours(2);

    assert!(ledger.insert_if_absent("test-jti-789", first).await);
    assert!(!ledger.insert_if_absent("test-jti-789", second).await);

    assert_eq!(ledger.size().await, 1);
    assert_eq!(ledger.entry("test-jti-789").await.unwrap().expires_at, first);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_insert_if_absent_single_winner() {
    let ledger = Arc::new(MemoryRevocationLedger::new());
    let expires_at = Utc::now() + Duration::hours(1);

    let handles: Vec<_> = (0..64)
        .map(|_| {
            let ledger = Arc::clone(&ledger);
            tokio::spawn(async move { ledger.insert_if_absent("contended", expires_at).await })
        })
        .collect();

    let mut inserted = 0;
    for handle in handles {
        if handle.await.unwrap() {
            inserted += 1;
        }
    }

    assert_eq!(inserted, 1);
    assert_eq!(ledger.size().await, 1);
}

#[tokio::test]
async fn test_size_counts_distinct_jtis() {
    let ledger = MemoryRevocationLedger::new();
    assert_eq!(ledger.size().await, 0);

    for jti in ["token-1", "token-2", "token-3"] {
        ledger.add(jti, Utc::now() + Duration::hours(1)).await;
    }
    assert_eq!(ledger.size().await, 3);

    ledger.add("token-1", Utc::now() + Duration::hours(2)).await;
    assert_eq!(ledger.size().await, 3);
}

#[tokio::test]
async fn test_cleanup_partial_expiration() {
    let ledger = MemoryRevocationLedger::new();
    let now = Utc::now();

    ledger.add("token-expired-1", now - Duration::hours(2)).await;
    ledger.add("token-expired-2", now - Duration::hours(1)).await;
    ledger.add("token-valid-1", now + Duration::hours(1)).await;
    ledger.add("token-valid-2", now + Duration::hours(2)).await;
    ledger.add("token-valid-3", now + Duration::hours(3)).await;
    assert_eq!(ledger.size().await, 5);

    let removed = ledger.cleanup().await;

    assert_eq!(removed, 2);
    assert_eq!(ledger.size().await, 3);
    assert!(!ledger.is_revoked("token-expired-1").await);
    assert!(!ledger.is_revoked("token-expired-2").await);
    assert!(ledger.is_revoked("token-valid-1").await);
    assert!(ledger.is_revoked("token-valid-2").await);
    assert!(ledger.is_revoked("token-valid-3").await);
}

#[tokio::test]
async fn test_cleanup_empty_ledger() {
    let ledger = MemoryRevocationLedger::new();
    assert_eq!(ledger.cleanup().await, 0);
    assert_eq!(ledger.size().await, 0);
}

#[tokio::test]
async fn test_cleanup_removes_entry_expiring_exactly_now() {
    let ledger = MemoryRevocationLedger::new();
    let now = Utc::now();

    ledger.add("boundary-token", now).await;
    ledger.add("later-token", now + Duration::seconds(1)).await;

    assert_eq!(ledger.cleanup_at(now).await, 1);
    assert!(!ledger.is_revoked("boundary-token").await);
    assert!(ledger.is_revoked("later-token").await);
}

#[tokio::test]
async fn test_repeated_cleanup_does_not_double_count() {
    let ledger = MemoryRevocationLedger::new();
    ledger.add("expired", Utc::now() - Duration::minutes(5)).await;

    assert_eq!(ledger.cleanup().await, 1);
    assert_eq!(ledger.cleanup().await, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_operations() {
    let ledger = Arc::new(MemoryRevocationLedger::new());
    let writers = 50;
    let ops = 40;

    let mut handles = Vec::new();

    for w in 0..writers {
        let ledger = Arc::clone(&ledger);
        handles.push(tokio::spawn(async move {
            for i in 0..ops {
                ledger
                    .add(&format!("live-{}-{}", w, i), Utc::now() + Duration::hours(1))
                    .await;
                ledger
                    .add(&format!("dead-{}-{}", w, i), Utc::now() - Duration::hours(1))
                    .await;
            }
        }));
    }

    for w in 0..writers {
        let ledger = Arc::clone(&ledger);
        handles.push(tokio::spawn(async move {
            for i in 0..ops {
                ledger.is_revoked(&format!("live-{}-{}", w, i)).await;
                ledger.size().await;
            }
        }));
    }

    let removed_by_sweepers = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    for _ in 0..10 {
        let ledger = Arc::clone(&ledger);
        let removed = Arc::clone(&removed_by_sweepers);
        handles.push(tokio::spawn(async move {
            for _ in 0..ops {
                let n = ledger.cleanup().await;
                removed.fetch_add(n, std::sync::atomic::Ordering::SeqCst);
                tokio::task::yield_now().await;
            }
        }));
    }

    for handle in handles {
        handle.await.unwrap();
    }

    let removed_after = ledger.cleanup().await;
    let total_removed =
        removed_by_sweepers.load(std::sync::atomic::Ordering::SeqCst) + removed_after;

    // Every expired entry is swept exactly once, every live entry survives.
    assert_eq!(total_removed, writers * ops);
    assert_eq!(ledger.size().await, writers * ops);
    for w in 0..writers {
        for i in 0..ops {
            assert!(ledger.is_revoked(&format!("live-{}-{}", w, i)).await);
        }
    }
}
