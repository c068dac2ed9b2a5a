//! Blacklist cleanup service for periodic maintenance of the revocation ledger
//!
//! Entries are dropped once the token they shadow has expired on its own,
//! which bounds the ledger's memory to the tokens that could still be used.

use std::sync::Arc;
use std::time::Duration;

use aegis_shared::config::BlacklistConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{error, info, warn};

use crate::repositories::RevocationLedger;

/// Configuration for blacklist cleanup service
#[derive(Debug, Clone)]
pub struct BlacklistCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for BlacklistCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600, // Run every hour
            enabled: true,
        }
    }
}

impl From<&BlacklistConfig> for BlacklistCleanupConfig {
    fn from(config: &BlacklistConfig) -> Self {
        Self {
            interval_seconds: config.cleanup_interval_seconds.max(1),
            enabled: config.cleanup_enabled,
        }
    }
}

/// Service for purging naturally expired blacklist entries
pub struct BlacklistCleanupService<L: RevocationLedger + 'static> {
    ledger: Arc<L>,
    config: BlacklistCleanupConfig,
}

impl<L: RevocationLedger + 'static> BlacklistCleanupService<L> {
    /// Create a new blacklist cleanup service
    pub fn new(ledger: Arc<L>, config: BlacklistCleanupConfig) -> Self {
        Self { ledger, config }
    }

    /// Run a single cleanup cycle
    pub async fn run_cleanup(&self) -> CleanupResult {
        info!("Running blacklist cleanup job");

        let removed = self.ledger.cleanup().await;
        let remaining = self.ledger.size().await;

        info!(
            "Blacklist cleanup complete - removed: {}, current size: {} entries",
            removed, remaining
        );

        CleanupResult { removed, remaining }
    }

    /// Start the cleanup service as a background task
    ///
    /// The first sweep runs one interval after start. Returns `None` when the
    /// service is disabled; otherwise the handle must be shut down by the
    /// owner of the process.
    pub fn start_background_task(self: Arc<Self>) -> Option<CleanupTaskHandle> {
        if !self.config.enabled {
            warn!("Blacklist cleanup service is disabled");
            return None;
        }

        let period = Duration::from_secs(self.config.interval_seconds.max(1));
        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

        let join = tokio::spawn(async move {
            info!(
                "Blacklist cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut ticker = interval_at(Instant::now() + period, period);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        self.run_cleanup().await;
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }

            info!("Blacklist cleanup service stopped");
        });

        Some(CleanupTaskHandle { shutdown_tx, join })
    }
}

/// Handle to a running cleanup task
pub struct CleanupTaskHandle {
    shutdown_tx: watch::Sender<bool>,
    join: JoinHandle<()>,
}

impl CleanupTaskHandle {
    /// Signal the task to stop and wait for it to finish
    pub async fn shutdown(self) {
        // The receiver is only gone if the task already exited.
        let _ = self.shutdown_tx.send(true);
        if let Err(e) = self.join.await {
            error!("Blacklist cleanup task terminated abnormally: {}", e);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

/// Result of a cleanup operation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupResult {
    /// Number of expired entries removed
    pub removed: usize,
    /// Entries left after the sweep
    pub remaining: usize,
}
