//! Unlock store: payment timestamps keyed by input, with a fixed TTL
//!
//! Keys are SHA-256 digests of the raw input so the store never holds the
//! numbers themselves. An entry that reaches the TTL is evicted on read, and
//! every new payment sweeps all expired entries.

use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::error::{CoreError, Result};
use crate::types::UnlockStatus;

/// In-memory record of which inputs are paid for
#[derive(Debug)]
pub struct UnlockStore {
    ttl: Duration,
    paid_at: HashMap<[u8; 32], DateTime<Utc>>,
}

impl UnlockStore {
    /// Create new store with a TTL in seconds
    pub fn new(ttl_secs: i64) -> Result<Self> {
        let ttl = Duration::try_seconds(ttl_secs).ok_or_else(|| {
            CoreError::InvalidConfig(format!("unlock TTL of {} seconds is out of range", ttl_secs))
        })?;
        Ok(Self {
            ttl,
            paid_at: HashMap::new(),
        })
    }

    /// Record a payment for `raw` at `now`; a repeat payment restarts the window
    pub fn unlock(&mut self, raw: &str, now: DateTime<Utc>) -> UnlockStatus {
        let purged = self.purge_expired(now);
        if purged > 0 {
            debug!(purged, "expired unlocks swept");
        }
        self.paid_at.insert(key_for(raw), now);
        info!(ttl_secs = self.ttl.num_seconds(), "input unlocked");
        UnlockStatus::Unlocked {
            remaining_secs: self.ttl.num_seconds(),
        }
    }

    /// Current status of `raw`; evicts an expired entry
    pub fn status(&mut self, raw: &str, now: DateTime<Utc>) -> UnlockStatus {
        let key = key_for(raw);
        let Some(paid_at) = self.paid_at.get(&key).copied() else {
            return UnlockStatus::Locked;
        };

        let elapsed = now - paid_at;
        if elapsed < self.ttl {
            UnlockStatus::Unlocked {
                remaining_secs: (self.ttl - elapsed).num_seconds(),
            }
        } else {
            self.paid_at.remove(&key);
            debug!(elapsed_secs = elapsed.num_seconds(), "unlock expired");
            UnlockStatus::Locked
        }
    }

    /// Drop every expired entry
    pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.paid_at.len();
        let ttl = self.ttl;
        self.paid_at.retain(|_, paid_at| now - *paid_at < ttl);
        before - self.paid_at.len()
    }

    pub fn len(&self) -> usize {
        self.paid_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paid_at.is_empty()
    }
}

fn key_for(raw: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hasher.finalize().into()
}

// =============================================================================
// TESTS
// =============================================================================
