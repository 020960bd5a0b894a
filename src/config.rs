//! Runtime configuration for the engine and the HTTP layer

use serde::{Deserialize, Serialize};

use crate::types::{NormalizationMode, ScanMode};
use crate::{PAYMENT_URL, UNLOCK_TTL_SECS};

/// Choices the caller makes once per process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Pair scanning discipline, applied to every analysis
    pub scan_mode: ScanMode,
    /// Normalization used when a request does not name one
    pub normalization: NormalizationMode,
    /// How long a payment keeps a report unlocked
    pub unlock_ttl_secs: i64,
    /// Link shown on locked reports
    pub payment_url: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scan_mode: ScanMode::Adjacent,
            normalization: NormalizationMode::DigitsOnly,
            unlock_ttl_secs: UNLOCK_TTL_SECS,
            payment_url: PAYMENT_URL.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn with_scan_mode(mut self, scan_mode: ScanMode) -> Self {
        self.scan_mode = scan_mode;
        self
    }

    pub fn with_normalization(mut self, normalization: NormalizationMode) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_unlock_ttl_secs(mut self, secs: i64) -> Self {
        self.unlock_ttl_secs = secs;
        self
    }
}
