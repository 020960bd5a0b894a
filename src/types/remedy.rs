//! Remedy and report output structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AnalysisResult, Category, DigitString};

/// A generated remedy code with its own breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemedyResult {
    /// Synthetic code, length clamped to the remedy bounds
    pub code: DigitString,
    /// Weakest tracked category the code was biased toward
    pub focus: Category,
    /// The code re-scanned by the same scorer
    pub analysis: AnalysisResult,
    /// Presentation score, sampled independently of `analysis`
    pub inflated_score: f64,
    /// Templated prose, paragraphs separated by a blank line
    pub explanation: String,
    /// When this was generated
    pub timestamp: DateTime<Utc>,
}

/// Paywall state for a given input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnlockStatus {
    /// No payment on record, or it expired
    Locked,
    /// Paid within the window
    Unlocked { remaining_secs: i64 },
}

impl UnlockStatus {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, UnlockStatus::Unlocked { .. })
    }
}

/// What the caller shows for one input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Raw text as entered
    pub input: String,
    pub analysis: AnalysisResult,
    pub unlock: UnlockStatus,
    /// Present only when unlocked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remedy: Option<RemedyResult>,
    /// Present only when locked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_url: Option<String>,
    pub timestamp: DateTime<Utc>,
}
