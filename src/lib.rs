//! numfield: digit-pair field analysis
//!
//! raw text → Normalizer → PairScorer → AnalysisResult → RemedyGenerator

pub mod config;
pub mod core;
pub mod error;
pub mod types;

pub use crate::core::{analyze, generate_remedy, NumerologyEngine};
pub use config::EngineConfig;
pub use error::{CoreError, Result};

// =============================================================================
// SCORING [C]
// =============================================================================

/// Every analysis starts from this score before pair contributions
pub const BASE_SCORE: f64 = 60.0;

/// Lower clamp for the total score
pub const SCORE_MIN: f64 = 0.0;

/// Upper clamp for the total score
pub const SCORE_MAX: f64 = 100.0;

/// Per-category base scores
pub const SCORE_WEALTH: f64 = 20.0;
pub const SCORE_NOBLE: f64 = 15.0;
pub const SCORE_CAREER: f64 = 15.0;
pub const SCORE_STABLE: f64 = 10.0;
pub const SCORE_INAUSPICIOUS: f64 = -20.0;

/// Multiplier when a '5' was absorbed between two digits
pub const AMPLIFY_FACTOR: f64 = 1.2;

/// Multiplier when a '0' was absorbed between two digits
pub const DAMPEN_FACTOR: f64 = 0.5;

// =============================================================================
// REMEDY [C]
// =============================================================================

/// Remedy code length floor (clamp lower bound)
pub const REMEDY_MIN_LEN: usize = 6;

/// Remedy code length ceiling (clamp upper bound)
pub const REMEDY_MAX_LEN: usize = 12;

/// Probability of drawing from the weakest category's pool
pub const PRIMARY_POOL_PROBABILITY: f64 = 0.6;

/// Displayed remedy score range (inclusive)
pub const INFLATED_SCORE_MIN: f64 = 96.5;
pub const INFLATED_SCORE_MAX: f64 = 99.8;

// =============================================================================
// PAYWALL [C]
// =============================================================================

/// Unlock window after a payment redirect (15 minutes)
pub const UNLOCK_TTL_SECS: i64 = 900;

/// Largest unlock window accepted from the command line (one year)
pub const MAX_UNLOCK_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// Where locked reports send the user
pub const PAYMENT_URL: &str = "https://www.paypal.com/ncp/payment/ZAN2GMGB4Y4JE";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
