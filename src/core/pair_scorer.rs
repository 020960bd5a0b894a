//! PairScorer: scores a digit string pair by pair against the category table
//!
//! Adjacent scan:  every overlapping window `digits[i..i+2]`
//! Absorbing scan: '0'/'5' runs between two digits become modifiers
//!   - a '5' in the run multiplies the base score by 1.2
//!   - a '0' in the run multiplies the base score by 0.5
//!
//! Total = 60 + Σ pair scores, rounded to one decimal, clamped to [0, 100].

use tracing::debug;

use crate::types::{AnalysisResult, Category, CategoryCounts, DigitString, PairResult, ScanMode};
use crate::{AMPLIFY_FACTOR, BASE_SCORE, DAMPEN_FACTOR, SCORE_MAX, SCORE_MIN};

/// Pair scorer bound to one scan discipline
#[derive(Debug, Clone, Copy, Default)]
pub struct PairScorer {
    mode: ScanMode,
}

impl PairScorer {
    /// Create new scorer
    pub fn new(mode: ScanMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Scan `digits` and return the full breakdown
    pub fn analyze(&self, digits: &DigitString) -> AnalysisResult {
        let pairs = match self.mode {
            ScanMode::Adjacent => scan_adjacent(digits.as_bytes()),
            ScanMode::Absorbing => scan_absorbing(digits.as_bytes()),
        };

        let mut counts = CategoryCounts::tracked();
        let mut total = BASE_SCORE;
        for (pair, raw_score) in &pairs {
            total += raw_score;
            if let Some(category) = pair.category.filter(|c| c.is_tracked()) {
                counts.increment(category);
            }
        }
        let total_score = round1(total).clamp(SCORE_MIN, SCORE_MAX);

        debug!(
            digits = digits.as_str(),
            mode = %self.mode,
            pairs = pairs.len(),
            total_score,
            "analyzed digit string"
        );

        AnalysisResult {
            digits: digits.clone(),
            scan_mode: self.mode,
            pairs: pairs.into_iter().map(|(pair, _)| pair).collect(),
            total_score,
            category_counts: counts,
        }
    }

    /// Quick analyze - just return the total score
    pub fn quick_score(&self, digits: &DigitString) -> f64 {
        self.analyze(digits).total_score
    }
}

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn is_absorbable(b: u8) -> bool {
    b == b'0' || b == b'5'
}

/// Build a pair result; returns it with the unrounded score for accumulation
fn score_pair(section: &[u8], key: [u8; 2], amplified: bool, dampened: bool) -> (PairResult, f64) {
    // Digits only, so both slices are valid UTF-8
    let key = std::str::from_utf8(&key).unwrap_or_default();
    let category = Category::lookup(key);

    let mut score = category.map(|c| c.base_score()).unwrap_or(0.0);
    if amplified {
        score *= AMPLIFY_FACTOR;
    }
    if dampened {
        score *= DAMPEN_FACTOR;
    }

    let pair = PairResult {
        section: String::from_utf8_lossy(section).into_owned(),
        category,
        score: round1(score),
        amplified,
        dampened,
    };
    (pair, score)
}

fn scan_adjacent(digits: &[u8]) -> Vec<(PairResult, f64)> {
    digits
        .windows(2)
        .map(|w| score_pair(w, [w[0], w[1]], false, false))
        .collect()
}

fn scan_absorbing(digits: &[u8]) -> Vec<(PairResult, f64)> {
    let mut out = Vec::new();

    for i in 0..digits.len() {
        if is_absorbable(digits[i]) {
            continue;
        }

        let mut j = i + 1;
        let mut saw_five = false;
        let mut saw_zero = false;
        while j < digits.len() && is_absorbable(digits[j]) {
            saw_five |= digits[j] == b'5';
            saw_zero |= digits[j] == b'0';
            j += 1;
        }

        if j < digits.len() {
            out.push(score_pair(&digits[i..=j], [digits[i], digits[j]], saw_five, saw_zero));
        }
    }

    out
}

// =============================================================================
// TESTS
// =============================================================================
