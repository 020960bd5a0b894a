//! RemedyGenerator: builds a code biased toward the weakest tracked category
//!
//! 1. target length = clamp(len(original), 6, 12)
//! 2. weakest = min count over Wealth, Noble, Career (first wins on ties)
//! 3. append pairs: p=0.6 from the weakest pool, else from all three pools
//! 4. truncate, re-score, sample the displayed score, compose prose

use chrono::Utc;
use tracing::debug;

use crate::core::pair_scorer::{round1, PairScorer};
use crate::core::random::RandomSource;
use crate::core::templates::compose_explanation;
use crate::error::Result;
use crate::types::{Category, CategoryCounts, DigitString, RemedyResult};
use crate::{
    INFLATED_SCORE_MAX, INFLATED_SCORE_MIN, PRIMARY_POOL_PROBABILITY, REMEDY_MAX_LEN,
    REMEDY_MIN_LEN,
};

/// Remedy code generator
#[derive(Debug, Clone, Copy, Default)]
pub struct RemedyGenerator {
    scorer: PairScorer,
}

impl RemedyGenerator {
    /// Create new generator; the remedy is re-scored with `scorer`
    pub fn new(scorer: PairScorer) -> Self {
        Self { scorer }
    }

    /// Length the remedy code will have for an original of `original_len`
    pub fn target_length(original_len: usize) -> usize {
        original_len.clamp(REMEDY_MIN_LEN, REMEDY_MAX_LEN)
    }

    /// Generate a remedy for `original` given its tracked counts
    pub fn generate<S: RandomSource>(
        &self,
        original: &DigitString,
        counts: &CategoryCounts,
        rng: &mut S,
    ) -> Result<RemedyResult> {
        let focus = counts.weakest()?;
        let target = Self::target_length(original.len());

        let primary = focus.pairs();
        let combined = combined_pool();

        let mut buf = String::with_capacity(target + 1);
        while buf.len() < target {
            let pair = if rng.uniform() < PRIMARY_POOL_PROBABILITY {
                rng.choice(primary)
            } else {
                rng.choice(&combined)
            };
            buf.push_str(pair);
        }
        buf.truncate(target);

        let code = DigitString::from_digits_unchecked(buf);
        let analysis = self.scorer.analyze(&code);
        let inflated_score = sample_inflated_score(rng);
        let explanation = compose_explanation(&code, focus, rng);

        debug!(
            original = original.as_str(),
            code = code.as_str(),
            focus = focus.label(),
            inflated_score,
            "generated remedy"
        );

        Ok(RemedyResult {
            code,
            focus,
            analysis,
            inflated_score,
            explanation,
            timestamp: Utc::now(),
        })
    }
}

/// Wealth ∪ Noble ∪ Career pairs
fn combined_pool() -> Vec<&'static str> {
    Category::TRACKED
        .iter()
        .flat_map(|c| c.pairs().iter().copied())
        .collect()
}

/// Presentation score, independent of the remedy's own analysis
fn sample_inflated_score<S: RandomSource>(rng: &mut S) -> f64 {
    let raw = INFLATED_SCORE_MIN + rng.uniform() * (INFLATED_SCORE_MAX - INFLATED_SCORE_MIN);
    round1(raw).clamp(INFLATED_SCORE_MIN, INFLATED_SCORE_MAX)
}

// =============================================================================
// TESTS
// =============================================================================
