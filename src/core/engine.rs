//! NumerologyEngine: the two public operations plus report assembly

use chrono::Utc;
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::core::normalizer::Normalizer;
use crate::core::pair_scorer::PairScorer;
use crate::core::random::{RandomSource, RngSource};
use crate::core::remedy::RemedyGenerator;
use crate::error::Result;
use crate::types::{
    AnalysisResult, CategoryCounts, DigitString, NormalizationMode, RemedyResult, Report,
    UnlockStatus,
};

/// Scorer and remedy generator sharing one configuration
#[derive(Debug, Clone)]
pub struct NumerologyEngine {
    config: EngineConfig,
    scorer: PairScorer,
    remedy: RemedyGenerator,
}

impl Default for NumerologyEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl NumerologyEngine {
    pub fn new(config: EngineConfig) -> Self {
        let scorer = PairScorer::new(config.scan_mode);
        Self {
            config,
            scorer,
            remedy: RemedyGenerator::new(scorer),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Normalize and score raw text. Missing text is analyzed as empty.
    pub fn analyze(&self, raw: Option<&str>, mode: NormalizationMode) -> AnalysisResult {
        let digits = Normalizer::new(mode).normalize(raw).unwrap_or_else(|e| {
            warn!(error = %e, "analyzing empty input instead");
            DigitString::empty()
        });
        self.scorer.analyze(&digits)
    }

    /// Build a remedy for an already-normalized digit string
    pub fn generate_remedy<S: RandomSource>(
        &self,
        original_digits: &str,
        counts: &CategoryCounts,
        rng: &mut S,
    ) -> Result<RemedyResult> {
        let original = DigitString::parse(original_digits)?;
        self.remedy.generate(&original, counts, rng)
    }

    /// Analysis for `raw`, with the remedy attached only when unlocked
    pub fn report<S: RandomSource>(
        &self,
        raw: &str,
        mode: NormalizationMode,
        unlock: UnlockStatus,
        rng: &mut S,
    ) -> Result<Report> {
        let analysis = self.analyze(Some(raw), mode);

        let (remedy, payment_url) = if unlock.is_unlocked() {
            let remedy = self
                .remedy
                .generate(&analysis.digits, &analysis.category_counts, rng)?;
            (Some(remedy), None)
        } else {
            (None, Some(self.config.payment_url.clone()))
        };

        info!(
            score = analysis.total_score,
            unlocked = unlock.is_unlocked(),
            "report assembled"
        );

        Ok(Report {
            input: raw.to_string(),
            analysis,
            unlock,
            remedy,
            payment_url,
            timestamp: Utc::now(),
        })
    }
}

/// Analyze raw text with the default configuration
pub fn analyze(raw_text: Option<&str>, mode: NormalizationMode) -> AnalysisResult {
    NumerologyEngine::default().analyze(raw_text, mode)
}

/// Generate a remedy with the default configuration and a fresh random source
pub fn generate_remedy(original_digits: &str, counts: &CategoryCounts) -> Result<RemedyResult> {
    NumerologyEngine::default().generate_remedy(original_digits, counts, &mut RngSource::from_entropy())
}

// =============================================================================
// TESTS
// =============================================================================
