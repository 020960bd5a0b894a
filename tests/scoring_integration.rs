//! Integration tests for scoring
//!
//! Tests the full path: raw text → normalizer → pair scorer → analysis

use numfield::core::{Normalizer, PairScorer};
use numfield::types::{Category, DigitString, NormalizationMode, ScanMode};
use numfield::{analyze, BASE_SCORE};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_digits(rng: &mut StdRng, len: usize) -> DigitString {
    let s: String = (0..len).map(|_| char::from(b'0' + rng.gen_range(0..10u8))).collect();
    DigitString::parse(&s).unwrap()
}

/// Inputs shorter than two digits never form a pair
#[test]
fn test_short_inputs_score_base() {
    for raw in ["", "7", "-", "a1", "phone: 5"] {
        let result = analyze(Some(raw), NormalizationMode::DigitsOnly);
        assert!(result.pairs.is_empty(), "{} formed pairs", raw);
        assert_eq!(result.total_score, BASE_SCORE);
    }
}

/// Total stays in [0, 100] for any digits and either scan
#[test]
fn test_total_score_always_clamped() {
    let mut rng = StdRng::seed_from_u64(2024);
    for mode in [ScanMode::Adjacent, ScanMode::Absorbing] {
        let scorer = PairScorer::new(mode);
        for _ in 0..500 {
            let len = rng.gen_range(0..40);
            let score = scorer.quick_score(&random_digits(&mut rng, len));
            assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
        }
    }
}

/// Same input, same result, bit for bit
#[test]
fn test_determinism_full_path() {
    let a = analyze(Some("0912-345-678"), NormalizationMode::DigitsOnly);
    let b = analyze(Some("0912-345-678"), NormalizationMode::DigitsOnly);
    assert_eq!(a, b);
    assert_eq!(a.total_score.to_bits(), b.total_score.to_bits());
}

#[test]
fn test_wealth_pair_example() {
    let result = analyze(Some("13"), NormalizationMode::DigitsOnly);
    assert_eq!(result.pairs.len(), 1);
    assert_eq!(result.pairs[0].category, Some(Category::Wealth));
    assert_eq!(result.pairs[0].score, 20.0);
    assert_eq!(result.total_score, 80.0);
}

#[test]
fn test_stable_pairs_accumulate() {
    let result = analyze(Some("9999"), NormalizationMode::DigitsOnly);
    let labels: Vec<&str> = result.pairs.iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["Stable", "Stable", "Stable"]);
    assert_eq!(result.total_score, 90.0);
}

#[test]
fn test_absorbing_example_forms_no_pair() {
    let digits = DigitString::parse("105").unwrap();
    let result = PairScorer::new(ScanMode::Absorbing).analyze(&digits);
    assert!(result.pairs.is_empty());
    assert_eq!(result.total_score, 60.0);
}

/// A phone number walked pair by pair
#[test]
fn test_phone_number_breakdown() {
    let result = analyze(Some("0912-345-678"), NormalizationMode::DigitsOnly);
    let sections: Vec<&str> = result.pairs.iter().map(|p| p.section.as_str()).collect();
    assert_eq!(sections, vec!["09", "91", "12", "23", "34", "45", "56", "67", "78"]);
    // 60 + 15 - 20 - 20 + 15 + 15 + 15
    assert_eq!(result.total_score, 80.0);
    assert_eq!(result.category_counts.get(Category::Wealth), Some(0));
    assert_eq!(result.category_counts.get(Category::Noble), Some(1));
    assert_eq!(result.category_counts.get(Category::Career), Some(3));
}

/// Letters map to alphabet positions before scoring
#[test]
fn test_alpha_plate() {
    let digits = Normalizer::new(NormalizationMode::AlphaToOrdinal).normalize_str("AC-13");
    assert_eq!(digits.as_str(), "010313");

    let result = analyze(Some("AC-13"), NormalizationMode::AlphaToOrdinal);
    assert_eq!(result.digits, digits);
    assert_eq!(result.pairs.len(), 5);
}

/// Scores on every pair have at most one decimal
#[test]
fn test_pair_scores_rounded() {
    let mut rng = StdRng::seed_from_u64(77);
    let scorer = PairScorer::new(ScanMode::Absorbing);
    for _ in 0..200 {
        let result = scorer.analyze(&random_digits(&mut rng, 16));
        for pair in &result.pairs {
            let scaled = pair.score * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9, "{} not rounded", pair.score);
        }
    }
}

/// Counts cover exactly the tracked categories
#[test]
fn test_counts_always_have_tracked_keys() {
    let result = analyze(Some(""), NormalizationMode::DigitsOnly);
    let keys: Vec<Category> = result.category_counts.iter().map(|(c, _)| c).collect();
    assert_eq!(keys, Category::TRACKED.to_vec());
}

#[test]
fn test_json_output_valid() {
    let result = analyze(Some("0912345678"), NormalizationMode::DigitsOnly);
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"total_score\""));
    assert!(json.contains("\"category_counts\""));
    assert!(json.contains("\"Career\""));

    let back: numfield::types::AnalysisResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_parseable_output_format() {
    let result = analyze(Some("13"), NormalizationMode::DigitsOnly);
    let formatted = result.to_parseable_string();
    assert!(formatted.contains("digits=13"));
    assert!(formatted.contains("score=80.0"));
    assert!(formatted.contains("scan=adjacent"));
}
