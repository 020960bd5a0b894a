//! Analysis output: pair breakdown, total, tracked counts

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoreError, Result};
use crate::types::{Category, DigitString, PairResult, ScanMode};

/// Occurrence counts for the tracked categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryCounts(BTreeMap<Category, u32>);

impl CategoryCounts {
    /// All tracked categories present with a zero count
    pub fn tracked() -> Self {
        Self(Category::TRACKED.iter().map(|c| (*c, 0)).collect())
    }

    pub fn get(&self, category: Category) -> Option<u32> {
        self.0.get(&category).copied()
    }

    pub fn set(&mut self, category: Category, count: u32) {
        self.0.insert(category, count);
    }

    pub fn increment(&mut self, category: Category) {
        *self.0.entry(category).or_insert(0) += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(c, n)| (*c, *n))
    }

    /// Tracked categories absent from this map
    pub fn missing_tracked(&self) -> Vec<Category> {
        Category::TRACKED
            .iter()
            .filter(|c| !self.0.contains_key(c))
            .copied()
            .collect()
    }

    /// Tracked category with the lowest count; ties go to the earlier one
    /// in Wealth, Noble, Career order.
    pub fn weakest(&self) -> Result<Category> {
        let missing = self.missing_tracked();
        if !missing.is_empty() {
            return Err(CoreError::InvalidState { missing });
        }

        let mut weakest = Category::TRACKED[0];
        let mut lowest = self.0[&weakest];
        for category in &Category::TRACKED[1..] {
            let count = self.0[category];
            if count < lowest {
                weakest = *category;
                lowest = count;
            }
        }
        Ok(weakest)
    }
}

impl FromIterator<(Category, u32)> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = (Category, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Full analysis of one digit string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The normalized input that was scanned
    pub digits: DigitString,
    /// Scan discipline that produced `pairs`
    pub scan_mode: ScanMode,
    /// One entry per scanning step, in input order
    pub pairs: Vec<PairResult>,
    /// Base 60 plus contributions, clamped to 0-100
    pub total_score: f64,
    /// Wealth / Noble / Career occurrences
    pub category_counts: CategoryCounts,
}

impl AnalysisResult {
    pub fn auspicious_count(&self) -> usize {
        self.pairs
            .iter()
            .filter(|p| p.category.is_some_and(|c| c.is_auspicious()))
            .count()
    }

    pub fn inauspicious_count(&self) -> usize {
        self.pairs
            .iter()
            .filter(|p| p.category.is_some_and(|c| !c.is_auspicious()))
            .count()
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "digits={} | scan={} | pairs={} | score={:.1} | good={} | bad={}",
            self.digits,
            self.scan_mode,
            self.pairs.len(),
            self.total_score,
            self.auspicious_count(),
            self.inauspicious_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(w: u32, n: u32, c: u32) -> CategoryCounts {
        [(Category::Wealth, w), (Category::Noble, n), (Category::Career, c)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_weakest_picks_minimum() {
        assert_eq!(counts(0, 2, 1).weakest().unwrap(), Category::Wealth);
        assert_eq!(counts(3, 2, 1).weakest().unwrap(), Category::Career);
        assert_eq!(counts(3, 0, 1).weakest().unwrap(), Category::Noble);
    }

    #[test]
    fn test_weakest_tie_goes_to_first() {
        assert_eq!(counts(1, 1, 1).weakest().unwrap(), Category::Wealth);
        assert_eq!(counts(2, 1, 1).weakest().unwrap(), Category::Noble);
    }

    #[test]
    fn test_weakest_missing_key_is_invalid_state() {
        let partial: CategoryCounts = [(Category::Wealth, 1)].into_iter().collect();
        assert_eq!(
            partial.weakest().unwrap_err(),
            CoreError::InvalidState { missing: vec![Category::Noble, Category::Career] }
        );
        assert!(matches!(
            CategoryCounts::default().weakest(),
            Err(CoreError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_counts_json_shape() {
        let json = serde_json::to_string(&counts(0, 2, 1)).unwrap();
        assert_eq!(json, r#"{"Wealth":0,"Noble":2,"Career":1}"#);
        let back: CategoryCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts(0, 2, 1));
    }
}
