//! One scanned pair and its score

use serde::{Deserialize, Serialize};

use crate::types::Category;

/// Label shown for pairs outside every category
pub const NEUTRAL_LABEL: &str = "Neutral field";

/// Traditional name for pairs outside every category
pub const NEUTRAL_TRADITIONAL_NAME: &str = "平穩磁場";

/// Result of a single scanning step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    /// Substring consumed by this step (two or more digits)
    pub section: String,
    /// Matched category, `None` for a neutral field
    pub category: Option<Category>,
    /// Score after modifiers, rounded to one decimal
    pub score: f64,
    /// A '5' was absorbed into this pair
    #[serde(default)]
    pub amplified: bool,
    /// A '0' was absorbed into this pair
    #[serde(default)]
    pub dampened: bool,
}

impl PairResult {
    pub fn label(&self) -> &'static str {
        self.category.map(|c| c.label()).unwrap_or(NEUTRAL_LABEL)
    }

    pub fn traditional_name(&self) -> &'static str {
        self.category
            .map(|c| c.traditional_name())
            .unwrap_or(NEUTRAL_TRADITIONAL_NAME)
    }

    pub fn is_neutral(&self) -> bool {
        self.category.is_none()
    }

    /// Modifier suffix for display ("", "+5", "+0", "+5+0")
    pub fn modifier_tag(&self) -> String {
        let mut tag = String::new();
        if self.amplified {
            tag.push_str("+5");
        }
        if self.dampened {
            tag.push_str("+0");
        }
        tag
    }
}
