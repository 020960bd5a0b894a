//! The eight fixed field categories and their pair tables

use serde::{Deserialize, Serialize};

use crate::{SCORE_CAREER, SCORE_INAUSPICIOUS, SCORE_NOBLE, SCORE_STABLE, SCORE_WEALTH};

// =============================================================================
// PAIR TABLES [C] - every pair is listed together with its reverse
// =============================================================================

const WEALTH_PAIRS: [&str; 8] = ["13", "31", "68", "86", "49", "94", "27", "72"];
const NOBLE_PAIRS: [&str; 8] = ["14", "41", "67", "76", "39", "93", "28", "82"];
const CAREER_PAIRS: [&str; 8] = ["19", "91", "78", "87", "34", "43", "26", "62"];
const STABLE_PAIRS: [&str; 8] = ["11", "22", "33", "44", "66", "77", "88", "99"];
const RISKY_PAIRS: [&str; 8] = ["12", "21", "69", "96", "48", "84", "37", "73"];
const VARIABLE_PAIRS: [&str; 8] = ["18", "81", "79", "97", "36", "63", "24", "42"];
const GOSSIP_PAIRS: [&str; 8] = ["16", "61", "47", "74", "38", "83", "29", "92"];
const HARM_PAIRS: [&str; 8] = ["17", "71", "89", "98", "46", "64", "23", "32"];

/// Field category attached to a digit pair.
///
/// Declaration order is lookup order, and the first three variants are the
/// ones tracked for remedy focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 天醫
    Wealth,
    /// 生氣
    Noble,
    /// 延年
    Career,
    /// 伏位
    Stable,
    /// 絕命
    Risky,
    /// 五鬼
    Variable,
    /// 六煞
    Gossip,
    /// 禍害
    Harm,
}

impl Category {
    /// All categories in lookup order
    pub const ALL: [Category; 8] = [
        Category::Wealth,
        Category::Noble,
        Category::Career,
        Category::Stable,
        Category::Risky,
        Category::Variable,
        Category::Gossip,
        Category::Harm,
    ];

    /// Categories counted by the scorer and considered for remedy focus
    pub const TRACKED: [Category; 3] = [Category::Wealth, Category::Noble, Category::Career];

    /// Find the category containing `pair`, if any
    pub fn lookup(pair: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.pairs().contains(&pair))
    }

    /// The fixed pair set of this category
    pub fn pairs(&self) -> &'static [&'static str] {
        match self {
            Category::Wealth => &WEALTH_PAIRS,
            Category::Noble => &NOBLE_PAIRS,
            Category::Career => &CAREER_PAIRS,
            Category::Stable => &STABLE_PAIRS,
            Category::Risky => &RISKY_PAIRS,
            Category::Variable => &VARIABLE_PAIRS,
            Category::Gossip => &GOSSIP_PAIRS,
            Category::Harm => &HARM_PAIRS,
        }
    }

    /// Score contributed by one matching pair, before modifiers
    pub fn base_score(&self) -> f64 {
        match self {
            Category::Wealth => SCORE_WEALTH,
            Category::Noble => SCORE_NOBLE,
            Category::Career => SCORE_CAREER,
            Category::Stable => SCORE_STABLE,
            Category::Risky | Category::Variable | Category::Gossip | Category::Harm => {
                SCORE_INAUSPICIOUS
            }
        }
    }

    pub fn is_auspicious(&self) -> bool {
        self.base_score() > 0.0
    }

    pub fn is_tracked(&self) -> bool {
        Self::TRACKED.contains(self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Wealth => "Wealth",
            Category::Noble => "Noble",
            Category::Career => "Career",
            Category::Stable => "Stable",
            Category::Risky => "Risky",
            Category::Variable => "Variable",
            Category::Gossip => "Gossip",
            Category::Harm => "Harm",
        }
    }

    /// Traditional star name
    pub fn traditional_name(&self) -> &'static str {
        match self {
            Category::Wealth => "天醫",
            Category::Noble => "生氣",
            Category::Career => "延年",
            Category::Stable => "伏位",
            Category::Risky => "絕命",
            Category::Variable => "五鬼",
            Category::Gossip => "六煞",
            Category::Harm => "禍害",
        }
    }

    /// Get emoji for category
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Wealth => "💰",
            Category::Noble => "🤝",
            Category::Career => "📈",
            Category::Stable => "⚖",
            Category::Risky => "⚠",
            Category::Variable => "🌀",
            Category::Gossip => "💬",
            Category::Harm => "🔻",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.traditional_name(), self.label())
    }
}
