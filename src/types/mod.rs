//! Core types for numfield

mod analysis;
mod category;
mod digits;
mod pair;
mod remedy;

pub use analysis::{AnalysisResult, CategoryCounts};
pub use category::Category;
pub use digits::{DigitString, NormalizationMode, ScanMode};
pub use pair::{PairResult, NEUTRAL_LABEL, NEUTRAL_TRADITIONAL_NAME};
pub use remedy::{RemedyResult, Report, UnlockStatus};
