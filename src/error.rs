//! Error type shared by the core and the HTTP layer

use thiserror::Error;

use crate::types::Category;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Normalization was handed no text at all
    #[error("invalid input: no text to normalize")]
    InvalidInput,

    /// Remedy counts are missing one of the tracked categories
    #[error("invalid state: category counts missing {missing:?}")]
    InvalidState { missing: Vec<Category> },

    /// A caller-supplied digit string contains something other than 0-9
    #[error("invalid digits: {0:?} is not a digit string")]
    InvalidDigits(String),

    /// A configuration value is outside what the engine can represent
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    /// Stable code for API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::InvalidState { .. } => "INVALID_STATE",
            Self::InvalidDigits(_) => "INVALID_DIGITS",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
