//! Normalized digit strings and the modes that produce and scan them

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// How raw text becomes a digit string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Drop everything that is not 0-9
    #[default]
    #[value(name = "digits")]
    DigitsOnly,
    /// Letters become their two-digit alphabet position (A=01 .. Z=26)
    #[value(name = "alpha")]
    AlphaToOrdinal,
}

/// How the scorer walks a digit string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Every overlapping pair of neighbours
    #[default]
    Adjacent,
    /// '0' and '5' runs are folded into the surrounding pair as modifiers
    Absorbing,
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanMode::Adjacent => write!(f, "adjacent"),
            ScanMode::Absorbing => write!(f, "absorbing"),
        }
    }
}

/// A string made only of ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigitString(String);

impl DigitString {
    /// Validate `s` as a digit string
    pub fn parse(s: &str) -> Result<Self> {
        if s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::InvalidDigits(s.to_string()))
        }
    }

    /// Empty digit string
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Wrap a string already known to hold only digits
    pub(crate) fn from_digits_unchecked(s: String) -> Self {
        debug_assert!(s.bytes().all(|b| b.is_ascii_digit()));
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for DigitString {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<DigitString> for String {
    fn from(d: DigitString) -> String {
        d.0
    }
}

impl std::fmt::Display for DigitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
