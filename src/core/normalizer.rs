//! Normalizer: raw user text → DigitString
//!
//! DigitsOnly keeps every `\d` run in order. AlphaToOrdinal additionally
//! turns each ASCII letter into its two-digit alphabet position.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{CoreError, Result};
use crate::types::{DigitString, NormalizationMode};

lazy_static! {
    static ref RE_DIGIT_RUNS: Regex = Regex::new(r"[0-9]+").unwrap();
    static ref RE_ALNUM_TOKENS: Regex = Regex::new(r"[0-9]+|[A-Za-z]").unwrap();
}

/// Turns raw text into digits according to one mode
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    mode: NormalizationMode,
}

impl Normalizer {
    pub fn new(mode: NormalizationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> NormalizationMode {
        self.mode
    }

    /// Normalize `raw`; `None` is an `InvalidInput`
    pub fn normalize(&self, raw: Option<&str>) -> Result<DigitString> {
        let raw = raw.ok_or(CoreError::InvalidInput)?;
        Ok(self.normalize_str(raw))
    }

    /// Normalize text that is known to exist
    pub fn normalize_str(&self, raw: &str) -> DigitString {
        let digits = match self.mode {
            NormalizationMode::DigitsOnly => RE_DIGIT_RUNS
                .find_iter(raw)
                .map(|m| m.as_str())
                .collect::<String>(),
            NormalizationMode::AlphaToOrdinal => {
                let mut out = String::with_capacity(raw.len() * 2);
                for token in RE_ALNUM_TOKENS.find_iter(raw) {
                    let s = token.as_str();
                    match s.as_bytes()[0] {
                        b if b.is_ascii_alphabetic() => {
                            let ordinal = b.to_ascii_uppercase() - b'A' + 1;
                            out.push_str(&format!("{:02}", ordinal));
                        }
                        _ => out.push_str(s),
                    }
                }
                out
            }
        };
        DigitString::from_digits_unchecked(digits)
    }
}

// =============================================================================
// TESTS
// =============================================================================
