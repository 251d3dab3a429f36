// src/core/keyword.rs
//! Keyword normalization
//!
//! Both the substitution alphabet and the Playfair grid are derived from
//! the same keyword. It is stored once, already cleaned.

use std::fmt;

use super::text::normalize_letters;

/// Uppercase, letters-only keyword
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    /// Normalize `raw`: non-letters are dropped, the rest uppercased.
    /// An empty result is a valid keyword (identity alphabet, plain grid).
    pub fn new(raw: &str) -> Self {
        Self(normalize_letters(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Keyword {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
