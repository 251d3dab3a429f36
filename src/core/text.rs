// src/core/text.rs
//! Text normalization and Playfair preparation
//!
//! Pure functions, no state. Everything downstream works on ASCII
//! uppercase letters only.

use std::fmt;

use crate::consts::{FILLER, MERGED_INTO, MERGED_LETTER};
use crate::error::{CipherError, Result};

/// Strip every non-alphabetic character and uppercase the rest, preserving order
pub fn normalize_letters(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Clean `text` and split it into Playfair digraphs.
///
/// Pairing is greedy, left to right. When the next letter repeats the
/// current one, [`FILLER`] closes the pair and the repeated letter opens
/// the following pair. The filler is never re-checked against what
/// follows, so `"XXX"` prepares to `"XXXXXX"`. An odd tail is padded with
/// one more filler.
pub fn prepare(text: &str) -> Digraphs {
    let cleaned: Vec<u8> = normalize_letters(text)
        .bytes()
        .map(|b| if b == MERGED_LETTER { MERGED_INTO } else { b })
        .collect();

    let mut pairs = Vec::with_capacity(cleaned.len() / 2 + 2);
    let mut i = 0;
    while i < cleaned.len() {
        let first = cleaned[i];
        match cleaned.get(i + 1) {
            Some(&next) if next == first => {
                pairs.push([first, FILLER]);
                i += 1;
            }
            Some(&next) => {
                pairs.push([first, next]);
                i += 2;
            }
            None => {
                pairs.push([first, FILLER]);
                i += 1;
            }
        }
    }

    Digraphs(pairs)
}

/// Even-length letter sequence, held as pairs so odd lengths cannot exist
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digraphs(Vec<[u8; 2]>);

impl Digraphs {
    /// Wrap already-paired letters
    pub fn from_pairs(pairs: Vec<[u8; 2]>) -> Self {
        Self(pairs)
    }

    /// Normalize ciphertext and pair it up without inserting fillers.
    ///
    /// Fails with [`CipherError::OddLength`] when the letters do not pair up.
    pub fn from_ciphertext(text: &str) -> Result<Self> {
        let letters = normalize_letters(text);
        if letters.len() % 2 != 0 {
            return Err(CipherError::OddLength(letters.len()));
        }
        Ok(Self(
            letters
                .as_bytes()
                .chunks_exact(2)
                .map(|pair| [pair[0], pair[1]])
                .collect(),
        ))
    }

    pub fn pairs(&self) -> &[[u8; 2]] {
        &self.0
    }

    /// Number of letters (always even)
    pub fn len(&self) -> usize {
        self.0.len() * 2
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Digraphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for [a, b] in &self.0 {
            write!(f, "{}{}", char::from(*a), char::from(*b))?;
        }
        Ok(())
    }
}
