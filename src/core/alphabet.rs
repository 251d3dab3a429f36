// src/core/alphabet.rs
//! Keyword substitution alphabet
//!
//! Slot `i` of the table holds the cipher letter for `ALPHABET[i]`.
//! Built fresh for every substitution call; nothing is cached.

use std::fmt;

use super::keyword::Keyword;
use super::text::normalize_letters;
use crate::consts::ALPHABET;
use crate::error::{CipherError, Result};

/// A permutation of A–Z with its inverse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordAlphabet {
    forward: [u8; 26],
    inverse: [u8; 26],
}

impl KeywordAlphabet {
    /// Keyword letters first (first occurrence wins), then the rest of A–Z in order.
    /// An empty keyword yields the identity alphabet.
    pub fn from_keyword(keyword: &Keyword) -> Self {
        let mut forward = [0u8; 26];
        let mut placed = [false; 26];
        let mut len = 0;

        for &letter in keyword.as_bytes().iter().chain(ALPHABET.iter()) {
            let idx = usize::from(letter - b'A');
            if !placed[idx] {
                placed[idx] = true;
                forward[len] = letter;
                len += 1;
            }
        }

        Self::with_inverse(forward)
    }

    /// Use an arbitrary table, which must be a permutation of A–Z
    pub fn from_letters(letters: &[u8; 26]) -> Result<Self> {
        let mut seen = [false; 26];
        for &letter in letters {
            if !letter.is_ascii_uppercase() || seen[usize::from(letter - b'A')] {
                return Err(CipherError::InvalidAlphabet(
                    letters.iter().copied().map(char::from).collect(),
                ));
            }
            seen[usize::from(letter - b'A')] = true;
        }
        Ok(Self::with_inverse(*letters))
    }

    fn with_inverse(forward: [u8; 26]) -> Self {
        let mut inverse = [0u8; 26];
        for (slot, &letter) in forward.iter().enumerate() {
            inverse[usize::from(letter - b'A')] = ALPHABET[slot];
        }
        Self { forward, inverse }
    }

    pub fn letters(&self) -> &[u8; 26] {
        &self.forward
    }

    /// Map one plaintext letter; anything outside A–Z passes through
    pub fn encrypt_letter(&self, letter: u8) -> u8 {
        if letter.is_ascii_uppercase() {
            self.forward[usize::from(letter - b'A')]
        } else {
            letter
        }
    }

    /// Map one cipher letter back; anything outside A–Z passes through
    pub fn decrypt_letter(&self, letter: u8) -> u8 {
        if letter.is_ascii_uppercase() {
            self.inverse[usize::from(letter - b'A')]
        } else {
            letter
        }
    }

    /// Substitution encrypt of normalized `text`
    pub fn substitute(&self, text: &str) -> String {
        normalize_letters(text)
            .bytes()
            .map(|b| char::from(self.encrypt_letter(b)))
            .collect()
    }

    /// Substitution decrypt of normalized `text`
    pub fn restore(&self, text: &str) -> String {
        normalize_letters(text)
            .bytes()
            .map(|b| char::from(self.decrypt_letter(b)))
            .collect()
    }
}

impl Default for KeywordAlphabet {
    fn default() -> Self {
        Self::with_inverse(*ALPHABET)
    }
}

impl fmt::Display for KeywordAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.forward {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
