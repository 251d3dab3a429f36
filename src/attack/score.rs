// src/attack/score.rs
//! Plaintext scoring — higher means more English-like

use crate::consts::FALLBACK_DIGRAPH_SCORE;
use crate::core::normalize_letters;

/// Relative frequencies (percent) of the most common English digraphs
const ENGLISH_DIGRAPHS: [(&[u8; 2], f64); 24] = [
    (b"TH", 2.71),
    (b"HE", 2.33),
    (b"IN", 2.03),
    (b"ER", 1.78),
    (b"AN", 1.61),
    (b"RE", 1.41),
    (b"ON", 1.32),
    (b"AT", 1.24),
    (b"EN", 1.13),
    (b"ND", 1.07),
    (b"TI", 0.99),
    (b"ES", 0.99),
    (b"OR", 0.98),
    (b"TE", 0.97),
    (b"OF", 0.97),
    (b"ED", 0.94),
    (b"IS", 0.93),
    (b"IT", 0.89),
    (b"AL", 0.88),
    (b"AR", 0.85),
    (b"ST", 0.83),
    (b"TO", 0.76),
    (b"NT", 0.76),
    (b"NG", 0.73),
];

fn digraph_weight(pair: &[u8]) -> f64 {
    ENGLISH_DIGRAPHS
        .iter()
        .find(|(dg, _)| dg.as_slice() == pair)
        .map_or(FALLBACK_DIGRAPH_SCORE, |&(_, w)| w)
}

/// Sum of the weights of every overlapping digraph in `text`
pub fn digraph_score(text: &[u8]) -> f64 {
    text.windows(2).map(digraph_weight).sum()
}

/// Crib: letters expected at a fixed offset of the plaintext
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownPlaintext {
    snippet: Vec<u8>,
    pos: usize,
}

impl KnownPlaintext {
    /// `snippet` is normalized to uppercase letters
    pub fn new(snippet: &str, pos: usize) -> Self {
        Self {
            snippet: normalize_letters(snippet).into_bytes(),
            pos,
        }
    }

    pub fn snippet(&self) -> &[u8] {
        &self.snippet
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Offset one past the crib's last letter
    pub fn end(&self) -> usize {
        self.pos + self.snippet.len()
    }

    /// Fraction of crib letters matched in place, times `weight`
    pub fn bonus(&self, text: &[u8], weight: f64) -> f64 {
        let segment = text.get(self.pos..).unwrap_or_default();
        let matches = segment
            .iter()
            .zip(&self.snippet)
            .filter(|(a, b)| a == b)
            .count();
        matches as f64 / self.snippet.len().max(1) as f64 * weight
    }
}
