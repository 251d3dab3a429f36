// src/cipher.rs
//! The two-stage engine: keyword substitution, then Playfair
//!
//! ```
//! use dual_cipher::DualCipher;
//!
//! let cipher = DualCipher::new("MONARCHY");
//! let ciphertext = cipher.encrypt("attack at dawn")?;
//! assert_eq!(cipher.decrypt(&ciphertext)?, "ATTACKATDAWN");
//! # Ok::<(), dual_cipher::CipherError>(())
//! ```

use tracing::debug;

use crate::consts::GRID_SIZE;
use crate::core::{playfair, prepare, Digraphs, Keyword, KeywordAlphabet, PlayfairGrid};
use crate::error::Result;

/// Keyword plus the grid derived from it.
///
/// Plain owned value: give each thread its own instance, or guard
/// `set_keyword` externally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DualCipher {
    keyword: Keyword,
    grid: PlayfairGrid,
}

impl DualCipher {
    pub fn new(keyword: &str) -> Self {
        let keyword = Keyword::new(keyword);
        let grid = PlayfairGrid::from_keyword(&keyword);
        Self { keyword, grid }
    }

    /// Replace the keyword and rebuild the grid from scratch
    pub fn set_keyword(&mut self, raw: &str) {
        self.keyword = Keyword::new(raw);
        self.grid = PlayfairGrid::from_keyword(&self.keyword);
        debug!(keyword = %self.keyword, "grid rebuilt");
    }

    pub fn keyword(&self) -> &Keyword {
        &self.keyword
    }

    pub fn grid(&self) -> &PlayfairGrid {
        &self.grid
    }

    pub fn grid_rows(&self) -> [[char; GRID_SIZE]; GRID_SIZE] {
        self.grid.rows()
    }

    /// Current substitution alphabet, rebuilt on every call
    pub fn alphabet(&self) -> KeywordAlphabet {
        KeywordAlphabet::from_keyword(&self.keyword)
    }

    /// Substitution stage only
    pub fn keyword_encrypt(&self, text: &str) -> String {
        self.alphabet().substitute(text)
    }

    /// Inverse of [`keyword_encrypt`](Self::keyword_encrypt)
    pub fn keyword_decrypt(&self, text: &str) -> String {
        self.alphabet().restore(text)
    }

    /// Substitute, prepare digraphs, Playfair encrypt.
    /// Output is uppercase letters of even length.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let substituted = self.keyword_encrypt(plaintext);
        let prepared = prepare(&substituted);
        debug!(%substituted, %prepared, "prepared for playfair");
        playfair::encrypt(&self.grid, &prepared)
    }

    /// Playfair decrypt, then undo the substitution.
    ///
    /// Fillers inserted during preparation are not removed.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let digraphs = Digraphs::from_ciphertext(ciphertext)?;
        let stage1 = playfair::decrypt(&self.grid, &digraphs)?;
        debug!(%stage1, "playfair stage undone");
        Ok(self.keyword_decrypt(&stage1))
    }
}
