// src/core/grid.rs
//! 5×5 Playfair grid
//!
//! Holds the 25 letters A–Z minus J, row-major, plus a reverse lookup
//! table so finding a letter's coordinate is a single index.

use std::fmt;

use super::keyword::Keyword;
use crate::consts::{ALPHABET, GRID_LETTERS, GRID_SIZE, MERGED_INTO, MERGED_LETTER};
use crate::error::{CipherError, Result};

/// Row/column position inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairGrid {
    cells: [[u8; GRID_SIZE]; GRID_SIZE],
    positions: [Option<Coord>; 26],
}

impl PlayfairGrid {
    /// Keyword letters first (J read as I, first occurrence wins), then the
    /// remaining letters A→Z without J.
    pub fn from_keyword(keyword: &Keyword) -> Self {
        let mut key = [0u8; GRID_LETTERS];
        let mut placed = [false; 26];
        placed[usize::from(MERGED_LETTER - b'A')] = true;
        let mut len = 0;

        for &letter in keyword.as_bytes().iter().chain(ALPHABET.iter()) {
            let letter = merge(letter);
            let idx = usize::from(letter - b'A');
            if !placed[idx] {
                placed[idx] = true;
                key[len] = letter;
                len += 1;
            }
        }

        Self::fill(&key)
    }

    /// Lay out an explicit row-major key of 25 distinct letters, none of them J
    pub fn from_key(key: &[u8; GRID_LETTERS]) -> Result<Self> {
        let mut seen = [false; 26];
        for &letter in key {
            if !letter.is_ascii_uppercase()
                || letter == MERGED_LETTER
                || seen[usize::from(letter - b'A')]
            {
                return Err(CipherError::InvalidGridKey(
                    key.iter().copied().map(char::from).collect(),
                ));
            }
            seen[usize::from(letter - b'A')] = true;
        }
        Ok(Self::fill(key))
    }

    fn fill(key: &[u8; GRID_LETTERS]) -> Self {
        let mut cells = [[0u8; GRID_SIZE]; GRID_SIZE];
        let mut positions = [None; 26];
        for (i, &letter) in key.iter().enumerate() {
            let coord = Coord {
                row: i / GRID_SIZE,
                col: i % GRID_SIZE,
            };
            cells[coord.row][coord.col] = letter;
            positions[usize::from(letter - b'A')] = Some(coord);
        }
        Self { cells, positions }
    }

    /// Coordinate of `letter` (J looked up as I), or `None` if absent
    pub fn locate(&self, letter: u8) -> Option<Coord> {
        let letter = merge(letter.to_ascii_uppercase());
        if !letter.is_ascii_uppercase() {
            return None;
        }
        self.positions[usize::from(letter - b'A')]
    }

    /// Like [`locate`](Self::locate), but a miss is an error
    pub fn position(&self, letter: u8) -> Result<Coord> {
        self.locate(letter)
            .ok_or(CipherError::LetterNotInGrid(char::from(letter)))
    }

    pub fn at(&self, coord: Coord) -> u8 {
        self.cells[coord.row][coord.col]
    }

    /// Read-only copy of the grid as characters
    pub fn rows(&self) -> [[char; GRID_SIZE]; GRID_SIZE] {
        self.cells.map(|row| row.map(char::from))
    }

    /// The 25 letters in row-major order
    pub fn key(&self) -> [u8; GRID_LETTERS] {
        let mut key = [0u8; GRID_LETTERS];
        for (i, &letter) in self.cells.iter().flatten().enumerate() {
            key[i] = letter;
        }
        key
    }
}

impl Default for PlayfairGrid {
    fn default() -> Self {
        Self::from_keyword(&Keyword::default())
    }
}

impl fmt::Display for PlayfairGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|&b| char::from(b).to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[inline]
fn merge(letter: u8) -> u8 {
    if letter == MERGED_LETTER {
        MERGED_INTO
    } else {
        letter
    }
}
