// src/enums.rs
//! Public enum types used throughout the crate

/// Which way a Playfair transform runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Step applied along a shared row or column, modulo the grid size
    pub fn shift(self) -> usize {
        match self {
            Direction::Encrypt => 1,
            Direction::Decrypt => crate::consts::GRID_SIZE - 1,
        }
    }
}
