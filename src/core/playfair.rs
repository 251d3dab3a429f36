// src/core/playfair.rs
//! Playfair digraph transforms
//!
//! Same row: shift along the row. Same column: shift along the column.
//! Otherwise each letter keeps its row and takes its partner's column,
//! which is its own inverse.

use super::grid::{Coord, PlayfairGrid};
use super::text::Digraphs;
use crate::consts::GRID_SIZE;
use crate::enums::Direction;
use crate::error::Result;

pub fn encrypt(grid: &PlayfairGrid, digraphs: &Digraphs) -> Result<String> {
    transform(grid, digraphs, Direction::Encrypt)
}

pub fn decrypt(grid: &PlayfairGrid, digraphs: &Digraphs) -> Result<String> {
    transform(grid, digraphs, Direction::Decrypt)
}

/// Apply the Playfair rules pair by pair; a letter missing from the grid fails fast
pub fn transform(grid: &PlayfairGrid, digraphs: &Digraphs, direction: Direction) -> Result<String> {
    let shift = direction.shift();
    let mut out = String::with_capacity(digraphs.len());

    for &[a, b] in digraphs.pairs() {
        let p1 = grid.position(a)?;
        let p2 = grid.position(b)?;

        let (q1, q2) = if p1.row == p2.row {
            (
                Coord { row: p1.row, col: (p1.col + shift) % GRID_SIZE },
                Coord { row: p2.row, col: (p2.col + shift) % GRID_SIZE },
            )
        } else if p1.col == p2.col {
            (
                Coord { row: (p1.row + shift) % GRID_SIZE, col: p1.col },
                Coord { row: (p2.row + shift) % GRID_SIZE, col: p2.col },
            )
        } else {
            (
                Coord { row: p1.row, col: p2.col },
                Coord { row: p2.row, col: p1.col },
            )
        };

        out.push(char::from(grid.at(q1)));
        out.push(char::from(grid.at(q2)));
    }

    Ok(out)
}
