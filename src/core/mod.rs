// src/core/mod.rs
//! The cipher engine's building blocks — no I/O, no global state

pub mod alphabet;
pub mod grid;
pub mod keyword;
pub mod playfair;
pub mod text;

pub use alphabet::KeywordAlphabet;
pub use grid::{Coord, PlayfairGrid};
pub use keyword::Keyword;
pub use text::{normalize_letters, prepare, Digraphs};
