// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("letter '{0}' is not in the Playfair grid")]
    LetterNotInGrid(char),

    #[error("digraph text must have even length, got {0} letters")]
    OddLength(usize),

    #[error("substitution alphabet is not a permutation of A-Z: {0}")]
    InvalidAlphabet(String),

    #[error("grid key must hold the 25 letters A-Z except J exactly once: {0}")]
    InvalidGridKey(String),

    #[error("ciphertext is empty after normalization")]
    EmptyCiphertext,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CipherError>;
