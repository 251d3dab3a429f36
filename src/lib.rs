// src/lib.rs
//! dual-cipher — keyword substitution followed by a Playfair digraph cipher
//!
//! An educational classical cipher, not a security tool.
//!
//! Features:
//! - Keyword-derived substitution alphabet and 5×5 Playfair grid (I/J merged)
//! - Exact greedy digraph preparation with `X` fillers
//! - Hill-climbing attack with optional known-plaintext crib
//! - TOML config + `tracing` logging

pub mod attack;
pub mod cipher;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod session;

// Re-export everything users need at the crate root
pub use attack::{AttackOutcome, AttackParams, HillClimber, KnownPlaintext};
pub use cipher::DualCipher;
pub use config::load as load_config;
pub use crate::core::{normalize_letters, prepare, Digraphs, Keyword, KeywordAlphabet, PlayfairGrid};
pub use error::{CipherError, Result};
pub use session::{run_session, SessionTranscript};
