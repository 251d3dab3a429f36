// src/attack/mod.rs
//! Hill-climbing cryptanalysis of the two-stage cipher
//!
//! Searches jointly over substitution alphabets and grid layouts, scoring
//! candidate plaintexts by English digraph frequency and, optionally, a
//! known-plaintext crib.

pub mod hillclimb;
pub mod score;

pub use hillclimb::{AttackOutcome, AttackParams, Candidate, HillClimber};
pub use score::{digraph_score, KnownPlaintext};
