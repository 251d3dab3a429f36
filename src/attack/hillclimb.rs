// src/attack/hillclimb.rs
//! Random-restart hill climbing with occasional uphill moves

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use super::score::{digraph_score, KnownPlaintext};
use crate::cipher::DualCipher;
use crate::config::AttackSettings;
use crate::consts::{
    ALPHABET, ALPHABET_TWEAK_PROBABILITY, GRID_LETTERS, MERGED_LETTER, UPHILL_PROBABILITY,
};
use crate::core::{playfair, Digraphs, KeywordAlphabet, PlayfairGrid};
use crate::error::{CipherError, Result};

/// One point in the key space: a substitution table and a grid layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub alphabet: [u8; 26],
    pub grid_key: [u8; GRID_LETTERS],
}

impl Candidate {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut alphabet = *ALPHABET;
        alphabet.shuffle(rng);

        let mut grid_key = [0u8; GRID_LETTERS];
        for (slot, letter) in grid_key
            .iter_mut()
            .zip(ALPHABET.iter().copied().filter(|&l| l != MERGED_LETTER))
        {
            *slot = letter;
        }
        grid_key.shuffle(rng);

        Self { alphabet, grid_key }
    }

    /// The exact key used by `cipher`
    pub fn from_cipher(cipher: &DualCipher) -> Self {
        Self {
            alphabet: *cipher.alphabet().letters(),
            grid_key: cipher.grid().key(),
        }
    }

    /// Playfair decrypt with this grid, then undo this substitution
    pub fn decrypt(&self, digraphs: &Digraphs) -> Result<String> {
        let grid = PlayfairGrid::from_key(&self.grid_key)?;
        let alphabet = KeywordAlphabet::from_letters(&self.alphabet)?;
        let stage1 = playfair::decrypt(&grid, digraphs)?;
        Ok(alphabet.restore(&stage1))
    }

    /// Neighbour differing by one swap in either the alphabet or the grid
    fn tweak<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut next = self.clone();
        if rng.random_bool(ALPHABET_TWEAK_PROBABILITY) {
            let (i, j) = two_indices(rng, next.alphabet.len());
            next.alphabet.swap(i, j);
        } else {
            let (i, j) = two_indices(rng, next.grid_key.len());
            next.grid_key.swap(i, j);
        }
        next
    }
}

fn two_indices<R: Rng + ?Sized>(rng: &mut R, len: usize) -> (usize, usize) {
    let i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len - 1);
    if j >= i {
        j += 1;
    }
    (i, j)
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttackParams {
    pub iterations: usize,
    pub restarts: usize,
    pub known: Option<KnownPlaintext>,
    pub known_weight: f64,
}

impl From<&AttackSettings> for AttackParams {
    fn from(settings: &AttackSettings) -> Self {
        Self {
            iterations: settings.iterations,
            restarts: settings.restarts,
            known: None,
            known_weight: settings.known_weight,
        }
    }
}

impl AttackParams {
    pub fn with_known(mut self, known: KnownPlaintext) -> Self {
        self.known = Some(known);
        self
    }

    fn score(&self, text: &str) -> f64 {
        let text = text.as_bytes();
        let bonus = self
            .known
            .as_ref()
            .map_or(0.0, |k| k.bonus(text, self.known_weight));
        digraph_score(text) + bonus
    }
}

/// Best guess found by an attack run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttackOutcome {
    pub plaintext: String,
    pub score: f64,
    /// Substitution table, `A->..` order
    pub alphabet: String,
    /// Grid letters, row-major
    pub grid_key: String,
}

impl AttackOutcome {
    fn new(candidate: &Candidate, plaintext: String, score: f64) -> Self {
        Self {
            plaintext,
            score,
            alphabet: candidate.alphabet.iter().copied().map(char::from).collect(),
            grid_key: candidate.grid_key.iter().copied().map(char::from).collect(),
        }
    }
}

pub struct HillClimber {
    params: AttackParams,
    rng: StdRng,
}

impl HillClimber {
    /// A fixed `seed` makes runs reproducible; `None` seeds from the OS
    pub fn new(params: AttackParams, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { params, rng }
    }

    pub fn params(&self) -> &AttackParams {
        &self.params
    }

    /// Attack `ciphertext` (normalized to letters; must be non-empty and even).
    /// At least one restart is always run. A crib reaching past the end of
    /// the text only scores the letters that overlap it.
    pub fn run(&mut self, ciphertext: &str) -> Result<AttackOutcome> {
        let digraphs = Digraphs::from_ciphertext(ciphertext)?;
        if digraphs.is_empty() {
            return Err(CipherError::EmptyCiphertext);
        }
        let restarts = self.params.restarts.max(1);
        let mut best: Option<AttackOutcome> = None;

        for restart in 0..restarts {
            let local = self.climb(&digraphs)?;
            info!(
                "[restart {}/{}] best_local_score={:.3}",
                restart + 1,
                restarts,
                local.score
            );
            let improved = match &best {
                Some(b) => local.score > b.score,
                None => true,
            };
            if improved {
                best = Some(local);
            }
        }

        best.ok_or(CipherError::EmptyCiphertext)
    }

    fn climb(&mut self, digraphs: &Digraphs) -> Result<AttackOutcome> {
        let mut current = Candidate::random(&mut self.rng);
        let plaintext = current.decrypt(digraphs)?;
        let mut current_score = self.params.score(&plaintext);
        let mut best = AttackOutcome::new(&current, plaintext, current_score);

        for _ in 0..self.params.iterations {
            let candidate = current.tweak(&mut self.rng);
            let plaintext = candidate.decrypt(digraphs)?;
            let score = self.params.score(&plaintext);

            if score > current_score || self.rng.random_bool(UPHILL_PROBABILITY) {
                current = candidate;
                current_score = score;
                if score > best.score {
                    debug!(score, %plaintext, "new local best");
                    best = AttackOutcome::new(&current, plaintext, score);
                }
            }
        }

        Ok(best)
    }
}
