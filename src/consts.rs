// src/consts.rs
//! Shared constants — alphabet layout, padding rules and attack defaults

/// Standard alphabet; position `i` is the plaintext letter for table slot `i`
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Side length of the Playfair square
pub const GRID_SIZE: usize = 5;

/// Number of letters held by the Playfair square
pub const GRID_LETTERS: usize = GRID_SIZE * GRID_SIZE;

/// Filler inserted between doubled letters and after an odd tail
pub const FILLER: u8 = b'X';

/// The letter dropped from the grid …
pub const MERGED_LETTER: u8 = b'J';

/// … and the letter that stands in for it
pub const MERGED_INTO: u8 = b'I';

/// Iterations per restart for the hill-climbing attack
pub const DEFAULT_ITERATIONS: usize = 50_000;

/// Number of random restarts for the hill-climbing attack
pub const DEFAULT_RESTARTS: usize = 5;

/// Bonus for a fully matching known-plaintext crib
pub const DEFAULT_KNOWN_WEIGHT: f64 = 50.0;

/// Score given to digraphs missing from the English table
pub const FALLBACK_DIGRAPH_SCORE: f64 = 0.01;

/// Chance that a step tweaks the alphabet rather than the grid
pub const ALPHABET_TWEAK_PROBABILITY: f64 = 0.6;

/// Chance of accepting a step that does not improve the score
pub const UPHILL_PROBABILITY: f64 = 0.001;

/// Environment variable naming the config file
pub const CONFIG_ENV_VAR: &str = "DUAL_CIPHER_CONFIG";

/// Config file used when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "dual-cipher.toml";
