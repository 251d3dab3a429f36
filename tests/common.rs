//! Shared test utilities — logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging (respects RUST_LOG=).
/// Idempotent — safe to call from every test.
#[allow(dead_code)]
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Keywords exercised by the property-style loops
#[allow(dead_code)]
pub const KEYWORDS: &[&str] = &[
    "",
    "KEY",
    "MONARCHY",
    "playfair example",
    "Jumbo jet",
    "ZEBRAS",
    "aaaa",
    "The Quick Brown Fox Jumps Over The Lazy Dog",
    "12345!",
    "JJJJ iiii",
];
