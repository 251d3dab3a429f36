// src/bin/dual_cipher.rs
//! Interactive front end — keyword + message in, ciphertext + recovered text out

use anyhow::{Context, Result};
use dual_cipher::{load_config, run_session};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = load_config();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(stdin.lock(), stdout.lock()).context("cipher session failed")?;

    Ok(())
}
