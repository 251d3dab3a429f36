// src/bin/attack.rs
//! Hill-climbing attack on keyword + Playfair ciphertext
//!
//! ```text
//! dual-cipher-attack --cipher "NWILPEDTVOTSLV" --iter 50000 --restarts 5
//! dual-cipher-attack --infile cipher.txt --known MYNAMEIS --known-pos 0 --json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dual_cipher::{load_config, normalize_letters, AttackParams, HillClimber, KnownPlaintext};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Hill-climb attack on keyword substitution + Playfair")]
struct Args {
    /// Ciphertext (letters only, even length)
    #[arg(long, conflicts_with = "infile")]
    cipher: Option<String>,

    /// Read ciphertext from a file
    #[arg(long)]
    infile: Option<PathBuf>,

    /// Iterations per restart
    #[arg(long = "iter")]
    iterations: Option<usize>,

    /// Number of random restarts
    #[arg(long)]
    restarts: Option<usize>,

    /// Known plaintext snippet
    #[arg(long)]
    known: Option<String>,

    /// Start position of the known snippet in the plaintext
    #[arg(long, default_value_t = 0)]
    known_pos: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let config = load_config();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let raw = match (&args.cipher, &args.infile) {
        (Some(cipher), _) => cipher.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => bail!("provide --cipher or --infile"),
    };
    let ciphertext = normalize_letters(&raw);
    if ciphertext.len() % 2 == 1 {
        bail!("ciphertext length must be even (Playfair)");
    }

    let mut params = AttackParams::from(&config.attack);
    if let Some(iterations) = args.iterations {
        params.iterations = iterations;
    }
    if let Some(restarts) = args.restarts {
        params.restarts = restarts;
    }
    if let Some(known) = &args.known {
        params = params.with_known(KnownPlaintext::new(known, args.known_pos));
    }

    info!(
        letters = ciphertext.len(),
        iterations = params.iterations,
        restarts = params.restarts,
        "starting attack"
    );
    let started = std::time::Instant::now();
    let mut climber = HillClimber::new(params, args.seed.or(config.attack.seed));
    let outcome = climber.run(&ciphertext).context("attack failed")?;
    info!("best overall score {:.3} in {:.1?}", outcome.score, started.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("\n=== RESULT ===");
        println!("Best plaintext guess:\n {}", outcome.plaintext);
        println!("Score: {:.3}", outcome.score);
        println!("Best substitution alphabet (A->...): {}", outcome.alphabet);
        println!("Best playfair key25 (row-major): {}", outcome.grid_key);
        println!("================");
    }

    Ok(())
}
