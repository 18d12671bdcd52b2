//! Mastermind Digits - CLI
//!
//! Type the digits 1-5 in the order you think is hidden, press Enter, and the
//! game tells you how many are in the right place.

use anyhow::{Context, Result};
use clap::Parser;
use mastermind_digits::{
    game::{Game, play},
    interactive::{TerminalKeys, TerminalSink},
};
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind_digits",
    about = "Find the hidden order of the digits 1-5",
    long_about = "Find the hidden order of the digits 1-5.\n\n\
        Type digits 1-5 to build a guess (each digit once), Backspace to undo \
        and Enter to submit. The number printed after each row is how many \
        digits are in the right place. Press q or Ctrl-C to give up.",
    version,
    author
)]
struct Cli {
    /// Seed for the secret, for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,

    /// Draw digits without colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut game = Game::random(&mut rng);

    let outcome = {
        let mut keys = TerminalKeys::new().context("failed to switch terminal to raw mode")?;
        let mut sink = TerminalSink::new(io::stdout().lock());
        play(&mut game, &mut keys, &mut sink).context("terminal I/O failed")?
    };

    Ok(ExitCode::from(outcome.exit_code()))
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
