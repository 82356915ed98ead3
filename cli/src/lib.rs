//! `drsa` — command-line front end for deterministic RSA key derivation.
//!
//! Thin shell over `drsa-core` and `drsa-keystore`: argument parsing,
//! standard streams, and log setup live here; every computation is
//! delegated.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod commands;
pub mod logging;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use drsa_core::{DEFAULT_KEY_BITS, DEFAULT_STREAM_LEN};

/// Deterministic RSA key pairs from a password.
#[derive(Parser)]
#[command(name = "drsa", version, about)]
pub struct Cli {
    /// More log output on stderr (`-v` info, `-vv` debug, `-vvv` trace).
    /// `RUST_LOG` overrides this.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Write the raw generator stream to stdout
    Randgen(RandgenArgs),

    /// Derive a key pair and store it as PEM files
    Rsagen(RsagenArgs),

    /// Time seed derivation across password, salt and iteration sizes
    Bench(BenchArgs),
}

/// Password, confusion string and iteration count.
#[derive(Args)]
pub struct DerivationArgs {
    /// Secret password
    pub password: String,

    /// Confusion string, also the PBKDF2 salt
    pub confusion: String,

    /// PBKDF2 iterations and generator rounds
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub iterations: u32,
}

/// `drsa randgen`.
#[derive(Args)]
pub struct RandgenArgs {
    #[command(flatten)]
    pub derivation: DerivationArgs,

    /// Number of bytes to produce
    #[arg(long, default_value_t = DEFAULT_STREAM_LEN)]
    pub size: usize,

    /// Give up after this many candidate buffers per round
    #[arg(long)]
    pub max_attempts: Option<u64>,
}

/// `drsa rsagen`.
#[derive(Args)]
pub struct RsagenArgs {
    /// Password (omit with `--stdin`)
    #[arg(required_unless_present = "stdin")]
    pub password: Option<String>,

    /// Confusion string (omit with `--stdin`)
    #[arg(required_unless_present = "stdin")]
    pub confusion: Option<String>,

    /// Iterations (omit with `--stdin`)
    #[arg(
        required_unless_present = "stdin",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub iterations: Option<u32>,

    /// Read `bits / 8` key bytes from stdin instead of deriving them
    #[arg(long, conflicts_with_all = ["password", "confusion", "iterations"])]
    pub stdin: bool,

    /// Modulus width in bits
    #[arg(long, default_value_t = DEFAULT_KEY_BITS)]
    pub bits: usize,

    /// Use the prime halves untouched; the modulus may come out shorter.
    /// Stored files then lack a fixed modulus width and cannot be split
    /// back into `n` and the exponent by `bits / 8`
    #[arg(long)]
    pub raw_width: bool,

    /// Directory for `private_key.pem` and `public_key.pem`
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Replace existing key files
    #[arg(long)]
    pub force: bool,

    /// Give up after this many candidate buffers per round or prime
    /// increment passes
    #[arg(long)]
    pub max_attempts: Option<u64>,
}

/// `drsa bench`.
#[derive(Args)]
pub struct BenchArgs {
    /// Password lengths in bytes
    #[arg(long, value_delimiter = ',', default_values_t = [5usize, 50, 200])]
    pub password_sizes: Vec<usize>,

    /// Salt (confusion string) lengths in bytes
    #[arg(long, value_delimiter = ',', default_values_t = [5usize, 50, 200])]
    pub salt_sizes: Vec<usize>,

    /// Iteration counts
    #[arg(long, value_delimiter = ',', default_values_t = [1u32, 10, 100])]
    pub iterations: Vec<u32>,
}

/// Dispatch a parsed command line against the process's standard streams.
///
/// # Errors
///
/// Propagates the failure of the selected subcommand.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    if let Err(e) = drsa_core::disable_core_dumps() {
        tracing::warn!("could not disable core dumps: {e}");
    }

    match cli.command {
        Command::Randgen(args) => {
            let mut out = io::stdout().lock();
            commands::randgen::run(&args, &mut out)?;
            out.flush()?;
        }
        Command::Rsagen(args) => {
            let paths = commands::rsagen::run(&args, &mut io::stdin().lock())?;
            println!("{}", paths.private_key.display());
            println!("{}", paths.public_key.display());
        }
        Command::Bench(args) => {
            let mut out = io::stdout().lock();
            commands::bench::run(&args, &mut out)?;
        }
    }
    Ok(())
}
