//! `drsa bench`: seed derivation timings.
//!
//! For every combination of password length, salt length and iteration
//! count, derives a seed from fresh OS randomness and prints one table row.

use std::io::Write;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use anyhow::{ensure, Context};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::BenchArgs;

/// One measured combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchRow {
    pub password_len: usize,
    pub salt_len: usize,
    pub iterations: NonZeroU32,
    /// Wall-clock time of the PBKDF2 call alone.
    pub elapsed: Duration,
}

/// Time a single seed derivation over random inputs of the given sizes.
///
/// # Errors
///
/// Fails if the OS RNG is unavailable or derivation rejects the inputs.
pub fn measure(
    rng: &mut impl RngCore,
    password_len: usize,
    salt_len: usize,
    iterations: NonZeroU32,
) -> anyhow::Result<BenchRow> {
    let mut password = Zeroizing::new(vec![0u8; password_len]);
    let mut salt = Zeroizing::new(vec![0u8; salt_len]);
    rng.try_fill_bytes(&mut password)
        .context("OS random number generator failed")?;
    rng.try_fill_bytes(&mut salt)
        .context("OS random number generator failed")?;

    let start = Instant::now();
    let derived = drsa_core::derive_seed(&password, &salt, iterations)?;
    let elapsed = start.elapsed();
    drop(derived);

    Ok(BenchRow {
        password_len,
        salt_len,
        iterations,
        elapsed,
    })
}

/// Table header, column widths matching [`write_row`].
///
/// # Errors
///
/// Propagates write failures.
pub fn write_header(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<15}{:<15}{:<15}{:<20}",
        "Password size", "Salt size", "Iterations", "Time spent (seconds)"
    )
}

/// One table row.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_row(out: &mut impl Write, row: &BenchRow) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<15}{:<15}{:<15}{:<20.6}",
        row.password_len,
        row.salt_len,
        row.iterations,
        row.elapsed.as_secs_f64()
    )
}

/// Run the full grid and print the table to `out`.
///
/// # Errors
///
/// Fails on a zero size or iteration count, an RNG failure, or a write
/// failure.
pub fn run(args: &BenchArgs, out: &mut impl Write) -> anyhow::Result<()> {
    ensure!(
        args.password_sizes.iter().chain(&args.salt_sizes).all(|&n| n > 0),
        "password and salt sizes must be at least 1"
    );
    let iterations = args
        .iterations
        .iter()
        .map(|&i| drsa_core::seed::iterations(i))
        .collect::<Result<Vec<_>, _>>()?;

    write_header(out)?;
    let mut rng = OsRng;
    for &password_len in &args.password_sizes {
        for &salt_len in &args.salt_sizes {
            for &rounds in &iterations {
                let row = measure(&mut rng, password_len, salt_len, rounds)?;
                tracing::debug!(
                    password_len,
                    salt_len,
                    iterations = rounds.get(),
                    elapsed_us = u64::try_from(row.elapsed.as_micros()).unwrap_or(u64::MAX),
                    "seed derivation timed"
                );
                write_row(out, &row)?;
            }
        }
    }
    Ok(())
}
