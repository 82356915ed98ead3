//! `drsa randgen`: raw generator bytes to a writer.

use std::io::Write;

use anyhow::Context;
use drsa_core::GeneratorParams;

use crate::RandgenArgs;

/// Generate `args.size` bytes and write them to `out` unmodified.
///
/// # Errors
///
/// Fails on derivation or generator errors, or if `out` rejects the bytes.
pub fn run(args: &RandgenArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let params =
        GeneratorParams::new(args.size).with_search_limit(super::search_limit(args.max_attempts));
    let d = &args.derivation;
    let stream = drsa_core::generate_with(
        &params,
        d.password.as_bytes(),
        d.confusion.as_bytes(),
        d.iterations,
    )
    .context("byte stream generation failed")?;

    out.write_all(stream.expose())
        .context("failed to write byte stream")?;
    tracing::info!(bytes = stream.len(), "byte stream written");
    Ok(())
}
