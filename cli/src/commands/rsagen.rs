//! `drsa rsagen`: derive a key pair and store it.

use std::io::Read;

use anyhow::{bail, Context};
use drsa_core::{KeyGenParams, RsaKeyPair, WidthPolicy};
use drsa_keystore::StoredKeyPaths;
use zeroize::Zeroizing;

use crate::RsagenArgs;

/// Key generation parameters selected by the flags.
#[must_use]
pub fn params(args: &RsagenArgs) -> KeyGenParams {
    let limit = super::search_limit(args.max_attempts);
    let policy = if args.raw_width {
        WidthPolicy::Raw
    } else {
        WidthPolicy::Exact
    };
    KeyGenParams {
        pattern_limit: limit,
        prime_limit: limit,
        ..KeyGenParams::new(args.bits).with_width_policy(policy)
    }
}

/// Derive the key pair from the arguments, or from `stdin` under
/// `--stdin`, and write both PEM files to `args.out_dir`.
///
/// # Errors
///
/// Fails on invalid parameters, a short read from `stdin`, any derivation
/// error, or if the key files cannot be written.
pub fn run(args: &RsagenArgs, stdin: &mut impl Read) -> anyhow::Result<StoredKeyPaths> {
    let params = params(args);
    params.validate()?;

    let key = if args.stdin {
        from_reader(&params, stdin)?
    } else {
        let (Some(password), Some(confusion), Some(iterations)) =
            (&args.password, &args.confusion, args.iterations)
        else {
            bail!("password, confusion string and iterations are required without --stdin");
        };
        drsa_core::generate_key_pair_with(
            &params,
            password.as_bytes(),
            confusion.as_bytes(),
            iterations,
        )
        .context("key pair derivation failed")?
    };

    let paths = drsa_keystore::store_key_pair(&key, &args.out_dir, args.force)
        .with_context(|| format!("failed to store keys in {}", args.out_dir.display()))?;
    tracing::info!(modulus_bits = key.bits(), "key pair written");
    Ok(paths)
}

fn from_reader(params: &KeyGenParams, input: &mut impl Read) -> anyhow::Result<RsaKeyPair> {
    let mut material = Zeroizing::new(vec![0u8; params.key_bytes()]);
    input.read_exact(&mut material).with_context(|| {
        format!("expected {} key bytes on stdin", params.key_bytes())
    })?;
    drsa_core::key_pair_from_stream(params, &material).context("key pair derivation failed")
}
