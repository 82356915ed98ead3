//! Subcommand handlers.
//!
//! Each handler takes its parsed arguments plus the streams it reads or
//! writes, so tests can drive it without a process boundary.

pub mod bench;
pub mod randgen;
pub mod rsagen;

use drsa_core::SearchLimit;

/// `--max-attempts` as a search cap; absent means unbounded.
#[must_use]
pub fn search_limit(max_attempts: Option<u64>) -> SearchLimit {
    max_attempts.map_or(SearchLimit::UNBOUNDED, SearchLimit::at_most)
}
