//! Command implementations

pub mod map;
pub mod restore;
pub mod rewards;
pub mod seed;
pub mod trace;

use anyhow::{Context, Result};
use spire_seed_core::seed::parse_seed_input;

/// Resolve seed text or a signed decimal to the run seed
pub(crate) fn resolve_seed(input: &str) -> Result<i64> {
    parse_seed_input(input).with_context(|| format!("Invalid seed '{}'", input))
}

/// Read a whole file as UTF-8
pub(crate) fn read_file(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}
