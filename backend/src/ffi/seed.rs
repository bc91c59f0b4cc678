//! Seed text conversion for Python

use pyo3::prelude::*;

use super::value_error;
use crate::seed;

/// Canonical base-35 text of a seed
#[pyfunction]
pub fn seed_to_string(seed: i64) -> String {
    seed::encode(seed)
}

/// Decode base-35 seed text
///
/// Raises ValueError on empty input or characters outside the alphabet.
#[pyfunction]
pub fn seed_from_string(text: &str) -> PyResult<i64> {
    seed::decode(text).map_err(value_error)
}

/// Accept either seed text or a decimal seed
#[pyfunction]
pub fn parse_seed(text: &str) -> PyResult<i64> {
    seed::parse_seed_input(text).map_err(value_error)
}
