//! PyO3 FFI bindings
//!
//! Exposes seed conversion, a stream manager wrapper and map generation to
//! Python. Values cross the boundary as plain ints, strings and dicts; maps
//! cross as JSON.

pub mod maps;
pub mod seed;
pub mod streams;

use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

/// Convert any displayable Rust error into a Python `ValueError`
pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}
