//! Map generation for Python

use pyo3::prelude::*;

use super::value_error;
use crate::map::{generate_for_act, MapConfig};

/// Generate an act map and return it as JSON
///
/// `config_json` may override any `MapConfig` field; omitted fields keep
/// their defaults.
#[pyfunction]
#[pyo3(signature = (seed, act, config_json=None))]
pub fn generate_map_json(seed: i64, act: u8, config_json: Option<&str>) -> PyResult<String> {
    let config: MapConfig = match config_json {
        Some(json) => serde_json::from_str(json).map_err(value_error)?,
        None => MapConfig::default(),
    };
    let map = generate_for_act(seed, act, &config).map_err(value_error)?;
    serde_json::to_string(&map).map_err(value_error)
}
