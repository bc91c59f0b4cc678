//! PyO3 wrapper for StreamManager

use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::value_error;
use crate::map::MapConfig;
use crate::streams::{RunCheckpoint, StreamManager as RustStreamManager, StreamName};

/// Python wrapper for the run's stream manager
///
/// # Example (from Python)
///
/// ```python
/// from spire_seed_core import StreamManager, parse_seed
///
/// streams = StreamManager(parse_seed("TESTSEED1"))
/// streams.draw_int("card", 0, 99)   # 5
/// streams.advance_floor()
/// saved = streams.checkpoint_json()
/// ```
#[pyclass(name = "StreamManager")]
pub struct PyStreamManager {
    inner: RustStreamManager,
}

fn stream_name(name: &str) -> PyResult<StreamName> {
    name.parse().map_err(value_error)
}

#[pymethods]
impl PyStreamManager {
    #[new]
    fn new(seed: i64) -> Self {
        PyStreamManager {
            inner: RustStreamManager::new(seed),
        }
    }

    /// Restore from a checkpoint produced by `checkpoint_json`
    #[staticmethod]
    fn from_checkpoint_json(json: &str) -> PyResult<Self> {
        let checkpoint = RunCheckpoint::from_json(json).map_err(value_error)?;
        let inner = RustStreamManager::from_checkpoint(&checkpoint).map_err(value_error)?;
        Ok(PyStreamManager { inner })
    }

    fn checkpoint_json(&self) -> PyResult<String> {
        self.inner.to_checkpoint().to_json().map_err(value_error)
    }

    #[getter]
    fn seed(&self) -> i64 {
        self.inner.seed()
    }

    #[getter]
    fn floor(&self) -> u32 {
        self.inner.floor()
    }

    #[getter]
    fn act(&self) -> u8 {
        self.inner.act()
    }

    fn counter(&self, stream: &str) -> PyResult<u32> {
        Ok(self.inner.counter(stream_name(stream)?))
    }

    /// Every stream's counter keyed by name
    fn counters<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for name in StreamName::ALL {
            dict.set_item(name.as_str(), self.inner.counter(name))?;
        }
        Ok(dict)
    }

    /// Uniform integer in `[lo, hi]` from the named stream
    fn draw_int(&mut self, stream: &str, lo: i32, hi: i32) -> PyResult<i32> {
        if lo > hi {
            return Err(value_error(format!("lo {} exceeds hi {}", lo, hi)));
        }
        let name = stream_name(stream)?;
        Ok(self.inner.stream_mut(name).draw_int_inclusive(lo, hi))
    }

    fn draw_bool(&mut self, stream: &str) -> PyResult<bool> {
        let name = stream_name(stream)?;
        Ok(self.inner.stream_mut(name).draw_bool())
    }

    fn draw_float(&mut self, stream: &str) -> PyResult<f32> {
        let name = stream_name(stream)?;
        Ok(self.inner.stream_mut(name).draw_float())
    }

    fn advance_floor(&mut self) -> u32 {
        self.inner.advance_floor()
    }

    fn advance_act(&mut self) -> PyResult<u8> {
        self.inner.advance_act().map_err(value_error)
    }

    /// Generate the current act's map from the map stream, as JSON
    fn generate_act_map_json(&mut self) -> PyResult<String> {
        let map = self
            .inner
            .generate_act_map(&MapConfig::default())
            .map_err(value_error)?;
        serde_json::to_string(&map).map_err(value_error)
    }

    /// Event log as a JSON array
    fn events_json(&self) -> PyResult<String> {
        serde_json::to_string(self.inner.events().events()).map_err(value_error)
    }
}
