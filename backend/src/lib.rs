//! Spire Seed Core - deterministic run RNG
//!
//! Reproduces every random decision of a run from its seed: card rewards,
//! relic and potion drops, shuffles and the act maps.
//!
//! # Architecture
//!
//! - **rng**: xorshift128+ generator, counted streams, Java LCG
//! - **seed**: Base-35 seed text codec
//! - **streams**: The 13 named streams and their floor/act reseeding
//! - **shuffle**: Fisher-Yates over a stream or a derived Java LCG
//! - **rewards**: Rarity rolls with pity, relic and potion rolls
//! - **map**: Act map paths and room assignment
//! - **core**: Run progress (floor, act)
//! - **models**: Event log
//!
//! # Critical Invariants
//!
//! 1. Every draw advances its stream's counter by exactly one
//! 2. `(seed, counters)` fully restores all stream states
//! 3. Identical inputs produce identical outputs on every platform
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod core;
pub mod map;
pub mod models;
pub mod rewards;
pub mod rng;
pub mod seed;
pub mod shuffle;
pub mod streams;

// Re-exports for convenience
pub use core::progress::RunProgress;
pub use map::{DungeonMap, GeneratedMap, MapConfig, MapError, MapGenerator, RoomType};
pub use models::event::{Event, EventLog};
pub use rewards::{
    generate_rewards, Rarity, RarityPolicy, RarityPools, Reward, RewardConfig, RewardError,
    PityTimer,
};
pub use rng::{JavaRandom, StreamRng};
pub use seed::{Seed, SeedError};
pub use shuffle::{shuffle, shuffle_seeded, ShuffleSource};
pub use streams::{
    CheckpointError, CounterSnapshot, RunCheckpoint, StreamError, StreamManager, StreamName,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn spire_seed_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::streams::PyStreamManager>()?;
    m.add_function(wrap_pyfunction!(ffi::seed::seed_to_string, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::seed::seed_from_string, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::seed::parse_seed, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::maps::generate_map_json, m)?)?;
    Ok(())
}
