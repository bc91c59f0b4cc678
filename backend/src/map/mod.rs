//! Act map generation
//!
//! Builds the branching act map from the act's map stream:
//!
//! 1. Carve `path_density` paths from row 0 to the top row.
//! 2. Drop duplicate entrance edges.
//! 3. Assign rooms (fixed rows, then a shuffled pool under adjacency rules).
//! 4. Optionally place the emerald key on one elite.
//! 5. Validate the result.
//!
//! Identical `(map seed, config)` always yields an identical map.
//!
//! # Example
//!
//! ```rust
//! use spire_seed_core::map::{generate_for_act, MapConfig};
//!
//! let a = generate_for_act(64_004_406_012_856, 1, &MapConfig::default()).unwrap();
//! let b = generate_for_act(64_004_406_012_856, 1, &MapConfig::default()).unwrap();
//! assert_eq!(a.fingerprint(), b.fingerprint());
//! ```

mod paths;
mod rooms;
pub mod types;

pub use types::{DungeonMap, MapEdge, MapNode, RoomType};

use crate::rng::StreamRng;
use crate::streams::act_seed_offset;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from map generation
#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("Invalid map config: {0}")]
    InvalidConfig(String),

    #[error("Unknown act {0}")]
    UnknownAct(u8),

    #[error("Retry budget exhausted while drawing {stage} ({attempts} attempts)")]
    RetryBudgetExhausted { stage: &'static str, attempts: u32 },

    #[error("Generated map violates an invariant: {0}")]
    InvariantViolated(String),
}

/// Share of the room pool per room type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomChances {
    pub shop: f32,
    pub rest: f32,
    pub treasure: f32,
    pub elite: f32,
    pub event: f32,
    /// Elite share multiplier from ascension 1 upward
    pub elite_ascension_multiplier: f32,
}

impl Default for RoomChances {
    fn default() -> Self {
        Self {
            shop: 0.05,
            rest: 0.12,
            treasure: 0.0,
            elite: 0.08,
            event: 0.22,
            elite_ascension_multiplier: 1.6,
        }
    }
}

/// Map generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Rows (floors) per act
    pub height: usize,
    /// Columns (lanes)
    pub width: usize,
    /// Paths carved from row 0
    pub path_density: usize,
    /// Paths may not re-merge fewer rows than this above a shared ancestor
    pub min_ancestor_gap: usize,
    /// How far back the shared-ancestor search looks
    pub max_ancestor_gap: usize,
    /// Row that is all treasure rooms
    pub treasure_row: usize,
    /// Column of the boss node
    pub boss_column: usize,
    pub room_chances: RoomChances,
    pub ascension: u8,
    /// Place the emerald key on one elite
    pub emerald_elite: bool,
    /// Redraws allowed for a constrained draw before giving up
    pub retry_budget: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            height: 15,
            width: 7,
            path_density: 6,
            min_ancestor_gap: 3,
            max_ancestor_gap: 5,
            treasure_row: 8,
            boss_column: 3,
            room_chances: RoomChances::default(),
            ascension: 0,
            emerald_elite: false,
            retry_budget: 1000,
        }
    }
}

impl MapConfig {
    pub fn with_ascension(ascension: u8) -> Self {
        Self {
            ascension,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), MapError> {
        if self.height < 2 {
            return Err(MapError::InvalidConfig(format!(
                "height must be at least 2, got {}",
                self.height
            )));
        }
        if self.width < 2 {
            return Err(MapError::InvalidConfig(format!(
                "width must be at least 2, got {}",
                self.width
            )));
        }
        if self.path_density == 0 {
            return Err(MapError::InvalidConfig(
                "path_density must be positive".to_string(),
            ));
        }
        if self.boss_column >= self.width {
            return Err(MapError::InvalidConfig(format!(
                "boss_column {} outside width {}",
                self.boss_column, self.width
            )));
        }
        if self.min_ancestor_gap > self.max_ancestor_gap {
            return Err(MapError::InvalidConfig(
                "min_ancestor_gap exceeds max_ancestor_gap".to_string(),
            ));
        }
        Ok(())
    }
}

/// Side information collected while generating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Rooms in the shuffled pool
    pub room_pool_size: usize,
    /// Pool entries beyond the number of open nodes
    pub surplus_rooms: usize,
    /// Nodes no pool entry fit, filled with monsters
    pub fallback_rooms: usize,
    /// Map-stream draws consumed
    pub draws: u32,
}

/// Generated map plus its report
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedMap {
    pub map: DungeonMap,
    pub report: GenerationReport,
}

/// Map generator for one configuration
#[derive(Debug, Clone, Default)]
pub struct MapGenerator {
    config: MapConfig,
}

impl MapGenerator {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Generate a map, drawing from `rng`
    ///
    /// # Errors
    /// - `InvalidConfig` before any draw.
    /// - `RetryBudgetExhausted` if a constrained redraw never succeeds.
    /// - `InvariantViolated` if the finished map fails validation.
    pub fn generate(&self, rng: &mut StreamRng) -> Result<GeneratedMap, MapError> {
        self.config.validate()?;
        let start_counter = rng.counter();

        let mut map = DungeonMap::new(
            self.config.height,
            self.config.width,
            self.config.boss_column,
        );
        paths::create_paths(&mut map, &self.config, rng)?;
        paths::filter_redundant_entrance_edges(&mut map);
        let stats = rooms::assign_rooms(&mut map, &self.config, rng);
        if self.config.emerald_elite {
            rooms::place_emerald_key(&mut map, rng);
        }

        validate_map(&map)?;

        Ok(GeneratedMap {
            map,
            report: GenerationReport {
                room_pool_size: stats.pool_size,
                surplus_rooms: stats.surplus_rooms,
                fallback_rooms: stats.fallback_rooms,
                draws: rng.counter() - start_counter,
            },
        })
    }
}

/// Generate the map of a 1-indexed act for a run seed
pub fn generate_for_act(seed: i64, act: u8, config: &MapConfig) -> Result<DungeonMap, MapError> {
    let offset = act_seed_offset(act).ok_or(MapError::UnknownAct(act))?;
    let mut rng = StreamRng::new(seed.wrapping_add(offset));
    MapGenerator::new(config.clone())
        .generate(&mut rng)
        .map(|generated| generated.map)
}

/// Check structural invariants of a finished map
///
/// - every reachable node has an outgoing edge (top-row nodes lead to the boss)
/// - no two adjacent nodes have edges crossing each other
/// - every connected node has a room
pub fn validate_map(map: &DungeonMap) -> Result<(), MapError> {
    let reached = map.reachable();
    for node in map.nodes() {
        if reached[node.y][node.x] && !node.has_edges() {
            return Err(MapError::InvariantViolated(format!(
                "reachable node ({}, {}) has no outgoing edge",
                node.x, node.y
            )));
        }
        if node.has_edges() && node.room.is_none() {
            return Err(MapError::InvariantViolated(format!(
                "connected node ({}, {}) has no room",
                node.x, node.y
            )));
        }
    }

    for y in 0..map.height().saturating_sub(1) {
        for x in 0..map.width() - 1 {
            let left = map.node(x, y);
            let right = map.node(x + 1, y);
            let left_goes_right = left.edges.iter().any(|e| e.dst_x == x + 1);
            let right_goes_left = right.edges.iter().any(|e| e.dst_x == x);
            if left_goes_right && right_goes_left {
                return Err(MapError::InvariantViolated(format!(
                    "edges from ({}, {}) and ({}, {}) cross",
                    x,
                    y,
                    x + 1,
                    y
                )));
            }
        }
    }
    Ok(())
}
