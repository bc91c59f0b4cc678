//! Stream manager - the run's 13 streams and their lifecycle
//!
//! One `StreamManager` is created per run and mutated in place for the
//! run's duration. It is an explicit value owned by whoever drives the
//! run; there is no global stream state.
//!
//! # Critical Invariants
//!
//! - **Replacement, not advancement**: floor and act transitions swap in
//!   brand-new streams at counter 0.
//! - **Replay determinism**: `(seed, progress, counters)` fully determines
//!   every future draw; restore rebuilds streams by replaying counters.
//! - **Isolation**: speculative lookahead works on a `clone()`, which is a
//!   deep copy of every generator state and counter.

use super::{act_seed_offset, act_snap_target, SeedingRule, StreamName};
use crate::core::progress::RunProgress;
use crate::map::{DungeonMap, MapConfig, MapError, MapGenerator};
use crate::models::event::{Event, EventLog};
use crate::rng::StreamRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors from stream lifecycle operations
#[derive(Debug, Error, PartialEq)]
pub enum StreamError {
    #[error("Unknown act {0}: map stream offsets exist for acts 1-4")]
    UnknownAct(u8),
}

/// Immutable record of every stream's counter plus the run position
///
/// Together with the run seed this determines all future manager
/// behaviour. Streams missing from `counters` restore at counter 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub floor: u32,
    pub act: u8,
    pub counters: BTreeMap<StreamName, u32>,
}

impl CounterSnapshot {
    pub fn counter(&self, stream: StreamName) -> u32 {
        self.counters.get(&stream).copied().unwrap_or(0)
    }
}

/// Owner of the run's 13 named streams
///
/// # Example
/// ```
/// use spire_seed_core::streams::{StreamManager, StreamName};
///
/// let mut streams = StreamManager::new(64_004_406_012_856);
/// let roll = streams.stream_mut(StreamName::Card).draw_int_inclusive(0, 99);
/// assert_eq!(roll, 5);
///
/// streams.advance_floor();
/// assert_eq!(streams.stream(StreamName::Shuffle).seed(), 64_004_406_012_857);
/// ```
#[derive(Debug, Clone)]
pub struct StreamManager {
    seed: i64,
    progress: RunProgress,
    streams: Vec<StreamRng>,
    events: EventLog,
}

impl StreamManager {
    /// Fresh run: floor 0 of act 1, every stream at counter 0
    pub fn new(seed: i64) -> Self {
        let progress = RunProgress::new();
        let streams = StreamName::ALL
            .iter()
            .map(|&name| StreamRng::new(stream_seed(seed, name, progress)))
            .collect();

        Self {
            seed,
            progress,
            streams,
            events: EventLog::new(),
        }
    }

    /// Rebuild a manager from a snapshot by replaying every counter
    ///
    /// # Errors
    /// `StreamError::UnknownAct` if the snapshot's act has no map offset.
    pub fn restore(seed: i64, snapshot: &CounterSnapshot) -> Result<Self, StreamError> {
        if act_seed_offset(snapshot.act).is_none() {
            return Err(StreamError::UnknownAct(snapshot.act));
        }

        let progress = RunProgress::at(snapshot.floor, snapshot.act);
        let streams: Vec<StreamRng> = StreamName::ALL
            .iter()
            .map(|&name| {
                StreamRng::with_counter(stream_seed(seed, name, progress), snapshot.counter(name))
            })
            .collect();
        let replayed_draws = streams.iter().map(|s| u64::from(s.counter())).sum();

        let mut events = EventLog::new();
        events.log(Event::Restored {
            floor: progress.floor(),
            act: progress.act(),
            replayed_draws,
        });

        Ok(Self {
            seed,
            progress,
            streams,
            events,
        })
    }

    /// Record of the run position and every stream's counter
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            floor: self.progress.floor(),
            act: self.progress.act(),
            counters: StreamName::ALL
                .iter()
                .map(|&name| (name, self.counter(name)))
                .collect(),
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn progress(&self) -> RunProgress {
        self.progress
    }

    pub fn floor(&self) -> u32 {
        self.progress.floor()
    }

    pub fn act(&self) -> u8 {
        self.progress.act()
    }

    pub fn stream(&self, name: StreamName) -> &StreamRng {
        &self.streams[name.index()]
    }

    /// Mutable handle for drawing from one stream
    pub fn stream_mut(&mut self, name: StreamName) -> &mut StreamRng {
        &mut self.streams[name.index()]
    }

    pub fn counter(&self, name: StreamName) -> u32 {
        self.stream(name).counter()
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Hand over the logged events and start an empty log
    pub fn take_events(&mut self) -> EventLog {
        std::mem::take(&mut self.events)
    }

    /// Replace the five per-floor streams with fresh `seed + floor` streams
    pub fn on_floor_advance(&mut self, floor: u32) {
        self.progress = RunProgress::at(floor, self.progress.act());
        for name in StreamName::PER_FLOOR {
            self.replace(name);
        }
    }

    /// Climb one floor
    pub fn advance_floor(&mut self) -> u32 {
        let floor = self.progress.floor() + 1;
        self.on_floor_advance(floor);
        floor
    }

    /// Snap the card stream's counter to the next act checkpoint
    ///
    /// `0 < c < 250` → 250, `250 < c < 500` → 500, `500 < c < 750` → 750,
    /// otherwise unchanged. The stream is advanced with real draws.
    pub fn on_act_transition(&mut self) {
        let from = self.counter(StreamName::Card);
        if let Some(to) = act_snap_target(from) {
            self.stream_mut(StreamName::Card).set_counter(to);
            self.events.log(Event::CounterSnapped {
                floor: self.progress.floor(),
                stream: StreamName::Card,
                from,
                to,
            });
        }
    }

    /// Enter the next act: reseed the map stream, then snap the card counter
    ///
    /// # Errors
    /// `StreamError::UnknownAct` past the last act; the manager is unchanged.
    pub fn advance_act(&mut self) -> Result<u8, StreamError> {
        let next = self.progress.act() + 1;
        if act_seed_offset(next).is_none() {
            return Err(StreamError::UnknownAct(next));
        }

        self.progress.advance_act();
        self.replace(StreamName::Map);
        self.events.log(Event::ActEntered {
            floor: self.progress.floor(),
            act: next,
            map_seed: self.stream(StreamName::Map).seed(),
        });
        self.on_act_transition();
        Ok(next)
    }

    /// Generate the current act's map from the map stream
    pub fn generate_act_map(&mut self, config: &MapConfig) -> Result<DungeonMap, MapError> {
        let generator = MapGenerator::new(config.clone());
        let generated = generator.generate(&mut self.streams[StreamName::Map.index()])?;

        self.events.log(Event::MapGenerated {
            floor: self.progress.floor(),
            act: self.progress.act(),
            nodes: generated.map.connected_node_count(),
            edges: generated.map.edge_count(),
            fallback_rooms: generated.report.fallback_rooms,
            surplus_rooms: generated.report.surplus_rooms,
        });
        Ok(generated.map)
    }

    fn replace(&mut self, name: StreamName) {
        let seed = stream_seed(self.seed, name, self.progress);
        self.streams[name.index()] = StreamRng::new(seed);
        self.events.log(Event::StreamReseeded {
            floor: self.progress.floor(),
            stream: name,
            seed,
        });
    }
}

/// Equal iff the run seed and all 13 counters match
///
/// Position is not compared; use `snapshot()` to compare floor and act too.
impl PartialEq for StreamManager {
    fn eq(&self, other: &Self) -> bool {
        self.seed == other.seed
            && self
                .streams
                .iter()
                .zip(&other.streams)
                .all(|(a, b)| a.counter() == b.counter())
    }
}

impl Eq for StreamManager {}

/// Seed a stream gets at the given run position
///
/// Per-act streams fall back to offset 0 for acts without a table entry;
/// public entry points reject those acts before reaching here.
pub(crate) fn stream_seed(seed: i64, name: StreamName, progress: RunProgress) -> i64 {
    match name.seeding_rule() {
        SeedingRule::Persistent => seed,
        SeedingRule::PerFloor => seed.wrapping_add(i64::from(progress.floor())),
        SeedingRule::PerAct => {
            seed.wrapping_add(act_seed_offset(progress.act()).unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_seeds_follow_rules() {
        let streams = StreamManager::new(1000);
        for name in StreamName::ALL {
            let expected = if name == StreamName::Map { 1001 } else { 1000 };
            assert_eq!(streams.stream(name).seed(), expected, "{}", name);
            assert_eq!(streams.counter(name), 0);
        }
    }

    #[test]
    fn test_take_events_leaves_empty_log() {
        let mut streams = StreamManager::new(1000);
        streams.advance_floor();
        let mark = streams.events().len();
        assert_eq!(mark, StreamName::PER_FLOOR.len());

        streams.advance_floor();
        assert_eq!(streams.events().events_since(mark).len(), 5);

        let taken = streams.take_events();
        assert_eq!(taken.len(), 10);
        assert!(streams.events().is_empty());
        assert_eq!(streams.floor(), 2);
    }

    #[test]
    fn test_equality_compares_seed_and_counters() {
        let fresh = StreamManager::new(1000);
        let mut moved = StreamManager::new(1000);
        moved.advance_floor();
        assert_eq!(fresh, moved);
        assert_ne!(fresh.snapshot(), moved.snapshot());

        moved.stream_mut(StreamName::Misc).draw_bool();
        assert_ne!(fresh, moved);
        assert_ne!(StreamManager::new(1000), StreamManager::new(1001));
    }

    #[test]
    fn test_floor_advance_replaces_only_per_floor_streams() {
        let mut streams = StreamManager::new(1000);
        for name in StreamName::ALL {
            streams.stream_mut(name).draw_int(9);
        }
        streams.on_floor_advance(7);

        for name in StreamName::PER_FLOOR {
            assert_eq!(streams.stream(name).seed(), 1007);
            assert_eq!(streams.counter(name), 0);
        }
        for name in StreamName::PERSISTENT {
            assert_eq!(streams.counter(name), 1);
        }
        assert_eq!(streams.counter(StreamName::Map), 1);
        assert_eq!(streams.floor(), 7);
    }

    #[test]
    fn test_advance_act_reseeds_map() {
        let mut streams = StreamManager::new(1000);
        assert_eq!(streams.stream(StreamName::Map).seed(), 1001);
        assert_eq!(streams.advance_act(), Ok(2));
        assert_eq!(streams.stream(StreamName::Map).seed(), 1200);
        assert_eq!(streams.advance_act(), Ok(3));
        assert_eq!(streams.stream(StreamName::Map).seed(), 1600);
        assert_eq!(streams.advance_act(), Ok(4));
        assert_eq!(streams.stream(StreamName::Map).seed(), 2200);
        assert_eq!(streams.advance_act(), Err(StreamError::UnknownAct(5)));
        assert_eq!(streams.act(), 4);
    }

    #[test]
    fn test_restore_rejects_unknown_act() {
        let snapshot = CounterSnapshot {
            floor: 0,
            act: 9,
            counters: BTreeMap::new(),
        };
        assert_eq!(
            StreamManager::restore(1, &snapshot),
            Err(StreamError::UnknownAct(9))
        );
    }

    #[test]
    fn test_snapshot_lists_every_stream() {
        let streams = StreamManager::new(5);
        assert_eq!(streams.snapshot().counters.len(), StreamName::ALL.len());
    }

    #[test]
    fn test_events_record_reseeds() {
        let mut streams = StreamManager::new(5);
        streams.advance_floor();
        assert_eq!(
            streams.events().events_of_type("StreamReseeded").len(),
            StreamName::PER_FLOOR.len()
        );
    }
}
