//! Named random streams
//!
//! The game keeps 13 independent streams. Each one has a fixed seeding
//! rule that decides when it is replaced by a fresh stream:
//!
//! - **Persistent** (7): seeded once from the run seed, live all run.
//! - **Per-floor** (5): replaced on every floor with `seed + floor`.
//! - **Per-act** (1): the map stream, replaced on every act with
//!   `seed + ACT_SEED_OFFSETS[act - 1]`.
//!
//! Replacement is always a brand-new stream at counter 0; streams are
//! never advanced to emulate a reseed.

pub mod checkpoint;
pub mod manager;

pub use checkpoint::{CheckpointError, RunCheckpoint};
pub use manager::{CounterSnapshot, StreamError, StreamManager};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Map-stream seed offsets for acts 1 through 4
pub const ACT_SEED_OFFSETS: [i64; 4] = [1, 200, 600, 1200];

/// Card-stream checkpoints the act transition snaps to
pub const ACT_SNAP_CHECKPOINTS: [u32; 3] = [250, 500, 750];

/// When a stream is replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedingRule {
    /// `seed`, once per run
    Persistent,
    /// `seed + floor`, every floor
    PerFloor,
    /// `seed + ACT_SEED_OFFSETS[act - 1]`, every act
    PerAct,
}

/// Identifier of one of the 13 streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamName {
    Card,
    Monster,
    Event,
    Relic,
    Treasure,
    Potion,
    Merchant,
    MonsterHp,
    Ai,
    Shuffle,
    CardRandom,
    Misc,
    Map,
}

impl StreamName {
    /// All streams, in storage order
    pub const ALL: [StreamName; 13] = [
        StreamName::Card,
        StreamName::Monster,
        StreamName::Event,
        StreamName::Relic,
        StreamName::Treasure,
        StreamName::Potion,
        StreamName::Merchant,
        StreamName::MonsterHp,
        StreamName::Ai,
        StreamName::Shuffle,
        StreamName::CardRandom,
        StreamName::Misc,
        StreamName::Map,
    ];

    /// Streams whose counters are written to save files
    pub const PERSISTENT: [StreamName; 7] = [
        StreamName::Card,
        StreamName::Monster,
        StreamName::Event,
        StreamName::Relic,
        StreamName::Treasure,
        StreamName::Potion,
        StreamName::Merchant,
    ];

    /// Streams replaced on every floor
    pub const PER_FLOOR: [StreamName; 5] = [
        StreamName::MonsterHp,
        StreamName::Ai,
        StreamName::Shuffle,
        StreamName::CardRandom,
        StreamName::Misc,
    ];

    pub fn seeding_rule(self) -> SeedingRule {
        match self {
            StreamName::Card
            | StreamName::Monster
            | StreamName::Event
            | StreamName::Relic
            | StreamName::Treasure
            | StreamName::Potion
            | StreamName::Merchant => SeedingRule::Persistent,
            StreamName::MonsterHp
            | StreamName::Ai
            | StreamName::Shuffle
            | StreamName::CardRandom
            | StreamName::Misc => SeedingRule::PerFloor,
            StreamName::Map => SeedingRule::PerAct,
        }
    }

    /// Position in `ALL`
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StreamName::Card => "card",
            StreamName::Monster => "monster",
            StreamName::Event => "event",
            StreamName::Relic => "relic",
            StreamName::Treasure => "treasure",
            StreamName::Potion => "potion",
            StreamName::Merchant => "merchant",
            StreamName::MonsterHp => "monster_hp",
            StreamName::Ai => "ai",
            StreamName::Shuffle => "shuffle",
            StreamName::CardRandom => "card_random",
            StreamName::Misc => "misc",
            StreamName::Map => "map",
        }
    }
}

impl fmt::Display for StreamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        StreamName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == wanted)
            .ok_or_else(|| format!("unknown stream '{}'", s))
    }
}

/// Map-stream seed offset for a 1-indexed act
pub fn act_seed_offset(act: u8) -> Option<i64> {
    let index = usize::from(act).checked_sub(1)?;
    ACT_SEED_OFFSETS.get(index).copied()
}

/// Checkpoint the card counter snaps to on an act transition
///
/// `None` when the counter is zero, sits exactly on a checkpoint, or is
/// at/above the last one.
pub fn act_snap_target(counter: u32) -> Option<u32> {
    let mut lower = 0;
    for &checkpoint in &ACT_SNAP_CHECKPOINTS {
        if counter > lower && counter < checkpoint {
            return Some(checkpoint);
        }
        lower = checkpoint;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_partitions_streams() {
        let persistent = StreamName::ALL
            .iter()
            .filter(|s| s.seeding_rule() == SeedingRule::Persistent)
            .count();
        let per_floor = StreamName::ALL
            .iter()
            .filter(|s| s.seeding_rule() == SeedingRule::PerFloor)
            .count();
        assert_eq!(persistent, StreamName::PERSISTENT.len());
        assert_eq!(per_floor, StreamName::PER_FLOOR.len());
        assert_eq!(StreamName::Map.seeding_rule(), SeedingRule::PerAct);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, name) in StreamName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
        }
    }

    #[test]
    fn test_act_offsets() {
        assert_eq!(act_seed_offset(0), None);
        assert_eq!(act_seed_offset(1), Some(1));
        assert_eq!(act_seed_offset(3), Some(600));
        assert_eq!(act_seed_offset(4), Some(1200));
        assert_eq!(act_seed_offset(5), None);
    }

    #[test]
    fn test_snap_table() {
        let cases = [
            (0, None),
            (1, Some(250)),
            (120, Some(250)),
            (249, Some(250)),
            (250, None),
            (251, Some(500)),
            (400, Some(500)),
            (499, Some(500)),
            (500, None),
            (750, None),
            (751, None),
        ];
        for (counter, expected) in cases {
            assert_eq!(act_snap_target(counter), expected, "counter {}", counter);
        }
    }

    #[test]
    fn test_names_serialize_snake_case() {
        let json = serde_json::to_string(&StreamName::CardRandom).unwrap();
        assert_eq!(json, "\"card_random\"");
        assert_eq!(StreamName::MonsterHp.to_string(), "monster_hp");
    }

    #[test]
    fn test_parse_stream_names() {
        assert_eq!("card-random".parse::<StreamName>(), Ok(StreamName::CardRandom));
        assert_eq!(" MAP ".parse::<StreamName>(), Ok(StreamName::Map));
        assert!("deck".parse::<StreamName>().is_err());
    }
}
