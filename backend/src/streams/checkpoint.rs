//! Checkpoint - Save/Load Stream State
//!
//! A run's persisted stream state is deliberately small: the run seed,
//! the run position, and the counters of the 7 persistent streams. The
//! per-floor and per-act streams are never written; on load they are
//! rebuilt from `seed + floor` / `seed + act offset` at counter 0.
//!
//! # Critical Invariants
//!
//! - **Replay, not raw state**: generator words are never serialized.
//! - **Persistent streams only**: a checkpoint naming a per-floor or
//!   per-act stream is rejected.

use super::manager::{CounterSnapshot, StreamError, StreamManager};
use super::{act_seed_offset, SeedingRule, StreamName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised while loading or validating a checkpoint
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Checkpoint serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Stream '{0}' is not persisted; it is rebuilt from the run position")]
    NonPersistentStream(StreamName),

    #[error("Unknown act {0} in checkpoint")]
    UnknownAct(u8),

    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),
}

/// Persisted stream state of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCheckpoint {
    /// Run seed (CRITICAL: every stream derives from it)
    pub seed: i64,

    pub floor: u32,

    pub act: u8,

    /// Counters of the persistent streams
    pub counters: BTreeMap<StreamName, u32>,
}

impl RunCheckpoint {
    /// Check the checkpoint only names persistent streams and a known act
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if act_seed_offset(self.act).is_none() {
            return Err(CheckpointError::UnknownAct(self.act));
        }
        if let Some(name) = self
            .counters
            .keys()
            .find(|name| name.seeding_rule() != SeedingRule::Persistent)
        {
            return Err(CheckpointError::NonPersistentStream(*name));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a checkpoint
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: RunCheckpoint = serde_json::from_str(json)?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}

impl StreamManager {
    /// Capture the persisted subset of this manager's state
    pub fn to_checkpoint(&self) -> RunCheckpoint {
        RunCheckpoint {
            seed: self.seed(),
            floor: self.floor(),
            act: self.act(),
            counters: StreamName::PERSISTENT
                .iter()
                .map(|&name| (name, self.counter(name)))
                .collect(),
        }
    }

    /// Rebuild a manager from a persisted checkpoint
    ///
    /// Persistent streams replay their counters; every other stream
    /// starts fresh from its seeding rule.
    pub fn from_checkpoint(checkpoint: &RunCheckpoint) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        let snapshot = CounterSnapshot {
            floor: checkpoint.floor,
            act: checkpoint.act,
            counters: checkpoint.counters.clone(),
        };
        Ok(StreamManager::restore(checkpoint.seed, &snapshot)?)
    }
}
