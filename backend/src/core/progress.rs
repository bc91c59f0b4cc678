//! Run position tracking
//!
//! A run advances through floors (rooms climbed) and acts (dungeons).
//! Per-floor and per-act streams are seeded from these indices, so the
//! position is the other half of a stream's identity next to the seed.

use serde::{Deserialize, Serialize};

/// First act of a run
pub const FIRST_ACT: u8 = 1;

/// Current floor and act
///
/// # Example
/// ```
/// use spire_seed_core::RunProgress;
///
/// let mut progress = RunProgress::new();
/// assert_eq!(progress.floor(), 0);
/// assert_eq!(progress.act(), 1);
///
/// progress.advance_floor();
/// assert_eq!(progress.floor(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunProgress {
    floor: u32,
    act: u8,
}

impl RunProgress {
    /// Run start: floor 0 of act 1
    pub fn new() -> Self {
        Self {
            floor: 0,
            act: FIRST_ACT,
        }
    }

    /// Position loaded from a save
    ///
    /// # Panics
    /// Panics if `act` is 0 (acts are 1-indexed).
    pub fn at(floor: u32, act: u8) -> Self {
        assert!(act >= FIRST_ACT, "act must be at least 1");
        Self { floor, act }
    }

    /// Move to the next floor and return it
    pub fn advance_floor(&mut self) -> u32 {
        self.floor += 1;
        self.floor
    }

    /// Move to the next act and return it
    pub fn advance_act(&mut self) -> u8 {
        self.act += 1;
        self.act
    }

    /// Floors climbed since run start
    pub fn floor(&self) -> u32 {
        self.floor
    }

    /// Current act (1-indexed)
    pub fn act(&self) -> u8 {
        self.act
    }
}

impl Default for RunProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "act must be at least 1")]
    fn test_zero_act_panics() {
        RunProgress::at(3, 0);
    }

    #[test]
    fn test_advance_returns_new_position() {
        let mut progress = RunProgress::at(16, 1);
        assert_eq!(progress.advance_floor(), 17);
        assert_eq!(progress.advance_act(), 2);
        assert_eq!(progress, RunProgress::at(17, 2));
    }
}
