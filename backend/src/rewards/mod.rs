//! Reward generation
//!
//! Card rewards roll a rarity per slot, then pick a card from that
//! rarity's pool. A pity timer biases later rolls toward rare after a run
//! of commons.
//!
//! # Draw order (card rewards)
//!
//! 1. For each slot: one rarity roll (`draw_int_inclusive(0, 99)`), then
//!    one pool draw per attempt until the pick is not already in the batch.
//! 2. After all slots: one upgrade draw per non-rare card, when an upgrade
//!    chance is configured. The draw is made even for a 0.0 chance.
//!
//! Pools are opaque ordered collections supplied by the content catalog;
//! this module only indexes into them.
//!
//! # Example
//!
//! ```rust
//! use spire_seed_core::rewards::{generate_rewards, PityTimer, RarityPools, RewardConfig};
//! use spire_seed_core::rng::StreamRng;
//!
//! let pools = RarityPools {
//!     common: vec!["Strike+", "Cleave", "Anger", "Clothesline"],
//!     uncommon: vec!["Carnage", "Uppercut", "Whirlwind"],
//!     rare: vec!["Offering", "Reaper"],
//! };
//! let mut rng = StreamRng::new(64_004_406_012_856);
//! let mut pity = PityTimer::default();
//!
//! let rewards = generate_rewards(&mut rng, &pools, &mut pity, &RewardConfig::default()).unwrap();
//! assert_eq!(rewards.len(), 3);
//! ```

pub mod potions;
pub mod relics;

pub use potions::{
    random_potion_of_rarity, roll_potion_rarity, PotionDropConfig, PotionDropTimer, PotionPolicy,
};
pub use relics::{roll_relic_tier, RelicPools, RelicTier, RelicTierPolicy};

use crate::rng::StreamRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from reward generation
#[derive(Debug, Error, PartialEq)]
pub enum RewardError {
    #[error("Pool for {0:?} is empty")]
    EmptyPool(Rarity),

    #[error("No unique {rarity:?} pick after {attempts} redraws")]
    RedrawBudgetExhausted { rarity: Rarity, attempts: u32 },
}

/// Item rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
}

/// Rarity thresholds of one reward context
///
/// Injected per call; a roll `v` is rare below `rare_pct`, uncommon below
/// `rare_pct + uncommon_pct`, common otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityPolicy {
    pub rare_pct: i32,
    pub uncommon_pct: i32,
    /// Whether the pity offset biases and is updated by this context
    pub use_pity: bool,
}

impl RarityPolicy {
    /// Rewards after a normal combat
    pub fn normal() -> Self {
        Self {
            rare_pct: 3,
            uncommon_pct: 37,
            use_pity: true,
        }
    }

    /// Rewards after an elite combat
    pub fn elite() -> Self {
        Self {
            rare_pct: 10,
            uncommon_pct: 40,
            use_pity: true,
        }
    }

    /// Merchant stock; ignores the pity offset entirely
    pub fn shop() -> Self {
        Self {
            rare_pct: 9,
            uncommon_pct: 37,
            use_pity: false,
        }
    }
}

impl Default for RarityPolicy {
    fn default() -> Self {
        Self::normal()
    }
}

/// Pity timer parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PityConfig {
    /// Offset after a rare (and at run start)
    pub start: i32,
    /// Lowest the offset can fall
    pub floor: i32,
    /// Decrement per common
    pub step: i32,
}

impl Default for PityConfig {
    fn default() -> Self {
        Self {
            start: 5,
            floor: -40,
            step: 1,
        }
    }
}

/// Pity timer state, threaded explicitly through reward calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PityTimer {
    config: PityConfig,
    offset: i32,
}

impl PityTimer {
    pub fn new(config: PityConfig) -> Self {
        Self {
            config,
            offset: config.start,
        }
    }

    /// Timer at a saved offset
    pub fn with_offset(config: PityConfig, offset: i32) -> Self {
        Self {
            config,
            offset: offset.max(config.floor),
        }
    }

    /// Value added to every rarity roll
    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn config(&self) -> PityConfig {
        self.config
    }

    /// Update after a roll: rare resets, uncommon keeps, common decrements
    pub fn record(&mut self, rarity: Rarity) {
        match rarity {
            Rarity::Rare => self.offset = self.config.start,
            Rarity::Uncommon => {}
            Rarity::Common => {
                self.offset = (self.offset - self.config.step).max(self.config.floor);
            }
        }
    }

    /// Commons needed from the start offset until the floor is reached
    pub fn steps_to_floor(&self) -> u32 {
        if self.config.step <= 0 {
            return 0;
        }
        let distance = (self.config.start - self.config.floor).max(0);
        ((distance + self.config.step - 1) / self.config.step) as u32
    }
}

impl Default for PityTimer {
    fn default() -> Self {
        Self::new(PityConfig::default())
    }
}

/// Roll a rarity and update the pity timer
///
/// One counted draw. With `use_pity` off the offset is neither added nor
/// changed.
pub fn roll_rarity(rng: &mut StreamRng, policy: &RarityPolicy, pity: &mut PityTimer) -> Rarity {
    let offset = if policy.use_pity { pity.offset() } else { 0 };
    let roll = rng.draw_int_inclusive(0, 99) + offset;

    let rarity = if roll < policy.rare_pct {
        Rarity::Rare
    } else if roll < policy.rare_pct + policy.uncommon_pct {
        Rarity::Uncommon
    } else {
        Rarity::Common
    };

    if policy.use_pity {
        pity.record(rarity);
    }
    rarity
}

/// Reward pools per rarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityPools<T> {
    pub common: Vec<T>,
    pub uncommon: Vec<T>,
    pub rare: Vec<T>,
}

impl<T> RarityPools<T> {
    pub fn pool(&self, rarity: Rarity) -> &[T] {
        match rarity {
            Rarity::Common => &self.common,
            Rarity::Uncommon => &self.uncommon,
            Rarity::Rare => &self.rare,
        }
    }
}

/// Card reward configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    pub policy: RarityPolicy,
    /// Cards offered
    pub count: usize,
    /// Per-card upgrade chance for non-rare cards; `None` skips the draw
    pub upgrade_chance: Option<f32>,
    /// Duplicate redraws allowed per slot before giving up
    pub max_redraws: u32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            policy: RarityPolicy::normal(),
            count: 3,
            upgrade_chance: Some(0.0),
            max_redraws: 1000,
        }
    }
}

/// Upgrade chance of combat card rewards for an act and ascension level
pub fn upgrade_chance_for(act: u8, ascension: u8) -> f32 {
    let base = match act {
        0 | 1 => 0.0,
        2 => 0.25,
        _ => 0.5,
    };
    if ascension >= 12 {
        base / 2.0
    } else {
        base
    }
}

/// One offered item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward<T> {
    pub item: T,
    pub rarity: Rarity,
    pub upgraded: bool,
}

/// Generate a batch of distinct rewards
///
/// # Errors
/// - `EmptyPool` when a rolled rarity has nothing to pick from. The roll
///   has been drawn; the pool draw has not.
/// - `RedrawBudgetExhausted` when a slot keeps picking items already in
///   the batch.
pub fn generate_rewards<T: Clone + PartialEq>(
    rng: &mut StreamRng,
    pools: &RarityPools<T>,
    pity: &mut PityTimer,
    config: &RewardConfig,
) -> Result<Vec<Reward<T>>, RewardError> {
    let mut rewards: Vec<Reward<T>> = Vec::with_capacity(config.count);

    for _ in 0..config.count {
        let rarity = roll_rarity(rng, &config.policy, pity);
        let pool = pools.pool(rarity);
        if pool.is_empty() {
            return Err(RewardError::EmptyPool(rarity));
        }

        let mut attempts = 0;
        let item = loop {
            let candidate = &pool[rng.draw_int_inclusive(0, pool.len() as i32 - 1) as usize];
            if !rewards.iter().any(|r| &r.item == candidate) {
                break candidate.clone();
            }
            attempts += 1;
            if attempts > config.max_redraws {
                return Err(RewardError::RedrawBudgetExhausted { rarity, attempts });
            }
        };

        rewards.push(Reward {
            item,
            rarity,
            upgraded: false,
        });
    }

    if let Some(chance) = config.upgrade_chance {
        for reward in rewards.iter_mut().filter(|r| r.rarity != Rarity::Rare) {
            reward.upgraded = rng.draw_bool_chance(chance);
        }
    }

    Ok(rewards)
}
