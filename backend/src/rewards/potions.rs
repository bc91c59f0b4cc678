//! Potion rewards
//!
//! Potion drops use their own pity-style timer: each combat without a drop
//! raises the next drop chance, each drop lowers it.

use super::{Rarity, RewardError};
use crate::rng::StreamRng;
use serde::{Deserialize, Serialize};

/// Potion rarity thresholds; the remainder is rare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionPolicy {
    pub common_pct: i32,
    pub uncommon_pct: i32,
    /// Catalogue redraws allowed while looking for a potion of the rarity
    pub max_redraws: u32,
}

impl Default for PotionPolicy {
    fn default() -> Self {
        Self {
            common_pct: 65,
            uncommon_pct: 25,
            max_redraws: 1000,
        }
    }
}

pub fn roll_potion_rarity(rng: &mut StreamRng, policy: &PotionPolicy) -> Rarity {
    let roll = rng.draw_int_inclusive(0, 99);
    if roll < policy.common_pct {
        Rarity::Common
    } else if roll < policy.common_pct + policy.uncommon_pct {
        Rarity::Uncommon
    } else {
        Rarity::Rare
    }
}

/// Draw catalogue entries until one of `rarity` comes up
///
/// # Errors
/// - `EmptyPool` if the catalogue holds no potion of that rarity (checked
///   before drawing).
/// - `RedrawBudgetExhausted` after `policy.max_redraws` misses.
pub fn random_potion_of_rarity<T: Clone>(
    rng: &mut StreamRng,
    catalogue: &[(T, Rarity)],
    rarity: Rarity,
    policy: &PotionPolicy,
) -> Result<T, RewardError> {
    if !catalogue.iter().any(|(_, r)| *r == rarity) {
        return Err(RewardError::EmptyPool(rarity));
    }

    let last = catalogue.len() as i32 - 1;
    let mut attempts = 0;
    loop {
        let (potion, potion_rarity) = &catalogue[rng.draw_int_inclusive(0, last) as usize];
        if *potion_rarity == rarity {
            return Ok(potion.clone());
        }
        attempts += 1;
        if attempts > policy.max_redraws {
            return Err(RewardError::RedrawBudgetExhausted { rarity, attempts });
        }
    }
}

/// Drop chance parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionDropConfig {
    pub base_chance: i32,
    pub step: i32,
}

impl Default for PotionDropConfig {
    fn default() -> Self {
        Self {
            base_chance: 40,
            step: 10,
        }
    }
}

/// Potion drop timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PotionDropTimer {
    config: PotionDropConfig,
    modifier: i32,
}

impl PotionDropTimer {
    pub fn new(config: PotionDropConfig) -> Self {
        Self {
            config,
            modifier: 0,
        }
    }

    pub fn with_modifier(config: PotionDropConfig, modifier: i32) -> Self {
        Self { config, modifier }
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Current drop chance in percent
    pub fn chance(&self) -> i32 {
        self.config.base_chance + self.modifier
    }

    /// Roll for a drop and update the timer
    pub fn roll(&mut self, rng: &mut StreamRng) -> bool {
        let dropped = rng.draw_int_inclusive(0, 99) < self.chance();
        if dropped {
            self.modifier -= self.config.step;
        } else {
            self.modifier += self.config.step;
        }
        dropped
    }
}
