//! Relic pools
//!
//! Relic pools are shuffled once at run start and then consumed from the
//! front, so every relic reward is fixed by the relic stream's first five
//! draws plus the tier rolls made since.

use crate::rng::StreamRng;
use crate::shuffle::shuffle_seeded;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Relic tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelicTier {
    Common,
    Uncommon,
    Rare,
    Shop,
    Boss,
}

/// Tier roll thresholds; the remainder is rare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelicTierPolicy {
    pub common_pct: i32,
    pub uncommon_pct: i32,
}

impl Default for RelicTierPolicy {
    fn default() -> Self {
        Self {
            common_pct: 50,
            uncommon_pct: 33,
        }
    }
}

/// Roll a random relic tier (common, uncommon or rare)
pub fn roll_relic_tier(rng: &mut StreamRng, policy: &RelicTierPolicy) -> RelicTier {
    let roll = rng.draw_int_inclusive(0, 99);
    if roll < policy.common_pct {
        RelicTier::Common
    } else if roll < policy.common_pct + policy.uncommon_pct {
        RelicTier::Uncommon
    } else {
        RelicTier::Rare
    }
}

/// Shuffled relic pools, consumed from the front
#[derive(Debug, Clone, PartialEq)]
pub struct RelicPools<T> {
    common: VecDeque<T>,
    uncommon: VecDeque<T>,
    rare: VecDeque<T>,
    shop: VecDeque<T>,
    boss: VecDeque<T>,
}

impl<T> RelicPools<T> {
    /// Shuffle catalog order pools with the relic stream
    ///
    /// One `shuffle_seeded` per tier in the order common, uncommon, rare,
    /// shop, boss (five counted draws).
    pub fn shuffled(
        rng: &mut StreamRng,
        mut common: Vec<T>,
        mut uncommon: Vec<T>,
        mut rare: Vec<T>,
        mut shop: Vec<T>,
        mut boss: Vec<T>,
    ) -> Self {
        for pool in [&mut common, &mut uncommon, &mut rare, &mut shop, &mut boss] {
            shuffle_seeded(pool, rng);
        }
        Self {
            common: common.into(),
            uncommon: uncommon.into(),
            rare: rare.into(),
            shop: shop.into(),
            boss: boss.into(),
        }
    }

    /// Take the next relic of a tier
    ///
    /// An exhausted common pool falls back to uncommon, and uncommon to
    /// rare. Shop and boss pools have no fallback.
    pub fn take(&mut self, tier: RelicTier) -> Option<T> {
        let next = self.pool_mut(tier).pop_front();
        match (next, tier) {
            (Some(relic), _) => Some(relic),
            (None, RelicTier::Common) => self.take(RelicTier::Uncommon),
            (None, RelicTier::Uncommon) => self.take(RelicTier::Rare),
            (None, _) => None,
        }
    }

    /// Upcoming relics of a tier, in the order they will be taken
    pub fn peek(&self, tier: RelicTier) -> impl Iterator<Item = &T> {
        self.pool(tier).iter()
    }

    pub fn remaining(&self, tier: RelicTier) -> usize {
        self.pool(tier).len()
    }

    /// Drop a relic wherever it sits (already obtained another way)
    pub fn remove(&mut self, relic: &T) -> bool
    where
        T: PartialEq,
    {
        for tier in [
            RelicTier::Common,
            RelicTier::Uncommon,
            RelicTier::Rare,
            RelicTier::Shop,
            RelicTier::Boss,
        ] {
            let pool = self.pool_mut(tier);
            if let Some(position) = pool.iter().position(|r| r == relic) {
                pool.remove(position);
                return true;
            }
        }
        false
    }

    fn pool(&self, tier: RelicTier) -> &VecDeque<T> {
        match tier {
            RelicTier::Common => &self.common,
            RelicTier::Uncommon => &self.uncommon,
            RelicTier::Rare => &self.rare,
            RelicTier::Shop => &self.shop,
            RelicTier::Boss => &self.boss,
        }
    }

    fn pool_mut(&mut self, tier: RelicTier) -> &mut VecDeque<T> {
        match tier {
            RelicTier::Common => &mut self.common,
            RelicTier::Uncommon => &mut self.uncommon,
            RelicTier::Rare => &mut self.rare,
            RelicTier::Shop => &mut self.shop,
            RelicTier::Boss => &mut self.boss,
        }
    }
}
