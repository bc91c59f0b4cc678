//! Rewards command implementation
//!
//! Pools come from a JSON file shaped like
//! `{"common": [...], "uncommon": [...], "rare": [...]}`.

use anyhow::{Context, Result};
use spire_seed_core::rewards::{
    generate_rewards, upgrade_chance_for, PityTimer, RarityPolicy, RarityPools, Reward,
    RewardConfig,
};
use spire_seed_core::rng::StreamRng;
use std::process::ExitCode;

use super::{read_file, resolve_seed};
use crate::cli_args::RewardKind;

pub struct RewardArgs<'a> {
    pub seed: &'a str,
    pub pools: &'a str,
    pub kind: RewardKind,
    pub card_counter: u32,
    pub count: usize,
    pub act: u8,
    pub ascension: u8,
    pub json: bool,
}

pub fn run(args: &RewardArgs<'_>) -> Result<ExitCode> {
    let seed = resolve_seed(args.seed)?;
    let pools: RarityPools<String> = serde_json::from_str(&read_file(args.pools)?)
        .with_context(|| format!("Invalid pools file {}", args.pools))?;

    let config = RewardConfig {
        policy: match args.kind {
            RewardKind::Normal => RarityPolicy::normal(),
            RewardKind::Elite => RarityPolicy::elite(),
            RewardKind::Shop => RarityPolicy::shop(),
        },
        upgrade_chance: Some(upgrade_chance_for(args.act, args.ascension)),
        ..RewardConfig::default()
    };

    let mut card = StreamRng::with_counter(seed, args.card_counter);
    let mut pity = PityTimer::default();
    let mut batches: Vec<Vec<Reward<String>>> = Vec::with_capacity(args.count);
    for batch in 0..args.count {
        let rewards = generate_rewards(&mut card, &pools, &mut pity, &config)
            .with_context(|| format!("Reward batch {} failed", batch + 1))?;
        batches.push(rewards);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&batches)?);
        return Ok(ExitCode::SUCCESS);
    }

    for (index, rewards) in batches.iter().enumerate() {
        let shown: Vec<String> = rewards
            .iter()
            .map(|r| {
                let plus = if r.upgraded { "+" } else { "" };
                format!("{}{} ({:?})", r.item, plus, r.rarity)
            })
            .collect();
        println!("{:>3}: {}", index + 1, shown.join(", "));
    }
    println!(
        "card counter {}, pity offset {}",
        card.counter(),
        pity.offset()
    );
    Ok(ExitCode::SUCCESS)
}
