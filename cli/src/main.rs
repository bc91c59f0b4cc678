//! spire-seed CLI - Command-line front end for the run RNG core
//!
//! Inspect seeds, trace stream draws, draw act maps, roll rewards and
//! restore checkpoints.

mod cli_args;
mod commands;

use clap::Parser;
use cli_args::{Cli, Commands};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed { input, json } => commands::seed::run(&input, json),
        Commands::Trace {
            seed,
            floor,
            act,
            draws,
            json,
        } => commands::trace::run(&seed, floor, act, draws, json),
        Commands::Map {
            seed,
            act,
            ascension,
            emerald,
            config,
            json,
        } => commands::map::run(&seed, act, ascension, emerald, config.as_deref(), json),
        Commands::Rewards {
            seed,
            pools,
            kind,
            card_counter,
            count,
            act,
            ascension,
            json,
        } => commands::rewards::run(&commands::rewards::RewardArgs {
            seed: &seed,
            pools: &pools,
            kind,
            card_counter,
            count,
            act,
            ascension,
            json,
        }),
        Commands::Restore { checkpoint, events } => commands::restore::run(&checkpoint, events),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
