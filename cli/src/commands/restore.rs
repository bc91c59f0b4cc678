//! Restore command implementation

use anyhow::{Context, Result};
use spire_seed_core::streams::{RunCheckpoint, StreamManager};
use spire_seed_core::Seed;
use std::process::ExitCode;

use super::read_file;

/// Load a checkpoint, rebuild every stream and print the snapshot
pub fn run(checkpoint_path: &str, show_events: bool) -> Result<ExitCode> {
    let checkpoint = RunCheckpoint::from_json(&read_file(checkpoint_path)?)
        .with_context(|| format!("Invalid checkpoint {}", checkpoint_path))?;
    let streams = StreamManager::from_checkpoint(&checkpoint)?;

    println!(
        "seed {} ({}), floor {}, act {}",
        Seed(streams.seed()),
        streams.seed(),
        streams.floor(),
        streams.act()
    );
    println!("{}", serde_json::to_string_pretty(&streams.snapshot())?);

    if show_events {
        println!("{}", serde_json::to_string_pretty(streams.events())?);
    }
    Ok(ExitCode::SUCCESS)
}
