//! CLI argument definitions for the spire-seed command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand, ValueEnum};

/// spire-seed - Deterministic run RNG explorer
#[derive(Parser)]
#[command(name = "spire-seed")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Card reward context
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum RewardKind {
    Normal,
    Elite,
    Shop,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Show the canonical text and integer value of a seed
    Seed {
        /// Seed text or signed decimal
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the first draws of every stream at a run position
    Trace {
        /// Seed text or signed decimal
        #[arg(short, long, allow_hyphen_values = true)]
        seed: String,

        /// Floor the per-floor streams are seeded for
        #[arg(long, default_value_t = 0)]
        floor: u32,

        /// Act the map stream is seeded for (1-4)
        #[arg(long, default_value_t = 1)]
        act: u8,

        /// Draws per stream
        #[arg(short = 'n', long, default_value_t = 5)]
        draws: usize,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate and draw an act map
    Map {
        /// Seed text or signed decimal
        #[arg(short, long, allow_hyphen_values = true)]
        seed: String,

        /// Act (1-4)
        #[arg(short, long, default_value_t = 1)]
        act: u8,

        /// Ascension level
        #[arg(long, default_value_t = 0)]
        ascension: u8,

        /// Place the emerald key on one elite
        #[arg(long)]
        emerald: bool,

        /// JSON file overriding map config fields
        #[arg(long)]
        config: Option<String>,

        /// Output the map as JSON instead of a drawing
        #[arg(long)]
        json: bool,
    },

    /// Roll card rewards from a pools file
    Rewards {
        /// Seed text or signed decimal
        #[arg(short, long, allow_hyphen_values = true)]
        seed: String,

        /// JSON file with `common`, `uncommon` and `rare` card lists
        #[arg(short, long)]
        pools: String,

        /// Reward context
        #[arg(long, value_enum, default_value_t = RewardKind::Normal)]
        kind: RewardKind,

        /// Card stream counter to start from
        #[arg(long, default_value_t = 0)]
        card_counter: u32,

        /// Reward batches to roll
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Act, for the upgrade chance
        #[arg(long, default_value_t = 1)]
        act: u8,

        /// Ascension level, for the upgrade chance
        #[arg(long, default_value_t = 0)]
        ascension: u8,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Rebuild streams from a saved checkpoint
    Restore {
        /// Checkpoint JSON file
        #[arg(short, long)]
        checkpoint: String,

        /// Also print the event log
        #[arg(long)]
        events: bool,
    },
}
