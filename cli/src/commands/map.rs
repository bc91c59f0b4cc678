//! Map command implementation

use anyhow::{Context, Result};
use serde_json::json;
use spire_seed_core::map::{generate_for_act, MapConfig};
use std::process::ExitCode;

use super::{read_file, resolve_seed};

pub fn run(
    seed: &str,
    act: u8,
    ascension: u8,
    emerald: bool,
    config_path: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    let seed = resolve_seed(seed)?;

    let mut config = match config_path {
        Some(path) => serde_json::from_str::<MapConfig>(&read_file(path)?)
            .with_context(|| format!("Invalid map config in {}", path))?,
        None => MapConfig::default(),
    };
    if ascension > 0 {
        config.ascension = ascension;
    }
    config.emerald_elite |= emerald;

    let map = generate_for_act(seed, act, &config)
        .with_context(|| format!("Map generation failed for act {}", act))?;

    if json_output {
        let output = json!({
            "seed": seed,
            "act": act,
            "fingerprint": map.fingerprint(),
            "map": map,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", map.render());
        println!("fingerprint {}", map.fingerprint());
    }
    Ok(ExitCode::SUCCESS)
}
