//! Seed command implementation

use anyhow::Result;
use serde_json::json;
use spire_seed_core::Seed;
use std::process::ExitCode;

use super::resolve_seed;

/// Print the canonical form and integer value of a seed
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let seed = Seed(resolve_seed(input)?);

    if json_output {
        let output = json!({
            "input": input,
            "canonical": seed.to_string(),
            "value": seed.value(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}  {}", seed, seed.value());
    }
    Ok(ExitCode::SUCCESS)
}
