//! Trace command implementation
//!
//! Shows what every stream would produce next at a run position, using
//! `draw_int_inclusive(0, 99)` as the probe.

use anyhow::Result;
use spire_seed_core::streams::{CounterSnapshot, StreamManager, StreamName};
use std::collections::BTreeMap;
use std::process::ExitCode;

use super::resolve_seed;

pub fn run(seed: &str, floor: u32, act: u8, draws: usize, json_output: bool) -> Result<ExitCode> {
    let seed = resolve_seed(seed)?;
    let snapshot = CounterSnapshot {
        floor,
        act,
        counters: BTreeMap::new(),
    };
    let mut streams = StreamManager::restore(seed, &snapshot)?;

    let mut table: BTreeMap<StreamName, (i64, Vec<i32>)> = BTreeMap::new();
    for name in StreamName::ALL {
        let stream = streams.stream_mut(name);
        let stream_seed = stream.seed();
        let values = (0..draws)
            .map(|_| stream.draw_int_inclusive(0, 99))
            .collect();
        table.insert(name, (stream_seed, values));
    }

    if json_output {
        let output: BTreeMap<&str, serde_json::Value> = table
            .iter()
            .map(|(name, (stream_seed, values))| {
                (
                    name.as_str(),
                    serde_json::json!({ "seed": stream_seed, "draws": values }),
                )
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("floor {}, act {}", floor, act);
    for name in StreamName::ALL {
        if let Some((stream_seed, values)) = table.get(&name) {
            let rendered: Vec<String> = values.iter().map(|v| format!("{:>2}", v)).collect();
            println!(
                "{:<12} {:>20}  {}",
                name.as_str(),
                stream_seed,
                rendered.join(" ")
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}
