use clap::Args;
use serde_json::{json, Value};
use std::time::Instant;

use market_entry_core::simulator::{simulate_all, strategic_playbook};
use market_entry_core::{with_metadata, CountryMetricSnapshot};

use super::elapsed_us;
use crate::input;

/// Arguments for the metric simulator
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to a JSON country snapshot
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the strategic playbook
#[derive(Args)]
pub struct PlaybookArgs {
    /// Path to a JSON country snapshot
    #[arg(long)]
    pub input: Option<String>,
}

const SIMULATION_NOTE: &str =
    "Simulated values blend real inputs with a seeded jitter; they are estimates, not observed data";

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let snapshot: CountryMetricSnapshot = input::load(args.input.as_deref(), "country snapshot")?;
    let metrics = simulate_all(&snapshot);

    let output = with_metadata(
        "Deterministic per (country id, metric key) simulation with bounded jitter",
        &json!({ "country_id": snapshot.country_id, "region_id": snapshot.region_id }),
        vec![SIMULATION_NOTE.to_string()],
        elapsed_us(start),
        metrics,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_playbook(args: PlaybookArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let snapshot: CountryMetricSnapshot = input::load(args.input.as_deref(), "country snapshot")?;
    let metrics = simulate_all(&snapshot);
    let calls = strategic_playbook(&snapshot, &metrics);

    let output = with_metadata(
        "Seven rule-based go-to-market calls over real and simulated metrics",
        &json!({ "metrics": metrics }),
        vec![SIMULATION_NOTE.to_string()],
        elapsed_us(start),
        calls.to_vec(),
    );
    Ok(serde_json::to_value(output)?)
}
