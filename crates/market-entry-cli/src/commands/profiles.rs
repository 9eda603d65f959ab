use clap::Args;
use serde_json::{json, Value};
use std::time::Instant;

use market_entry_core::profiles::{all_archetypes, resolve_archetype, sector_insight};
use market_entry_core::with_metadata;

use super::{elapsed_us, parse_sector};

/// Arguments for resolving one sector
#[derive(Args)]
pub struct ArchetypeArgs {
    /// Sector id or free-text sector name
    #[arg(long)]
    pub sector: String,
}

pub fn run_archetype(args: ArchetypeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let sector = parse_sector(&args.sector);
    let archetype = resolve_archetype(&sector);

    let result = json!({
        "sector": sector,
        "archetype": archetype,
        "weights": archetype.profile().weights,
        "insight": sector_insight(&sector),
    });

    let output = with_metadata(
        "Sector id ranges, then keyword match on the sector name; balanced fallback",
        &json!({ "sector": sector }),
        Vec::new(),
        elapsed_us(start),
        result,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_archetypes() -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let output = with_metadata(
        "Static archetype registry",
        &json!({}),
        Vec::new(),
        elapsed_us(start),
        all_archetypes(),
    );
    Ok(serde_json::to_value(output)?)
}
