use clap::Args;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Instant;

use market_entry_core::decisions::{
    self, check_consistency, get_all_decisions, score_cohort, DecisionWeights,
};
use market_entry_core::{with_metadata, CountryMetricSnapshot};

use super::elapsed_us;
use crate::input;

/// Arguments for scoring the seven decisions
#[derive(Args)]
pub struct DecisionsArgs {
    /// Path to a JSON country snapshot
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the weighted global score
#[derive(Args)]
pub struct GlobalScoreArgs {
    /// Path to a JSON country snapshot
    #[arg(long)]
    pub input: Option<String>,

    /// YAML or JSON file of per-decision weights (camelCase keys)
    #[arg(long)]
    pub weights: Option<String>,
}

/// Arguments for the consistency check
#[derive(Args)]
pub struct ConsistencyArgs {
    /// Path to a JSON country snapshot
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for scoring a whole cohort
#[derive(Args)]
pub struct BulkScoreArgs {
    /// Path to JSON input: an array of snapshots or {"countries": [...]}
    #[arg(long)]
    pub input: Option<String>,

    /// YAML or JSON file of per-decision weights (camelCase keys)
    #[arg(long)]
    pub weights: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BulkDocument {
    Wrapped { countries: Vec<CountryMetricSnapshot> },
    Cohort(Vec<CountryMetricSnapshot>),
}

pub fn run_decisions(args: DecisionsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let snapshot: CountryMetricSnapshot = input::load(args.input.as_deref(), "country snapshot")?;
    let scores = get_all_decisions(&snapshot);

    let output = with_metadata(
        "Seven independent 0-100 decision scorers over normalised country metrics",
        &json!({ "country": snapshot.name, "verdict_thresholds": { "positive": 70, "neutral": 40 } }),
        Vec::new(),
        elapsed_us(start),
        scores.to_vec(),
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_global_score(args: GlobalScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let snapshot: CountryMetricSnapshot = input::load(args.input.as_deref(), "country snapshot")?;
    let weights: DecisionWeights = match args.weights {
        Some(ref path) => input::file::read_config(path)?,
        None => DecisionWeights::default(),
    };

    let result = decisions::calculate_global_score(&snapshot, Some(&weights));

    let mut warnings = Vec::new();
    if let Err(e) = check_consistency(&result, &weights) {
        warnings.push(e.to_string());
    }

    let output = with_metadata(
        "Weighted mean of the seven decision scores, rounded, with verdict buckets",
        &weights,
        warnings,
        elapsed_us(start),
        result,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_consistency(args: ConsistencyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let snapshot: CountryMetricSnapshot = input::load(args.input.as_deref(), "country snapshot")?;
    let report = decisions::validate_consistency(&snapshot)?;

    let output = with_metadata(
        "Equal-weight global score compared against the recomputed mean",
        &json!({ "tolerance": decisions::CONSISTENCY_TOLERANCE }),
        Vec::new(),
        elapsed_us(start),
        report,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_bulk_score(args: BulkScoreArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let document: BulkDocument = input::load(args.input.as_deref(), "country cohort")?;
    let cohort = match document {
        BulkDocument::Wrapped { countries } => countries,
        BulkDocument::Cohort(cohort) => cohort,
    };
    if cohort.is_empty() {
        return Err("at least one country snapshot is required".into());
    }
    let weights: DecisionWeights = match args.weights {
        Some(ref path) => input::file::read_config(path)?,
        None => DecisionWeights::default(),
    };

    let scored = score_cohort(&cohort, Some(&weights));

    let output = with_metadata(
        "Global score per country, sorted by score descending",
        &weights,
        Vec::new(),
        elapsed_us(start),
        scored,
    );
    Ok(serde_json::to_value(output)?)
}
