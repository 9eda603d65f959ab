use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Instant;

use market_entry_core::profiles::{sector_insight, RankingWeightOverrides, RankingWeights, SectorRef};
use market_entry_core::ranking::{
    rank_sector, sector_summary, top_recommendations, RankingInput, DEFAULT_PODIUM_SIZE,
};
use market_entry_core::{with_metadata, CountryMetricSnapshot};

use super::{elapsed_us, parse_sector};
use crate::input;

/// Arguments for ranking a cohort
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct RankingsArgs {
    /// Path to JSON input: a ranking request or a bare array of snapshots
    #[arg(long)]
    pub input: Option<String>,

    /// Sector id or name (overrides the request's sector)
    #[arg(long)]
    pub sector: Option<String>,

    /// YAML or JSON file of ranking weight overrides
    #[arg(long)]
    pub weights: Option<String>,

    /// Market potential weight (percent)
    #[arg(long)]
    pub market_potential: Option<Decimal>,

    /// Economic stability weight (percent)
    #[arg(long)]
    pub economic_stability: Option<Decimal>,

    /// Logistics ease weight (percent)
    #[arg(long)]
    pub logistics_ease: Option<Decimal>,

    /// Sector growth weight (percent)
    #[arg(long)]
    pub sector_growth: Option<Decimal>,
}

/// Arguments for the podium view
#[derive(Args)]
pub struct TopArgs {
    /// Path to JSON input: a bare array of snapshots or a ranking request
    #[arg(long)]
    pub input: Option<String>,

    /// Number of countries to return
    #[arg(long, default_value_t = DEFAULT_PODIUM_SIZE)]
    pub limit: usize,
}

/// Arguments for the sector statistics view
#[derive(Args)]
pub struct SectorSummaryArgs {
    /// Path to JSON input: a bare array of snapshots or a ranking request
    #[arg(long)]
    pub input: Option<String>,

    /// Sector id or name, adds the archetype insight (overrides the request's sector)
    #[arg(long)]
    pub sector: Option<String>,
}

/// Either a full ranking request or just the cohort.
#[derive(Deserialize)]
#[serde(untagged)]
enum CohortDocument {
    Request(RankingInput),
    Cohort(Vec<CountryMetricSnapshot>),
}

impl CohortDocument {
    fn into_parts(self) -> (Option<SectorRef>, Vec<CountryMetricSnapshot>, RankingWeightOverrides) {
        match self {
            CohortDocument::Request(req) => (Some(req.sector), req.cohort, req.weights),
            CohortDocument::Cohort(cohort) => (None, cohort, RankingWeightOverrides::default()),
        }
    }
}

pub fn run_rankings(args: RankingsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let document: CohortDocument = input::load(args.input.as_deref(), "country cohort")?;
    let (doc_sector, cohort, doc_weights) = document.into_parts();

    let sector = match args.sector.as_deref() {
        Some(raw) => parse_sector(raw),
        None => doc_sector.ok_or("--sector is required when the input is a bare cohort")?,
    };

    // request < weights file < flags
    let file_weights: RankingWeightOverrides = match args.weights {
        Some(ref path) => input::file::read_config(path)?,
        None => RankingWeightOverrides::default(),
    };
    let flag_weights = RankingWeightOverrides {
        market_potential: args.market_potential,
        economic_stability: args.economic_stability,
        logistics_ease: args.logistics_ease,
        sector_growth: args.sector_growth,
    };
    let overrides = doc_weights.merged_with(file_weights).merged_with(flag_weights);

    let mut warnings = Vec::new();
    let resolved = RankingWeights::resolve(&overrides);
    if resolved.total() != dec!(100) {
        warnings.push(format!(
            "Ranking weights sum to {}, not 100; totals are clamped to [0, 100]",
            resolved.total()
        ));
    }
    if cohort.is_empty() {
        warnings.push("Empty cohort; nothing to rank".into());
    }

    let request = RankingInput {
        sector,
        cohort,
        weights: overrides,
    };
    let report = rank_sector(&request);

    let output = with_metadata(
        "Cohort-normalised composites (market potential, economic stability, \
         logistics ease, sector growth) combined with percentage weights",
        &json!({ "weights": resolved, "tie_break": "alphabetical by name" }),
        warnings,
        elapsed_us(start),
        report,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_top(args: TopArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let document: CohortDocument = input::load(args.input.as_deref(), "country cohort")?;
    let (_, cohort, _) = document.into_parts();

    let podium = top_recommendations(&cohort, args.limit);

    let output = with_metadata(
        "Suitability = growth 40% + logistics 30% + purchasing power 30%",
        &json!({ "limit": args.limit }),
        Vec::new(),
        elapsed_us(start),
        podium,
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_sector_summary(args: SectorSummaryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let document: CohortDocument = input::load(args.input.as_deref(), "country cohort")?;
    let (doc_sector, cohort, _) = document.into_parts();
    let sector = args.sector.as_deref().map(parse_sector).or(doc_sector);

    let mut warnings = Vec::new();
    if cohort.is_empty() {
        warnings.push("Empty cohort; statistics are zero".into());
    }
    let stats = sector_summary(&cohort);
    let insight = sector.as_ref().map(sector_insight);

    let output = with_metadata(
        "Cohort statistics: mean sector growth, summed imports, distinct countries, \
         region with the largest import volume",
        &json!({ "sector": sector }),
        warnings,
        elapsed_us(start),
        json!({ "stats": stats, "insight": insight }),
    );
    Ok(serde_json::to_value(output)?)
}
