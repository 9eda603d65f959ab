use napi::Result as NapiResult;
use napi_derive::napi;

use market_entry_core::decisions::DecisionWeights;
use market_entry_core::profiles::{RankingWeightOverrides, RankingWeights, SectorRef};
use market_entry_core::ranking::{RankingInput, DEFAULT_PODIUM_SIZE};
use market_entry_core::CountryMetricSnapshot;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_snapshot(snapshot_json: &str) -> NapiResult<CountryMetricSnapshot> {
    serde_json::from_str(snapshot_json).map_err(to_napi_error)
}

fn parse_cohort(cohort_json: &str) -> NapiResult<Vec<CountryMetricSnapshot>> {
    serde_json::from_str(cohort_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

#[napi]
pub fn get_all_decisions(snapshot_json: String) -> NapiResult<String> {
    let snapshot = parse_snapshot(&snapshot_json)?;
    let output = market_entry_core::get_all_decisions(&snapshot);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_global_score(snapshot_json: String, weights_json: Option<String>) -> NapiResult<String> {
    let snapshot = parse_snapshot(&snapshot_json)?;
    let weights: Option<DecisionWeights> = weights_json
        .map(|w| serde_json::from_str(&w))
        .transpose()
        .map_err(to_napi_error)?;
    let output = market_entry_core::calculate_global_score(&snapshot, weights.as_ref());
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn score_cohort(cohort_json: String, weights_json: Option<String>) -> NapiResult<String> {
    let cohort = parse_cohort(&cohort_json)?;
    let weights: Option<DecisionWeights> = weights_json
        .map(|w| serde_json::from_str(&w))
        .transpose()
        .map_err(to_napi_error)?;
    let output = market_entry_core::decisions::score_cohort(&cohort, weights.as_ref());
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn validate_consistency(snapshot_json: String) -> NapiResult<String> {
    let snapshot = parse_snapshot(&snapshot_json)?;
    let output = market_entry_core::decisions::validate_consistency(&snapshot).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[napi]
pub fn get_country_rankings(cohort_json: String, weights_json: Option<String>) -> NapiResult<String> {
    let cohort = parse_cohort(&cohort_json)?;
    let overrides: RankingWeightOverrides = match weights_json {
        Some(w) => serde_json::from_str(&w).map_err(to_napi_error)?,
        None => RankingWeightOverrides::default(),
    };
    let weights = RankingWeights::resolve(&overrides);
    let output = market_entry_core::get_country_rankings(&cohort, Some(&weights));
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn rank_sector(request_json: String) -> NapiResult<String> {
    let input: RankingInput = serde_json::from_str(&request_json).map_err(to_napi_error)?;
    let output = market_entry_core::ranking::rank_sector(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn top_recommendations(cohort_json: String, limit: Option<u32>) -> NapiResult<String> {
    let cohort = parse_cohort(&cohort_json)?;
    let limit = limit.map(|l| l as usize).unwrap_or(DEFAULT_PODIUM_SIZE);
    let output = market_entry_core::ranking::top_recommendations(&cohort, limit);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn sector_summary(cohort_json: String) -> NapiResult<String> {
    let cohort = parse_cohort(&cohort_json)?;
    let output = market_entry_core::ranking::sector_summary(&cohort);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Simulator
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate_metrics(snapshot_json: String) -> NapiResult<String> {
    let snapshot = parse_snapshot(&snapshot_json)?;
    let output = market_entry_core::simulator::simulate_all(&snapshot);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn strategic_playbook(snapshot_json: String) -> NapiResult<String> {
    let snapshot = parse_snapshot(&snapshot_json)?;
    let metrics = market_entry_core::simulator::simulate_all(&snapshot);
    let output = market_entry_core::simulator::strategic_playbook(&snapshot, &metrics);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Sector profiles
// ---------------------------------------------------------------------------

#[napi]
pub fn sector_insight(sector: String) -> NapiResult<String> {
    let sector = match sector.trim().parse::<u32>() {
        Ok(id) => SectorRef::Id(id),
        Err(_) => SectorRef::Name(sector),
    };
    let output = market_entry_core::profiles::sector_insight(&sector);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn list_archetypes() -> NapiResult<String> {
    serde_json::to_string(market_entry_core::profiles::all_archetypes()).map_err(to_napi_error)
}
