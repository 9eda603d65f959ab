//! Four-way composite scoring and ranking over a cohort of countries.
//!
//! Composites (each 0-100, one decimal):
//! - market potential: imports 50%, population 30%, open-market bonus 20%
//! - economic stability: GDP per capita 40%, sovereign risk 40%, inflation penalty 20%
//! - logistics ease: LPI 40%, customs speed 30%, container cost 30%
//! - sector growth: sector growth 50%, investment 30%, agreement bonus 20%
//!
//! Cohort metrics are normalised against the cohort's own min/max. The total
//! is `Σ composite · weight / 100`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::cohort::CohortStats;
use crate::normalize::{domains, unit_normalize};
use crate::profiles::{
    resolve_archetype, RankingWeightOverrides, RankingWeights, SectorArchetype, SectorRef,
};
use crate::rating::{risk_fraction, risk_tier, RiskTier};
use crate::snapshot::CountryMetricSnapshot;
use crate::types::{clamp_score, round_tenth, Score};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeScores {
    pub market_potential: Score,
    pub economic_stability: Score,
    pub logistics_ease: Score,
    pub sector_growth: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingTier {
    Excellent,
    Good,
    Moderate,
    Risky,
    Poor,
}

impl RankingTier {
    /// >= 80 excellent, >= 65 good, >= 50 moderate, >= 35 risky, else poor.
    pub fn from_score(total: Score) -> Self {
        if total >= dec!(80) {
            RankingTier::Excellent
        } else if total >= dec!(65) {
            RankingTier::Good
        } else if total >= dec!(50) {
            RankingTier::Moderate
        } else if total >= dec!(35) {
            RankingTier::Risky
        } else {
            RankingTier::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankingTier::Excellent => "Highly Suitable",
            RankingTier::Good => "Suitable",
            RankingTier::Moderate => "Has Potential",
            RankingTier::Risky => "Risky",
            RankingTier::Poor => "Not Recommended",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCountry {
    pub country: CountryMetricSnapshot,
    pub scores: CompositeScores,
    pub total_score: Score,
    /// 1-based position after the descending sort
    pub rank: usize,
    pub recommendation: RankingTier,
    pub risk_tier: RiskTier,
}

/// Ranking request for one sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingInput {
    pub sector: SectorRef,
    pub cohort: Vec<CountryMetricSnapshot>,
    #[serde(default)]
    pub weights: RankingWeightOverrides,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingReport {
    pub sector: SectorRef,
    /// Reported for context only; the ranking weights ignore the archetype
    pub archetype: SectorArchetype,
    pub weights: RankingWeights,
    pub country_count: usize,
    pub rankings: Vec<RankedCountry>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Rank a cohort. Ties keep the case-insensitive alphabetical order of the
/// names; an empty cohort yields an empty ranking.
pub fn get_country_rankings(
    cohort: &[CountryMetricSnapshot],
    weights: Option<&RankingWeights>,
) -> Vec<RankedCountry> {
    if cohort.is_empty() {
        return Vec::new();
    }
    let weights = weights.copied().unwrap_or_default();
    let stats = CohortStats::from_cohort(cohort);

    let mut sorted: Vec<&CountryMetricSnapshot> = cohort.iter().collect();
    sorted.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut ranked: Vec<RankedCountry> = sorted
        .into_iter()
        .map(|country| score_country(country, &stats, &weights))
        .collect();

    // Vec::sort_by is stable, so equal totals keep the name order.
    ranked.sort_by(|a, b| b.total_score.cmp(&a.total_score));
    for (i, r) in ranked.iter_mut().enumerate() {
        r.rank = i + 1;
    }

    if let Some(top) = ranked.first() {
        tracing::debug!(
            countries = ranked.len(),
            leader = %top.country.name,
            leader_score = %top.total_score,
            "ranked cohort"
        );
    }
    ranked
}

/// Resolve weights from caller overrides and rank the sector's cohort.
pub fn rank_sector(input: &RankingInput) -> RankingReport {
    let weights = RankingWeights::resolve(&input.weights);
    let archetype = resolve_archetype(&input.sector);
    let rankings = get_country_rankings(&input.cohort, Some(&weights));
    RankingReport {
        sector: input.sector.clone(),
        archetype,
        weights,
        country_count: rankings.len(),
        rankings,
    }
}

// ---------------------------------------------------------------------------
// Composite scoring
// ---------------------------------------------------------------------------

fn score_country(
    country: &CountryMetricSnapshot,
    stats: &CohortStats,
    weights: &RankingWeights,
) -> RankedCountry {
    let market_potential = market_potential(country, stats);
    let economic_stability = economic_stability(country, stats);
    let logistics_ease = logistics_ease(country, stats);
    let sector_growth = sector_growth(country, stats);

    let [w_market, w_stability, w_logistics, w_growth] = weights.capped();
    let total = market_potential * w_market / dec!(100)
        + economic_stability * w_stability / dec!(100)
        + logistics_ease * w_logistics / dec!(100)
        + sector_growth * w_growth / dec!(100);
    let total_score = clamp_score(round_tenth(total));

    RankedCountry {
        country: country.clone(),
        scores: CompositeScores {
            market_potential: clamp_score(round_tenth(market_potential)),
            economic_stability: clamp_score(round_tenth(economic_stability)),
            logistics_ease: clamp_score(round_tenth(logistics_ease)),
            sector_growth: clamp_score(round_tenth(sector_growth)),
        },
        total_score,
        rank: 0,
        recommendation: RankingTier::from_score(total_score),
        risk_tier: risk_tier(country.risk()),
    }
}

fn market_potential(c: &CountryMetricSnapshot, stats: &CohortStats) -> Decimal {
    let imports = unit_normalize(c.sector_imports(), stats.sector_imports);
    let population = unit_normalize(c.population(), stats.population);
    let open_market = ((dec!(100) - c.local_production()) / dec!(100)).max(Decimal::ZERO);
    clamp_score((imports * dec!(0.5) + population * dec!(0.3) + open_market * dec!(0.2)) * dec!(100))
}

fn economic_stability(c: &CountryMetricSnapshot, stats: &CohortStats) -> Decimal {
    let gdp = unit_normalize(c.gdp(), stats.gdp_per_capita);
    let risk = risk_fraction(c.risk());
    let inflation_penalty = (Decimal::ONE - c.inflation() / dec!(50)).max(Decimal::ZERO);
    clamp_score((gdp * dec!(0.4) + risk * dec!(0.4) + inflation_penalty * dec!(0.2)) * dec!(100))
}

fn logistics_ease(c: &CountryMetricSnapshot, stats: &CohortStats) -> Decimal {
    let lpi = unit_normalize(c.lpi_or_default(), stats.lpi);
    let customs = Decimal::ONE - unit_normalize(c.customs_or_default(), stats.customs_days);
    let cost = Decimal::ONE - unit_normalize(c.container_cost(), stats.container_cost);
    clamp_score((lpi * dec!(0.4) + customs * dec!(0.3) + cost * dec!(0.3)) * dec!(100))
}

fn sector_growth(c: &CountryMetricSnapshot, stats: &CohortStats) -> Decimal {
    let growth = unit_normalize(c.sector_growth(), stats.sector_growth);
    let investment = unit_normalize(c.sector_investment(), domains::SECTOR_INVESTMENT_MUSD);
    let agreements = (c.agreements_count() * dec!(10)).min(dec!(30)) / dec!(100);
    clamp_score((growth * dec!(0.5) + investment * dec!(0.3) + agreements * dec!(0.2)) * dec!(100))
}
