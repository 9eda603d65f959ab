//! Global score: the weighted mean of the seven decision scores.
//!
//! The global score is defined as the mean of the sub-scores, so a high
//! headline number can never sit on top of mostly negative decisions.
//! [`validate_consistency`] and [`check_consistency`] re-derive the mean and
//! fail when it drifts from the reported score by more than one point.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{get_all_decisions, DecisionKind, DecisionScore};
use crate::error::MarketEntryError;
use crate::snapshot::CountryMetricSnapshot;
use crate::types::{cap_weight, clamp_score, round_score, BucketCounts, Score, Verdict, Weight};
use crate::MarketEntryResult;

/// Maximum allowed gap, in points, between the global score and the recomputed mean.
pub const CONSISTENCY_TOLERANCE: Decimal = dec!(1);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Relative weight per decision. Missing or non-positive weights count as 1,
/// weights above [`crate::types::MAX_WEIGHT`] are capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionWeights {
    #[serde(default = "unit_weight")]
    pub market_entry: Weight,
    #[serde(default = "unit_weight")]
    pub pricing: Weight,
    #[serde(default = "unit_weight")]
    pub logistics: Weight,
    #[serde(default = "unit_weight")]
    pub financial: Weight,
    #[serde(default = "unit_weight")]
    pub marketing: Weight,
    #[serde(default = "unit_weight")]
    pub trade_barrier: Weight,
    #[serde(default = "unit_weight", alias = "investmentHorizon")]
    pub investment: Weight,
}

fn unit_weight() -> Weight {
    Decimal::ONE
}

impl Default for DecisionWeights {
    fn default() -> Self {
        Self {
            market_entry: Decimal::ONE,
            pricing: Decimal::ONE,
            logistics: Decimal::ONE,
            financial: Decimal::ONE,
            marketing: Decimal::ONE,
            trade_barrier: Decimal::ONE,
            investment: Decimal::ONE,
        }
    }
}

impl DecisionWeights {
    /// Effective weight for a decision kind.
    pub fn weight_for(&self, kind: DecisionKind) -> Weight {
        let raw = match kind {
            DecisionKind::MarketEntry => self.market_entry,
            DecisionKind::Pricing => self.pricing,
            DecisionKind::Logistics => self.logistics,
            DecisionKind::Financial => self.financial,
            DecisionKind::Marketing => self.marketing,
            DecisionKind::TradeBarrier => self.trade_barrier,
            DecisionKind::InvestmentHorizon => self.investment,
        };
        if raw > Decimal::ZERO {
            cap_weight(raw)
        } else {
            Decimal::ONE
        }
    }
}

/// Headline recommendation for the global score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    pub description: String,
    pub action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalScoreResult {
    pub global_score: Score,
    pub global_verdict: Verdict,
    pub decisions: Vec<DecisionScore>,
    pub bucket_counts: BucketCounts,
    pub recommendation: Recommendation,
    /// e.g. "3 Positive, 2 Neutral, 2 Negative"
    pub summary: String,
}

/// One country's line in a bulk scoring run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortScore {
    /// 1-based position after the descending sort
    pub rank: usize,
    pub country_id: u32,
    pub name: String,
    pub global_score: Score,
    pub global_verdict: Verdict,
    pub bucket_counts: BucketCounts,
    pub summary: String,
}

/// Outcome of a successful consistency check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub global_score: Score,
    /// Recomputed mean of the seven scores, unrounded
    pub expected: Decimal,
    pub difference: Decimal,
    pub is_consistent: bool,
    pub summary: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score all seven decisions and aggregate them into one global score.
///
/// `global_score = round(Σ score·w / Σ w)`; equal weights when `weights` is `None`.
pub fn calculate_global_score(
    snapshot: &CountryMetricSnapshot,
    weights: Option<&DecisionWeights>,
) -> GlobalScoreResult {
    let weights = weights.copied().unwrap_or_default();
    let decisions = get_all_decisions(snapshot);

    let mean = weighted_mean(&decisions, &weights);
    let global_score = clamp_score(round_score(mean));
    let global_verdict = Verdict::from_score(global_score);

    let mut bucket_counts = BucketCounts::default();
    for d in &decisions {
        bucket_counts.record(d.verdict);
    }
    let summary = format!(
        "{} Positive, {} Neutral, {} Negative",
        bucket_counts.positive, bucket_counts.neutral, bucket_counts.negative
    );

    tracing::debug!(
        country = %snapshot.name,
        global_score = %global_score,
        verdict = global_verdict.label(),
        %summary,
        "aggregated decision scores"
    );

    GlobalScoreResult {
        global_score,
        global_verdict,
        decisions: decisions.to_vec(),
        bucket_counts,
        recommendation: recommendation_for(global_score),
        summary,
    }
}

/// Global score for every country of a cohort, best first. Equal scores keep
/// the cohort's input order.
pub fn score_cohort(
    cohort: &[CountryMetricSnapshot],
    weights: Option<&DecisionWeights>,
) -> Vec<CohortScore> {
    let mut scored: Vec<CohortScore> = cohort
        .iter()
        .map(|country| {
            let result = calculate_global_score(country, weights);
            CohortScore {
                rank: 0,
                country_id: country.country_id,
                name: country.name.clone(),
                global_score: result.global_score,
                global_verdict: result.global_verdict,
                bucket_counts: result.bucket_counts,
                summary: result.summary,
            }
        })
        .collect();

    scored.sort_by(|a, b| b.global_score.cmp(&a.global_score));
    for (i, s) in scored.iter_mut().enumerate() {
        s.rank = i + 1;
    }
    scored
}

/// Recompute the plain mean of the seven scores and compare it with the
/// equal-weight global score.
pub fn validate_consistency(snapshot: &CountryMetricSnapshot) -> MarketEntryResult<ConsistencyReport> {
    let result = calculate_global_score(snapshot, None);
    if result.decisions.is_empty() {
        return Err(no_decisions());
    }
    let total: Decimal = result.decisions.iter().map(|d| d.score).sum();
    let expected = total / Decimal::from(result.decisions.len() as u64);
    compare_with_expected(&result, expected)
}

/// Check an already computed result against an explicit weighted mean.
pub fn check_consistency(
    result: &GlobalScoreResult,
    weights: &DecisionWeights,
) -> MarketEntryResult<ConsistencyReport> {
    if result.decisions.is_empty() {
        return Err(no_decisions());
    }
    compare_with_expected(result, weighted_mean(&result.decisions, weights))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn no_decisions() -> MarketEntryError {
    MarketEntryError::InsufficientData("global score result carries no decisions".into())
}

fn compare_with_expected(
    result: &GlobalScoreResult,
    expected: Decimal,
) -> MarketEntryResult<ConsistencyReport> {
    let difference = (result.global_score - expected).abs();

    if difference > CONSISTENCY_TOLERANCE {
        tracing::error!(
            global_score = %result.global_score,
            expected = %expected,
            difference = %difference,
            "global score is inconsistent with its decisions"
        );
        return Err(MarketEntryError::ConsistencyViolation {
            global_score: result.global_score,
            expected,
            tolerance: CONSISTENCY_TOLERANCE,
        });
    }

    Ok(ConsistencyReport {
        global_score: result.global_score,
        expected,
        difference,
        is_consistent: true,
        summary: result.summary.clone(),
    })
}

fn weighted_mean(decisions: &[DecisionScore], weights: &DecisionWeights) -> Decimal {
    let (total, weight_sum) = decisions.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(total, weight_sum), d| {
            let w = weights.weight_for(d.key);
            (total + d.score * w, weight_sum + w)
        },
    );
    if weight_sum.is_zero() {
        return Decimal::ZERO;
    }
    total / weight_sum
}

fn recommendation_for(global_score: Score) -> Recommendation {
    let (text, description, action) = if global_score >= dec!(70) {
        (
            "Priority Target",
            "This market offers high potential. Strategic investment is recommended.",
            "Prepare a detailed market entry plan.",
        )
    } else if global_score >= dec!(50) {
        (
            "Potential Opportunity",
            "There are opportunities worth evaluating. Proceed carefully.",
            "Consider a pilot project or a limited entry.",
        )
    } else if global_score >= dec!(40) {
        (
            "Watch and Wait",
            "Risks and opportunities are balanced. Monitor conditions.",
            "Evaluate alternative markets as well.",
        )
    } else {
        (
            "Not Recommended",
            "Risks outweigh opportunities. Skip this market for now.",
            "Redirect resources to other markets.",
        )
    };
    Recommendation {
        text: text.into(),
        description: description.into(),
        action: action.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong_country() -> CountryMetricSnapshot {
        CountryMetricSnapshot {
            name: "Strongland".into(),
            risk_code: Some("AA".into()),
            local_production_pct: Some(dec!(20)),
            gdp_per_capita: Some(dec!(65000)),
            lpi: Some(dec!(4.1)),
            customs_days: Some(dec!(3)),
            inflation_pct: Some(dec!(2)),
            population_millions: Some(dec!(80)),
            sector_growth_pct: Some(dec!(8)),
            agreement_count: Some(dec!(4)),
            unemployment_pct: Some(dec!(4)),
            gdp_growth_pct: Some(dec!(3)),
            ..Default::default()
        }
    }

    #[test]
    fn test_equal_weights_global_equals_mean() {
        let result = calculate_global_score(&strong_country(), None);
        let mean: Decimal =
            result.decisions.iter().map(|d| d.score).sum::<Decimal>() / Decimal::from(7);
        assert!(
            (result.global_score - mean).abs() <= Decimal::ONE,
            "global {} vs mean {}",
            result.global_score,
            mean
        );
        assert_eq!(result.decisions.len(), 7);
        assert_eq!(result.bucket_counts.total(), 7);
    }

    #[test]
    fn test_empty_snapshot_uses_fallbacks() {
        // 75 + 0 + 43 + 75 + 10 + 20 + 56 = 279, / 7 = 39.86
        let result = calculate_global_score(&CountryMetricSnapshot::named("Blank"), None);
        assert_eq!(result.global_score, dec!(40));
        assert_eq!(result.global_verdict, Verdict::Neutral);
        assert_eq!(result.recommendation.text, "Watch and Wait");
        assert_eq!(result.summary, "2 Positive, 2 Neutral, 3 Negative");
    }

    #[test]
    fn test_non_positive_weights_count_as_one() {
        let zeroed = DecisionWeights {
            market_entry: Decimal::ZERO,
            pricing: dec!(-3),
            ..Default::default()
        };
        let a = calculate_global_score(&strong_country(), Some(&zeroed));
        let b = calculate_global_score(&strong_country(), None);
        assert_eq!(a.global_score, b.global_score);
    }

    #[test]
    fn test_weights_shift_the_score() {
        let marketing_heavy = DecisionWeights {
            marketing: dec!(10),
            ..Default::default()
        };
        let result = calculate_global_score(&strong_country(), Some(&marketing_heavy));
        let marketing = result.decisions[4].score;
        let equal = calculate_global_score(&strong_country(), None).global_score;
        assert!(
            (result.global_score - marketing).abs() < (equal - marketing).abs(),
            "weighted {} equal {} marketing {}",
            result.global_score,
            equal,
            marketing
        );
        assert!(check_consistency(&result, &marketing_heavy).is_ok());
    }

    #[test]
    fn test_validate_consistency_passes() {
        let report = validate_consistency(&strong_country()).unwrap();
        assert!(report.is_consistent);
        assert!(report.difference <= CONSISTENCY_TOLERANCE);
    }

    #[test]
    fn test_validate_consistency_reports_plain_mean() {
        let snapshot = strong_country();
        let report = validate_consistency(&snapshot).unwrap();
        let scores: Vec<Decimal> = get_all_decisions(&snapshot).iter().map(|d| d.score).collect();
        let plain = scores.iter().copied().sum::<Decimal>() / dec!(7);
        assert_eq!(report.expected, plain);
    }

    #[test]
    fn test_tampered_result_is_a_violation() {
        let mut result = calculate_global_score(&strong_country(), None);
        result.global_score += dec!(5);
        let err = check_consistency(&result, &DecisionWeights::default()).unwrap_err();
        match err {
            MarketEntryError::ConsistencyViolation { tolerance, .. } => {
                assert_eq!(tolerance, CONSISTENCY_TOLERANCE)
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_score_cohort_sorts_best_first() {
        let cohort = vec![
            CountryMetricSnapshot::named("Blank"),
            strong_country(),
            CountryMetricSnapshot::named("Empty"),
        ];
        let scored = score_cohort(&cohort, None);
        assert_eq!(scored.len(), 3);
        assert_eq!(scored[0].name, "Strongland");
        assert_eq!(scored[1].name, "Blank");
        assert_eq!(scored[2].name, "Empty");
        assert_eq!(
            scored.iter().map(|s| s.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(scored[1].global_score, dec!(40));
        assert!(score_cohort(&[], None).is_empty());
    }

    #[test]
    fn test_recommendation_tiers() {
        assert_eq!(recommendation_for(dec!(70)).text, "Priority Target");
        assert_eq!(recommendation_for(dec!(69)).text, "Potential Opportunity");
        assert_eq!(recommendation_for(dec!(50)).text, "Potential Opportunity");
        assert_eq!(recommendation_for(dec!(49)).text, "Watch and Wait");
        assert_eq!(recommendation_for(dec!(40)).text, "Watch and Wait");
        assert_eq!(recommendation_for(dec!(39)).text, "Not Recommended");
    }

    #[test]
    fn test_weights_deserialize_with_defaults() {
        let w: DecisionWeights = serde_json::from_str(r#"{"pricing": 2, "tradeBarrier": 3}"#).unwrap();
        assert_eq!(w.pricing, dec!(2));
        assert_eq!(w.trade_barrier, dec!(3));
        assert_eq!(w.market_entry, Decimal::ONE);
    }
}
