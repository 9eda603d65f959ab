//! Scoring functions for the seven decision dimensions.
//!
//! Every scorer reads the snapshot through its fallback accessors, combines
//! normalised components with fixed weights, rounds half away from zero and
//! maps the score onto one of three labels (>= 70, 40-69, < 40).

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{DecisionGuidance, DecisionKind, DecisionScore};
use crate::normalize::{domains, normalize_in};
use crate::rating::risk_score;
use crate::snapshot::CountryMetricSnapshot;
use crate::types::{clamp_score, round_score, Score, Verdict};

// ---------------------------------------------------------------------------
// Tier text
// ---------------------------------------------------------------------------

/// Label, subtitle and action for one score tier.
struct TierText {
    label: &'static str,
    subtitle: &'static str,
    action: &'static str,
}

/// Tiers ordered positive, neutral, negative.
type Tiers = [TierText; 3];

fn tier_for(tiers: &Tiers, verdict: Verdict) -> &TierText {
    match verdict {
        Verdict::Positive => &tiers[0],
        Verdict::Neutral => &tiers[1],
        Verdict::Negative => &tiers[2],
    }
}

/// Pick one of three values by verdict tier.
fn by_tier<T>(verdict: Verdict, positive: T, neutral: T, negative: T) -> T {
    match verdict {
        Verdict::Positive => positive,
        Verdict::Neutral => neutral,
        Verdict::Negative => negative,
    }
}

const MARKET_ENTRY_TIERS: Tiers = [
    TierText {
        label: "Enter Market",
        subtitle: "Open Opportunity",
        action: "Move fast and capture first-mover advantage.",
    },
    TierText {
        label: "Proceed with Caution",
        subtitle: "Moderate Barriers",
        action: "Consider a niche segment or price leadership entry.",
    },
    TierText {
        label: "Avoid Market",
        subtitle: "High Barriers",
        action: "Skip this market for now and evaluate alternatives.",
    },
];

const PRICING_TIERS: Tiers = [
    TierText {
        label: "Premium",
        subtitle: "High Purchasing Power",
        action: "Lead with brand value, quality and prestige.",
    },
    TierText {
        label: "Value",
        subtitle: "Mid Segment",
        action: "Emphasise the quality to price balance.",
    },
    TierText {
        label: "Penetration",
        subtitle: "Volume Driven",
        action: "Low price and high volume. Scale economics are critical.",
    },
];

const LOGISTICS_TIERS: Tiers = [
    TierText {
        label: "Just-in-Time",
        subtitle: "Excellent Infrastructure",
        action: "Run minimal stock on a weekly order cycle.",
    },
    TierText {
        label: "Standard Logistics",
        subtitle: "Average Infrastructure",
        action: "Hold safety stock and plan monthly.",
    },
    TierText {
        label: "Buffer Stock",
        subtitle: "Weak Infrastructure",
        action: "Ship critical items by air and keep high stock levels.",
    },
];

const FINANCIAL_TIERS: Tiers = [
    TierText {
        label: "Standard Terms",
        subtitle: "Stable Economy",
        action: "Local currency is acceptable under normal commercial terms.",
    },
    TierText {
        label: "Partial Hedge",
        subtitle: "Moderate Risk",
        action: "Contract large deals in hard currency and use letters of credit.",
    },
    TierText {
        label: "Hard-currency hedge required",
        subtitle: "High Risk",
        action: "Denominate every contract in USD or EUR. Take no local currency risk.",
    },
];

const MARKETING_TIERS: Tiers = [
    TierText {
        label: "Digital-first",
        subtitle: "High Potential",
        action: "Concentrate on digital marketing and social media.",
    },
    TierText {
        label: "Omnichannel",
        subtitle: "Balanced Approach",
        action: "Run a multi-channel campaign.",
    },
    TierText {
        label: "Traditional Media",
        subtitle: "Limited Potential",
        action: "Focus on traditional channels and keep costs under control.",
    },
];

const TRADE_BARRIER_TIERS: Tiers = [
    TierText {
        label: "Fast Lane",
        subtitle: "Multiple Agreements",
        action: "Maximise agreement benefits and prepare certificates of origin.",
    },
    TierText {
        label: "Partial Advantage",
        subtitle: "Limited Agreements",
        action: "Optimise use of the existing agreement terms.",
    },
    TierText {
        label: "Standard Tariff",
        subtitle: "No Agreement",
        action: "Price tariff costs in and look at free-zone options.",
    },
];

const INVESTMENT_TIERS: Tiers = [
    TierText {
        label: "Strategic Hub (5+ yr)",
        subtitle: "Long-term Investment",
        action: "Plan long-term investment and build a local team.",
    },
    TierText {
        label: "Growth Market (3–5 yr)",
        subtitle: "Medium-term Potential",
        action: "Set up distributor partnerships and grow in phases.",
    },
    TierText {
        label: "Tactical Sales (1–2 yr)",
        subtitle: "Short-term Focus",
        action: "Avoid long-term commitments and focus on opportunistic sales.",
    },
];

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

fn assemble(
    kind: DecisionKind,
    score: Score,
    tiers: &Tiers,
    explanation: String,
    raw_inputs: &[(&str, Decimal)],
    guidance: DecisionGuidance,
) -> DecisionScore {
    let score = clamp_score(score);
    let verdict = Verdict::from_score(score);
    let tier = tier_for(tiers, verdict);
    DecisionScore {
        id: kind.id(),
        key: kind,
        title: kind.title().to_string(),
        score,
        verdict,
        decision_label: tier.label.to_string(),
        subtitle: tier.subtitle.to_string(),
        recommended_action: tier.action.to_string(),
        explanation,
        raw_inputs: raw_inputs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<BTreeMap<_, _>>(),
        guidance,
    }
}

fn risk_label(snapshot: &CountryMetricSnapshot) -> &str {
    snapshot.risk().map(str::trim).unwrap_or("n/a")
}

// ---------------------------------------------------------------------------
// Scorers
// ---------------------------------------------------------------------------

/// Low risk and low local production make an open market.
pub fn market_entry(snapshot: &CountryMetricSnapshot) -> DecisionScore {
    let risk = risk_score(snapshot.risk());
    let local_prod = snapshot.local_production();
    let opportunity = (dec!(100) - local_prod).max(Decimal::ZERO);

    let score = round_score(risk * dec!(0.5) + opportunity * dec!(0.5));

    assemble(
        DecisionKind::MarketEntry,
        score,
        &MARKET_ENTRY_TIERS,
        format!(
            "Risk: {} ({}/100), local production: {}% -> opportunity score {}",
            risk_label(snapshot),
            risk,
            local_prod.round_dp(0),
            opportunity
        ),
        &[
            ("local_production_pct", local_prod),
            ("risk_score", risk),
            ("opportunity_score", opportunity),
        ],
        DecisionGuidance::MarketEntry {
            opportunity_score: opportunity,
        },
    )
}

/// Purchasing power decides how far up the price ladder a product can go.
pub fn pricing(snapshot: &CountryMetricSnapshot) -> DecisionScore {
    let gdp = snapshot.gdp();
    let score = normalize_in(gdp, domains::GDP_PER_CAPITA, false);
    let verdict = Verdict::from_score(score);

    assemble(
        DecisionKind::Pricing,
        score,
        &PRICING_TIERS,
        format!("GDP per capita: ${gdp} -> pricing capacity {score}/100"),
        &[("gdp_per_capita", gdp)],
        DecisionGuidance::Pricing {
            price_multiplier: by_tier(verdict, dec!(1.5), dec!(1.0), dec!(0.7)),
        },
    )
}

/// LPI (60%) and customs speed (40%).
pub fn logistics(snapshot: &CountryMetricSnapshot) -> DecisionScore {
    let lpi = snapshot.lpi_or_default();
    let customs = snapshot.customs_or_default();
    let lpi_norm = normalize_in(lpi, domains::LPI, false);
    let customs_norm = normalize_in(customs, domains::CUSTOMS_DAYS, true);

    let score = round_score(lpi_norm * dec!(0.6) + customs_norm * dec!(0.4));
    let verdict = Verdict::from_score(score);

    assemble(
        DecisionKind::Logistics,
        score,
        &LOGISTICS_TIERS,
        format!(
            "LPI: {}/5 -> {lpi_norm}/100, customs: {customs} days -> {customs_norm}/100",
            lpi.round_dp(2)
        ),
        &[
            ("lpi", lpi),
            ("customs_days", customs),
            ("lpi_norm", lpi_norm),
            ("customs_norm", customs_norm),
        ],
        DecisionGuidance::Logistics {
            shipping_mode: by_tier(verdict, "Sea + Road", "Sea", "Air + Sea").to_string(),
            buffer_stock: by_tier(verdict, "Low (2 weeks)", "Medium (4 weeks)", "High (6-8 weeks)")
                .to_string(),
        },
    )
}

/// Inflation stability (50%) and sovereign risk (50%).
pub fn financial(snapshot: &CountryMetricSnapshot) -> DecisionScore {
    let inflation = snapshot.inflation();
    let risk = risk_score(snapshot.risk());
    let inflation_norm = normalize_in(inflation, domains::INFLATION_PCT, true);

    let score = round_score(inflation_norm * dec!(0.5) + risk * dec!(0.5));
    let verdict = Verdict::from_score(score);

    assemble(
        DecisionKind::Financial,
        score,
        &FINANCIAL_TIERS,
        format!(
            "Inflation: {}% -> {inflation_norm}/100, risk: {} -> {risk}/100",
            inflation.round_dp(1),
            risk_label(snapshot)
        ),
        &[
            ("inflation_pct", inflation),
            ("inflation_norm", inflation_norm),
            ("risk_score", risk),
        ],
        DecisionGuidance::Financial {
            payment_terms: by_tier(verdict, "Net 60-90", "LC 30-60", "Prepayment or LC at sight")
                .to_string(),
            hedging_required: verdict != Verdict::Positive,
        },
    )
}

/// Population (30%), sector growth (40%) and GDP as a digital-readiness proxy (30%).
pub fn marketing(snapshot: &CountryMetricSnapshot) -> DecisionScore {
    let population = snapshot.population();
    let growth = snapshot.sector_growth();
    let gdp = snapshot.gdp();
    let pop_norm = normalize_in(population, domains::POPULATION_MILLIONS, false);
    let growth_norm = normalize_in(growth, domains::SECTOR_GROWTH_PCT, false);
    let digital_norm = normalize_in(gdp, domains::GDP_PER_CAPITA_DIGITAL, false);

    let score = round_score(pop_norm * dec!(0.3) + growth_norm * dec!(0.4) + digital_norm * dec!(0.3));
    let verdict = Verdict::from_score(score);

    let channels: &[&str] = by_tier(
        verdict,
        &["Digital", "Social Media", "Influencer"],
        &["Digital", "TV", "OOH"],
        &["TV", "Newspaper", "Radio"],
    );

    assemble(
        DecisionKind::Marketing,
        score,
        &MARKETING_TIERS,
        format!(
            "Population: {}M -> {pop_norm}/100, sector growth: {}% -> {growth_norm}/100, digital: {digital_norm}/100",
            population.round_dp(0),
            growth.round_dp(1)
        ),
        &[
            ("population_millions", population),
            ("sector_growth_pct", growth),
            ("pop_norm", pop_norm),
            ("growth_norm", growth_norm),
            ("digital_norm", digital_norm),
        ],
        DecisionGuidance::Marketing {
            channels: channels.iter().map(|c| c.to_string()).collect(),
        },
    )
}

/// Trade agreements (60%) and customs speed (40%).
pub fn trade_barrier(snapshot: &CountryMetricSnapshot) -> DecisionScore {
    let count = snapshot.agreements_count();
    let customs = snapshot.customs_or_default();
    let agreement_norm = normalize_in(count, domains::AGREEMENT_COUNT, false);
    let customs_norm = normalize_in(customs, domains::CUSTOMS_DAYS, true);

    let score = round_score(agreement_norm * dec!(0.6) + customs_norm * dec!(0.4));
    let verdict = Verdict::from_score(score);

    assemble(
        DecisionKind::TradeBarrier,
        score,
        &TRADE_BARRIER_TIERS,
        format!(
            "Agreements: {count} -> {agreement_norm}/100, customs: {customs} days -> {customs_norm}/100"
        ),
        &[
            ("agreement_count", count),
            ("customs_days", customs),
            ("agreement_norm", agreement_norm),
            ("customs_norm", customs_norm),
        ],
        DecisionGuidance::TradeBarrier {
            tariff_advantage: by_tier(verdict, "High", "Medium", "None").to_string(),
            agreements: snapshot.agreements.clone(),
        },
    )
}

/// Unemployment (30%), GDP growth (40%) and an ease-of-business blend of LPI and risk (30%).
pub fn investment_horizon(snapshot: &CountryMetricSnapshot) -> DecisionScore {
    let unemployment = snapshot.unemployment();
    let growth = snapshot.gdp_growth();
    let lpi = snapshot.lpi_or_default();
    let unemployment_norm = normalize_in(unemployment, domains::UNEMPLOYMENT_PCT, true);
    let growth_norm = normalize_in(growth, domains::GDP_GROWTH_PCT, false);
    let ease_norm = round_score(
        normalize_in(lpi, domains::LPI, false) * dec!(0.5) + risk_score(snapshot.risk()) * dec!(0.5),
    );

    let score = round_score(
        unemployment_norm * dec!(0.3) + growth_norm * dec!(0.4) + ease_norm * dec!(0.3),
    );
    let verdict = Verdict::from_score(score);

    assemble(
        DecisionKind::InvestmentHorizon,
        score,
        &INVESTMENT_TIERS,
        format!(
            "Unemployment: {}% -> {unemployment_norm}/100, GDP growth: {}% -> {growth_norm}/100, business environment: {ease_norm}/100",
            unemployment.round_dp(1),
            growth.round_dp(1)
        ),
        &[
            ("unemployment_pct", unemployment),
            ("gdp_growth_pct", growth),
            ("unemployment_norm", unemployment_norm),
            ("growth_norm", growth_norm),
            ("ease_of_business_norm", ease_norm),
        ],
        DecisionGuidance::InvestmentHorizon {
            horizon: by_tier(verdict, "5+ years", "3-5 years", "1-2 years").to_string(),
            investment_level: by_tier(verdict, "High", "Medium", "Low").to_string(),
        },
    )
}
