//! The eight simulated metrics.
//!
//! Each metric blends correlated real inputs with a bounded, seeded jitter,
//! is clamped, rounded to a whole number and then classified. The
//! classification (level, label, strategy) depends only on the metric and
//! its rounded value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::geo::distance_from_hub_km;
use super::seed::jitter;
use crate::rating::{risk_fraction, risk_score};
use crate::snapshot::CountryMetricSnapshot;
use crate::types::{clamp, round_score};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    RegulatoryDifficulty,
    CulturalSimilarity,
    DigitalAdoption,
    HubDistance,
    CorporateTax,
    CompetitionIntensity,
    YouthRatio,
    EaseOfBusiness,
}

impl MetricKind {
    pub const ALL: [MetricKind; 8] = [
        MetricKind::RegulatoryDifficulty,
        MetricKind::CulturalSimilarity,
        MetricKind::DigitalAdoption,
        MetricKind::HubDistance,
        MetricKind::CorporateTax,
        MetricKind::CompetitionIntensity,
        MetricKind::YouthRatio,
        MetricKind::EaseOfBusiness,
    ];

    /// Key hashed into the jitter seed.
    pub fn seed_key(&self) -> &'static str {
        match self {
            MetricKind::RegulatoryDifficulty => "regulatory",
            MetricKind::CulturalSimilarity => "culture",
            MetricKind::DigitalAdoption => "digital",
            MetricKind::HubDistance => "distance",
            MetricKind::CorporateTax => "tax",
            MetricKind::CompetitionIntensity => "competition",
            MetricKind::YouthRatio => "youth",
            MetricKind::EaseOfBusiness => "eob",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MetricKind::RegulatoryDifficulty => "Regulatory difficulty",
            MetricKind::CulturalSimilarity => "Cultural similarity",
            MetricKind::DigitalAdoption => "Digital adoption",
            MetricKind::HubDistance => "Distance from hub (km)",
            MetricKind::CorporateTax => "Corporate tax rate (%)",
            MetricKind::CompetitionIntensity => "Competition intensity",
            MetricKind::YouthRatio => "Youth ratio (%)",
            MetricKind::EaseOfBusiness => "Ease of business",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedMetric {
    pub kind: MetricKind,
    pub value: Decimal,
    pub level: String,
    pub label: String,
    pub strategy: String,
}

/// All eight metrics for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedMetrics {
    pub regulatory: SimulatedMetric,
    pub cultural: SimulatedMetric,
    pub digital: SimulatedMetric,
    pub distance: SimulatedMetric,
    pub tax: SimulatedMetric,
    pub competition: SimulatedMetric,
    pub youth: SimulatedMetric,
    pub ease_of_business: SimulatedMetric,
}

impl AdvancedMetrics {
    pub fn as_array(&self) -> [&SimulatedMetric; 8] {
        [
            &self.regulatory,
            &self.cultural,
            &self.digital,
            &self.distance,
            &self.tax,
            &self.competition,
            &self.youth,
            &self.ease_of_business,
        ]
    }
}

// ---------------------------------------------------------------------------
// Regional baselines (region ids 1-7)
// ---------------------------------------------------------------------------

fn cultural_baseline(region: Option<u32>) -> Decimal {
    match region {
        Some(1) => dec!(60),
        Some(2) => dec!(70),
        Some(3) => dec!(40),
        Some(4) => dec!(30),
        Some(5) => dec!(35),
        Some(6) => dec!(50),
        Some(7) => dec!(45),
        _ => dec!(50),
    }
}

fn tax_baseline(region: Option<u32>) -> Decimal {
    match region {
        Some(1) => dec!(22),
        Some(2) => dec!(15),
        Some(3) => dec!(25),
        Some(4) => dec!(27),
        Some(5) => dec!(30),
        Some(6) => dec!(28),
        Some(7) => dec!(20),
        _ => dec!(25),
    }
}

fn youth_adjustment(region: Option<u32>) -> Decimal {
    match region {
        Some(1) => dec!(-10),
        Some(2) => dec!(5),
        Some(4) => dec!(-5),
        Some(5) => dec!(10),
        Some(6) => dec!(15),
        _ => Decimal::ZERO,
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Three-way split on `value > high` / `value > mid`.
fn three_way<'a>(
    value: Decimal,
    high: Decimal,
    mid: Decimal,
    bands: [(&'a str, &'a str, &'a str); 3],
) -> (&'a str, &'a str, &'a str) {
    if value > high {
        bands[0]
    } else if value > mid {
        bands[1]
    } else {
        bands[2]
    }
}

/// Level, label and strategy for a metric value.
pub fn classify(kind: MetricKind, value: Decimal) -> (String, String, String) {
    let (level, label, strategy) = match kind {
        MetricKind::RegulatoryDifficulty => three_way(
            value,
            dec!(70),
            dec!(40),
            [
                ("high", "Very Difficult", "Local partner"),
                ("medium", "Moderate", "Standard licensing"),
                ("low", "Easy", "Direct registration"),
            ],
        ),
        MetricKind::CulturalSimilarity => three_way(
            value,
            dec!(70),
            dec!(40),
            [
                ("high", "High Similarity", "Minimal adaptation"),
                ("medium", "Moderate", "Moderate adaptation"),
                ("low", "Low Similarity", "Heavy adaptation"),
            ],
        ),
        MetricKind::DigitalAdoption => three_way(
            value,
            dec!(70),
            dec!(40),
            [
                ("high", "Highly Digital", "Digital First"),
                ("medium", "Emerging", "Omnichannel"),
                ("low", "Low", "Traditional"),
            ],
        ),
        MetricKind::HubDistance => three_way(
            value,
            dec!(8000),
            dec!(3000),
            [
                ("far", "Very Far", "Air/Sea (15-30 days)"),
                ("medium", "Medium Distance", "Sea (7-15 days)"),
                ("near", "Near", "Road/Rail (2-7 days)"),
            ],
        ),
        MetricKind::CorporateTax => three_way(
            value,
            dec!(25),
            dec!(15),
            [
                ("high", "High Tax", "Transfer pricing review"),
                ("medium", "Moderate", "Standard"),
                ("low", "Low Tax", "Tax efficient"),
            ],
        ),
        MetricKind::CompetitionIntensity => three_way(
            value,
            dec!(70),
            dec!(40),
            [
                ("high", "High Competition", "Differentiation"),
                ("medium", "Moderate", "Value"),
                ("low", "Low Competition", "Market leader"),
            ],
        ),
        MetricKind::YouthRatio => three_way(
            value,
            dec!(50),
            dec!(35),
            [
                ("young", "Young Population", "Digital/Social"),
                ("balanced", "Balanced", "Mixed"),
                ("aging", "Ageing Population", "Traditional"),
            ],
        ),
        MetricKind::EaseOfBusiness => three_way(
            value,
            dec!(70),
            dec!(40),
            [
                ("easy", "Easy", "Fast (1-3 months)"),
                ("moderate", "Moderate", "Medium (3-6 months)"),
                ("difficult", "Difficult", "Slow (6-12 months)"),
            ],
        ),
    };
    (level.to_string(), label.to_string(), strategy.to_string())
}

fn finish(kind: MetricKind, raw: Decimal, lo: Decimal, hi: Decimal) -> SimulatedMetric {
    let value = round_score(clamp(raw, lo, hi));
    let (level, label, strategy) = classify(kind, value);
    SimulatedMetric {
        kind,
        value,
        level,
        label,
        strategy,
    }
}

// ---------------------------------------------------------------------------
// Metric formulas
// ---------------------------------------------------------------------------

fn draw(c: &CountryMetricSnapshot, kind: MetricKind, lo: Decimal, hi: Decimal) -> Decimal {
    jitter(c.country_id, kind.seed_key(), lo, hi)
}

pub fn regulatory_difficulty(c: &CountryMetricSnapshot) -> SimulatedMetric {
    let kind = MetricKind::RegulatoryDifficulty;
    let customs_factor = (c.customs_or_default() / dec!(30)).min(Decimal::ONE);
    let raw = (Decimal::ONE - risk_fraction(c.risk())) * dec!(40)
        + customs_factor * dec!(30)
        + draw(c, kind, Decimal::ZERO, dec!(30));
    finish(kind, raw, Decimal::ZERO, dec!(100))
}

pub fn cultural_similarity(c: &CountryMetricSnapshot) -> SimulatedMetric {
    let kind = MetricKind::CulturalSimilarity;
    let raw = cultural_baseline(c.region_id) + draw(c, kind, dec!(-15), dec!(15));
    finish(kind, raw, Decimal::ZERO, dec!(100))
}

pub fn digital_adoption(c: &CountryMetricSnapshot) -> SimulatedMetric {
    let kind = MetricKind::DigitalAdoption;
    let gdp_factor = (c.gdp() / dec!(50000)).min(Decimal::ONE) * dec!(50);
    let pop_factor = (dec!(30) - c.population() / dec!(50)).max(Decimal::ZERO);
    let raw = gdp_factor + pop_factor + draw(c, kind, dec!(-10), dec!(20));
    finish(kind, raw, dec!(15), dec!(95))
}

/// Great-circle distance from the hub. Missing coordinates are drawn from
/// the seeded stream (latitude in [-60, 70), longitude in [-180, 180)).
pub fn hub_distance(c: &CountryMetricSnapshot) -> SimulatedMetric {
    let kind = MetricKind::HubDistance;
    let latitude = c
        .lat()
        .unwrap_or_else(|| jitter(c.country_id, "lat", dec!(-60), dec!(70)));
    let longitude = c
        .lon()
        .unwrap_or_else(|| jitter(c.country_id, "lon", dec!(-180), dec!(180)));
    let km = round_score(distance_from_hub_km(latitude, longitude));
    let (level, label, strategy) = classify(kind, km);
    SimulatedMetric {
        kind,
        value: km,
        level,
        label,
        strategy,
    }
}

pub fn corporate_tax(c: &CountryMetricSnapshot) -> SimulatedMetric {
    let kind = MetricKind::CorporateTax;
    let raw = tax_baseline(c.region_id) + draw(c, kind, dec!(-8), dec!(8));
    finish(kind, raw, dec!(5), dec!(40))
}

pub fn competition_intensity(c: &CountryMetricSnapshot) -> SimulatedMetric {
    let kind = MetricKind::CompetitionIntensity;
    let raw = c.local_production() * dec!(0.6)
        + (c.gdp() / dec!(80000)).min(Decimal::ONE) * dec!(25)
        + draw(c, kind, Decimal::ZERO, dec!(20));
    finish(kind, raw, Decimal::ZERO, dec!(100))
}

pub fn youth_ratio(c: &CountryMetricSnapshot) -> SimulatedMetric {
    let kind = MetricKind::YouthRatio;
    let gdp_factor = (dec!(60) - c.gdp() / dec!(1500)).max(Decimal::ZERO);
    let raw = dec!(40) + gdp_factor + youth_adjustment(c.region_id) + draw(c, kind, dec!(-5), dec!(10));
    finish(kind, raw, dec!(20), dec!(70))
}

pub fn ease_of_business(c: &CountryMetricSnapshot) -> SimulatedMetric {
    let kind = MetricKind::EaseOfBusiness;
    let lpi_norm = c.lpi_or_default() / dec!(5) * dec!(100);
    let customs_norm = (dec!(100) - c.customs_or_default() * dec!(3)).max(Decimal::ZERO);
    let raw = risk_score(c.risk()) * dec!(0.4)
        + lpi_norm * dec!(0.3)
        + customs_norm * dec!(0.3)
        + draw(c, kind, dec!(-10), dec!(10));
    finish(kind, raw, Decimal::ZERO, dec!(100))
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Simulate all eight metrics. Identical snapshots always yield identical metrics.
pub fn simulate_all(snapshot: &CountryMetricSnapshot) -> AdvancedMetrics {
    AdvancedMetrics {
        regulatory: regulatory_difficulty(snapshot),
        cultural: cultural_similarity(snapshot),
        digital: digital_adoption(snapshot),
        distance: hub_distance(snapshot),
        tax: corporate_tax(snapshot),
        competition: competition_intensity(snapshot),
        youth: youth_ratio(snapshot),
        ease_of_business: ease_of_business(snapshot),
    }
}
