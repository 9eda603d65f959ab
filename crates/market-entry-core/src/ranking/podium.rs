//! Quick "podium" view: a simple suitability score and the single strongest
//! selling point per country, for the best few countries of a cohort.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::snapshot::CountryMetricSnapshot;
use crate::types::{clamp_score, round_tenth, Score};

/// Default podium size.
pub const DEFAULT_PODIUM_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    fn for_position(index: usize) -> Option<Self> {
        match index {
            0 => Some(Medal::Gold),
            1 => Some(Medal::Silver),
            2 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinningFactor {
    StrongLogistics,
    FastCustoms,
    HighSectorGrowth,
    OpenMarket,
    HighPurchasingPower,
    BalancedProfile,
}

impl WinningFactor {
    pub fn label(&self) -> &'static str {
        match self {
            WinningFactor::StrongLogistics => "Strong logistics infrastructure",
            WinningFactor::FastCustoms => "Fast customs clearance",
            WinningFactor::HighSectorGrowth => "High sector growth",
            WinningFactor::OpenMarket => "Low competition (open market)",
            WinningFactor::HighPurchasingPower => "High purchasing power",
            WinningFactor::BalancedProfile => "Balanced profile",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopRecommendation {
    pub rank: usize,
    pub medal: Option<Medal>,
    pub country_id: u32,
    pub name: String,
    pub suitability_score: Score,
    pub winning_factor: WinningFactor,
    pub winning_factor_label: String,
}

/// `min(growth·10, 100)·0.4 + (lpi/5·100)·0.3 + min(gdp/80000·100, 100)·0.3`, clamped to [0, 100].
pub fn suitability_score(c: &CountryMetricSnapshot) -> Score {
    let growth = (c.sector_growth() * dec!(10)).min(dec!(100));
    let lpi = c.lpi_or_default() / dec!(5) * dec!(100);
    let gdp = (c.gdp() / dec!(80000) * dec!(100)).min(dec!(100));
    clamp_score(growth * dec!(0.4) + lpi * dec!(0.3) + gdp * dec!(0.3))
}

/// The strongest qualifying factor; the first listed wins a tie.
pub fn winning_factor(c: &CountryMetricSnapshot) -> WinningFactor {
    let lpi = c.lpi_or_default();
    let customs = c.customs_or_default();
    let growth = c.sector_growth();
    let local_prod = c.local_production();
    let gdp = c.gdp();

    let candidates: [(bool, WinningFactor, Decimal); 5] = [
        (lpi >= dec!(3.5), WinningFactor::StrongLogistics, lpi),
        (customs <= dec!(5), WinningFactor::FastCustoms, dec!(5) - customs),
        (growth >= dec!(5), WinningFactor::HighSectorGrowth, growth),
        (local_prod <= dec!(30), WinningFactor::OpenMarket, dec!(100) - local_prod),
        (gdp >= dec!(30000), WinningFactor::HighPurchasingPower, gdp / dec!(1000)),
    ];

    let mut best: Option<(WinningFactor, Decimal)> = None;
    for (qualifies, factor, strength) in candidates {
        if !qualifies {
            continue;
        }
        match best {
            Some((_, s)) if s >= strength => {}
            _ => best = Some((factor, strength)),
        }
    }
    best.map(|(factor, _)| factor)
        .unwrap_or(WinningFactor::BalancedProfile)
}

/// The `limit` most suitable countries, in descending suitability.
/// Equal scores keep the cohort's input order.
pub fn top_recommendations(cohort: &[CountryMetricSnapshot], limit: usize) -> Vec<TopRecommendation> {
    let mut scored: Vec<(&CountryMetricSnapshot, Score)> =
        cohort.iter().map(|c| (c, suitability_score(c))).collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (c, score))| {
            let factor = winning_factor(c);
            TopRecommendation {
                rank: i + 1,
                medal: Medal::for_position(i),
                country_id: c.country_id,
                name: c.name.clone(),
                suitability_score: round_tenth(score),
                winning_factor: factor,
                winning_factor_label: factor.label().to_string(),
            }
        })
        .collect()
}
