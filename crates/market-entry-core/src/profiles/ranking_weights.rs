//! Four-way ranking weight profile (percentages) with caller overrides.
//!
//! Independent of the sector archetype: resolving ranking weights never
//! looks at the sector.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{cap_weight, Weight, MAX_WEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingWeights {
    pub market_potential: Weight,
    pub economic_stability: Weight,
    pub logistics_ease: Weight,
    pub sector_growth: Weight,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            market_potential: dec!(30),
            economic_stability: dec!(25),
            logistics_ease: dec!(25),
            sector_growth: dec!(20),
        }
    }
}

/// Partial weights supplied by a caller. Absent keys keep their default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingWeightOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_potential: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economic_stability: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logistics_ease: Option<Weight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_growth: Option<Weight>,
}

impl RankingWeightOverrides {
    /// Layer `other` on top of `self`; keys present in `other` win.
    pub fn merged_with(self, other: RankingWeightOverrides) -> Self {
        Self {
            market_potential: other.market_potential.or(self.market_potential),
            economic_stability: other.economic_stability.or(self.economic_stability),
            logistics_ease: other.logistics_ease.or(self.logistics_ease),
            sector_growth: other.sector_growth.or(self.sector_growth),
        }
    }
}

impl RankingWeights {
    /// Merge overrides onto the 30/25/25/20 defaults.
    ///
    /// Negative overrides are ignored. Weights are not re-normalised, a total
    /// other than 100 is logged and the ranker clamps the resulting score.
    pub fn resolve(overrides: &RankingWeightOverrides) -> Self {
        let defaults = Self::default();
        let weights = Self {
            market_potential: pick("market_potential", overrides.market_potential, defaults.market_potential),
            economic_stability: pick(
                "economic_stability",
                overrides.economic_stability,
                defaults.economic_stability,
            ),
            logistics_ease: pick("logistics_ease", overrides.logistics_ease, defaults.logistics_ease),
            sector_growth: pick("sector_growth", overrides.sector_growth, defaults.sector_growth),
        };
        if weights.total() != dec!(100) {
            tracing::warn!(total = %weights.total(), "ranking weights do not sum to 100");
        }
        weights
    }

    pub fn total(&self) -> Weight {
        self.capped().iter().sum()
    }

    /// The four weights in composite order, each capped at [`MAX_WEIGHT`].
    pub fn capped(&self) -> [Weight; 4] {
        [
            cap_weight(self.market_potential),
            cap_weight(self.economic_stability),
            cap_weight(self.logistics_ease),
            cap_weight(self.sector_growth),
        ]
    }
}

fn pick(key: &str, value: Option<Weight>, default: Weight) -> Weight {
    match value {
        Some(v) if v < Decimal::ZERO => {
            tracing::warn!(key, value = %v, "ignoring negative ranking weight override");
            default
        }
        Some(v) if v > MAX_WEIGHT => {
            tracing::warn!(key, value = %v, cap = %MAX_WEIGHT, "capping oversized ranking weight override");
            MAX_WEIGHT
        }
        Some(v) => v,
        None => default,
    }
}
