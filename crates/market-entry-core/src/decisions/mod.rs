//! The seven decision dimensions and their 0-100 scorers.
//!
//! Each dimension is a [`DecisionKind`]; the static [`SCORERS`] table maps a
//! kind to its scoring function. Scores are whole numbers, the verdict and the
//! qualitative label are pure functions of the score.

pub mod global;
pub mod scorers;

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::snapshot::CountryMetricSnapshot;
use crate::types::{Score, Verdict};

pub use global::{
    calculate_global_score, check_consistency, score_cohort, validate_consistency, CohortScore,
    ConsistencyReport, DecisionWeights, GlobalScoreResult, Recommendation, CONSISTENCY_TOLERANCE,
};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DecisionKind {
    #[serde(rename = "marketEntry")]
    MarketEntry,
    #[serde(rename = "pricing")]
    Pricing,
    #[serde(rename = "logistics")]
    Logistics,
    #[serde(rename = "financial")]
    Financial,
    #[serde(rename = "marketing")]
    Marketing,
    #[serde(rename = "tradeBarrier")]
    TradeBarrier,
    #[serde(rename = "investment")]
    InvestmentHorizon,
}

impl DecisionKind {
    pub const ALL: [DecisionKind; 7] = [
        DecisionKind::MarketEntry,
        DecisionKind::Pricing,
        DecisionKind::Logistics,
        DecisionKind::Financial,
        DecisionKind::Marketing,
        DecisionKind::TradeBarrier,
        DecisionKind::InvestmentHorizon,
    ];

    /// 1-based position in the canonical order.
    pub fn id(&self) -> u8 {
        match self {
            DecisionKind::MarketEntry => 1,
            DecisionKind::Pricing => 2,
            DecisionKind::Logistics => 3,
            DecisionKind::Financial => 4,
            DecisionKind::Marketing => 5,
            DecisionKind::TradeBarrier => 6,
            DecisionKind::InvestmentHorizon => 7,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            DecisionKind::MarketEntry => "marketEntry",
            DecisionKind::Pricing => "pricing",
            DecisionKind::Logistics => "logistics",
            DecisionKind::Financial => "financial",
            DecisionKind::Marketing => "marketing",
            DecisionKind::TradeBarrier => "tradeBarrier",
            DecisionKind::InvestmentHorizon => "investment",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DecisionKind::MarketEntry => "Market Entry Strategy",
            DecisionKind::Pricing => "Pricing Strategy",
            DecisionKind::Logistics => "Logistics Strategy",
            DecisionKind::Financial => "Financial Risk Strategy",
            DecisionKind::Marketing => "Marketing Strategy",
            DecisionKind::TradeBarrier => "Trade Barrier Analysis",
            DecisionKind::InvestmentHorizon => "Investment Horizon",
        }
    }

    /// Run this dimension's scorer.
    pub fn score(&self, snapshot: &CountryMetricSnapshot) -> DecisionScore {
        (scorer_for(*self))(snapshot)
    }
}

/// Dimension-specific payload accompanying a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DecisionGuidance {
    MarketEntry {
        opportunity_score: Score,
    },
    Pricing {
        price_multiplier: Decimal,
    },
    Logistics {
        shipping_mode: String,
        buffer_stock: String,
    },
    Financial {
        payment_terms: String,
        hedging_required: bool,
    },
    Marketing {
        channels: Vec<String>,
    },
    TradeBarrier {
        tariff_advantage: String,
        agreements: Vec<String>,
    },
    InvestmentHorizon {
        horizon: String,
        investment_level: String,
    },
}

/// One scored decision dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionScore {
    pub id: u8,
    pub key: DecisionKind,
    pub title: String,
    /// Whole-number score in [0, 100]
    pub score: Score,
    pub verdict: Verdict,
    pub decision_label: String,
    pub subtitle: String,
    pub recommended_action: String,
    pub explanation: String,
    /// Inputs after fallbacks plus intermediate normalised values
    pub raw_inputs: BTreeMap<String, Decimal>,
    pub guidance: DecisionGuidance,
}

// ---------------------------------------------------------------------------
// Scorer registry
// ---------------------------------------------------------------------------

pub type ScorerFn = fn(&CountryMetricSnapshot) -> DecisionScore;

/// Kind to scorer, in canonical order.
pub static SCORERS: [(DecisionKind, ScorerFn); 7] = [
    (DecisionKind::MarketEntry, scorers::market_entry),
    (DecisionKind::Pricing, scorers::pricing),
    (DecisionKind::Logistics, scorers::logistics),
    (DecisionKind::Financial, scorers::financial),
    (DecisionKind::Marketing, scorers::marketing),
    (DecisionKind::TradeBarrier, scorers::trade_barrier),
    (DecisionKind::InvestmentHorizon, scorers::investment_horizon),
];

fn scorer_for(kind: DecisionKind) -> ScorerFn {
    SCORERS[usize::from(kind.id() - 1)].1
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score all seven dimensions in canonical order.
pub fn get_all_decisions(snapshot: &CountryMetricSnapshot) -> [DecisionScore; 7] {
    std::array::from_fn(|i| (SCORERS[i].1)(snapshot))
}
