//! Sector archetypes: a five-way weight split plus narrative, resolved from a
//! sector id or a sector name.
//!
//! Resolution order:
//! 1. numeric id table (a name that parses as an integer is treated as an id),
//! 2. case-insensitive substring match against the keyword table, first hit wins,
//! 3. otherwise [`SectorArchetype::Balanced`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Weight;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectorArchetype {
    TimeSensitive,
    HeavyGoods,
    HighValue,
    Commodity,
    Balanced,
}

impl SectorArchetype {
    pub const ALL: [SectorArchetype; 5] = [
        SectorArchetype::TimeSensitive,
        SectorArchetype::HeavyGoods,
        SectorArchetype::HighValue,
        SectorArchetype::Commodity,
        SectorArchetype::Balanced,
    ];

    pub fn key(&self) -> &'static str {
        self.profile().key
    }

    pub fn profile(&self) -> &'static ArchetypeProfile {
        match self {
            SectorArchetype::TimeSensitive => &ARCHETYPES[0],
            SectorArchetype::HeavyGoods => &ARCHETYPES[1],
            SectorArchetype::HighValue => &ARCHETYPES[2],
            SectorArchetype::Commodity => &ARCHETYPES[3],
            SectorArchetype::Balanced => &ARCHETYPES[4],
        }
    }
}

/// Percentage weights (sum to 100) across the five archetype dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeWeights {
    pub logistics: Weight,
    pub cost: Weight,
    pub market: Weight,
    pub economy: Weight,
    pub growth: Weight,
}

impl ArchetypeWeights {
    pub fn total(&self) -> Weight {
        self.logistics + self.cost + self.market + self.economy + self.growth
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeProfile {
    pub archetype: SectorArchetype,
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub weights: ArchetypeWeights,
    /// Snapshot fields this archetype emphasises
    pub priority_factors: &'static [&'static str],
    /// Snapshot fields this archetype de-emphasises
    pub ignored_factors: &'static [&'static str],
    pub insight: &'static str,
}

/// A sector reference as supplied by callers: a numeric id or a free-text name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectorRef {
    Id(u32),
    Name(String),
}

impl From<u32> for SectorRef {
    fn from(id: u32) -> Self {
        SectorRef::Id(id)
    }
}

impl From<&str> for SectorRef {
    fn from(name: &str) -> Self {
        SectorRef::Name(name.to_string())
    }
}

impl std::fmt::Display for SectorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SectorRef::Id(id) => write!(f, "{id}"),
            SectorRef::Name(name) => f.write_str(name),
        }
    }
}

/// Narrative view of an archetype for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorInsight {
    pub archetype: SectorArchetype,
    pub name: String,
    pub description: String,
    pub insight: String,
    pub priority_factors: Vec<String>,
    pub ignored_factors: Vec<String>,
}

// ---------------------------------------------------------------------------
// Registries
// ---------------------------------------------------------------------------

static ARCHETYPES: [ArchetypeProfile; 5] = [
    ArchetypeProfile {
        archetype: SectorArchetype::TimeSensitive,
        key: "TIME_SENSITIVE",
        name: "Time Sensitive",
        description: "Logistics speed and customs efficiency take precedence over cost.",
        weights: ArchetypeWeights {
            logistics: dec!(35),
            cost: dec!(10),
            market: dec!(25),
            economy: dec!(15),
            growth: dec!(15),
        },
        priority_factors: &["customs_days", "lpi"],
        ignored_factors: &["container_cost_usd"],
        insight: "Scoring now favours logistics speed and customs efficiency. Cost is secondary.",
    },
    ArchetypeProfile {
        archetype: SectorArchetype::HeavyGoods,
        key: "HEAVY_GOODS",
        name: "Heavy / Bulky Goods",
        description: "Freight cost is critical, dwell time can be tolerated.",
        weights: ArchetypeWeights {
            logistics: dec!(15),
            cost: dec!(35),
            market: dec!(25),
            economy: dec!(10),
            growth: dec!(15),
        },
        priority_factors: &["container_cost_usd", "sector_imports_musd"],
        ignored_factors: &["customs_days"],
        insight: "Scoring now favours freight cost. Customs dwell time is tolerated.",
    },
    ArchetypeProfile {
        archetype: SectorArchetype::HighValue,
        key: "HIGH_VALUE",
        name: "High Value",
        description: "IP protection and purchasing power are the critical factors.",
        weights: ArchetypeWeights {
            logistics: dec!(15),
            cost: dec!(10),
            market: dec!(25),
            economy: dec!(30),
            growth: dec!(20),
        },
        priority_factors: &["risk_code", "gdp_per_capita"],
        ignored_factors: &["container_cost_usd"],
        insight: "Scoring now favours country risk and purchasing power. Premium markets rise.",
    },
    ArchetypeProfile {
        archetype: SectorArchetype::Commodity,
        key: "COMMODITY",
        name: "Commodity / Raw Material",
        description: "High volume at low margin. Cost optimisation is mandatory.",
        weights: ArchetypeWeights {
            logistics: dec!(20),
            cost: dec!(30),
            market: dec!(30),
            economy: dec!(10),
            growth: dec!(10),
        },
        priority_factors: &["sector_imports_musd", "container_cost_usd", "population_millions"],
        ignored_factors: &[],
        insight: "Scoring now favours market volume and cost optimisation. Scale economics decide.",
    },
    ArchetypeProfile {
        archetype: SectorArchetype::Balanced,
        key: "BALANCED",
        name: "Balanced",
        description: "All factors are weighted evenly.",
        weights: ArchetypeWeights {
            logistics: dec!(25),
            cost: dec!(20),
            market: dec!(25),
            economy: dec!(15),
            growth: dec!(15),
        },
        priority_factors: &[],
        ignored_factors: &[],
        insight: "Scoring runs in balanced mode. No factor is emphasised.",
    },
];

/// Sector id ranges: 1-3 time sensitive, 4-7 heavy goods, 8-11 high value, 12-14 commodity.
fn archetype_for_id(id: u32) -> SectorArchetype {
    match id {
        1..=3 => SectorArchetype::TimeSensitive,
        4..=7 => SectorArchetype::HeavyGoods,
        8..=11 => SectorArchetype::HighValue,
        12..=14 => SectorArchetype::Commodity,
        _ => SectorArchetype::Balanced,
    }
}

/// Keyword table, Turkish names first then English. Matched as lower-case substrings.
static SECTOR_KEYWORDS: [(&str, SectorArchetype); 45] = [
    ("gıda", SectorArchetype::TimeSensitive),
    ("gida", SectorArchetype::TimeSensitive),
    ("tekstil", SectorArchetype::TimeSensitive),
    ("moda", SectorArchetype::TimeSensitive),
    ("hazır giyim", SectorArchetype::TimeSensitive),
    ("taze", SectorArchetype::TimeSensitive),
    ("mobilya", SectorArchetype::HeavyGoods),
    ("metal", SectorArchetype::HeavyGoods),
    ("çelik", SectorArchetype::HeavyGoods),
    ("inşaat", SectorArchetype::HeavyGoods),
    ("seramik", SectorArchetype::HeavyGoods),
    ("cam", SectorArchetype::HeavyGoods),
    ("mermer", SectorArchetype::HeavyGoods),
    ("elektronik", SectorArchetype::HighValue),
    ("ilaç", SectorArchetype::HighValue),
    ("medikal", SectorArchetype::HighValue),
    ("otomotiv", SectorArchetype::HighValue),
    ("makine", SectorArchetype::HighValue),
    ("teknoloji", SectorArchetype::HighValue),
    ("kimya", SectorArchetype::Commodity),
    ("kimyasal", SectorArchetype::Commodity),
    ("plastik", SectorArchetype::Commodity),
    ("tarım", SectorArchetype::Commodity),
    ("hammadde", SectorArchetype::Commodity),
    ("food", SectorArchetype::TimeSensitive),
    ("textile", SectorArchetype::TimeSensitive),
    ("fashion", SectorArchetype::TimeSensitive),
    ("fresh", SectorArchetype::TimeSensitive),
    ("furniture", SectorArchetype::HeavyGoods),
    ("steel", SectorArchetype::HeavyGoods),
    ("construction", SectorArchetype::HeavyGoods),
    ("ceramic", SectorArchetype::HeavyGoods),
    ("glass", SectorArchetype::HeavyGoods),
    ("marble", SectorArchetype::HeavyGoods),
    ("electronics", SectorArchetype::HighValue),
    ("pharma", SectorArchetype::HighValue),
    ("medical", SectorArchetype::HighValue),
    ("automotive", SectorArchetype::HighValue),
    ("machinery", SectorArchetype::HighValue),
    ("technology", SectorArchetype::HighValue),
    ("chemical", SectorArchetype::Commodity),
    ("plastic", SectorArchetype::Commodity),
    ("agri", SectorArchetype::Commodity),
    ("raw material", SectorArchetype::Commodity),
    ("commodity", SectorArchetype::Commodity),
];

fn archetype_for_name(name: &str) -> SectorArchetype {
    let lower = name.to_lowercase();
    SECTOR_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, archetype)| *archetype)
        .unwrap_or(SectorArchetype::Balanced)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Resolve a sector reference to its archetype. Never fails: unknown sectors are balanced.
pub fn resolve_archetype(sector: &SectorRef) -> SectorArchetype {
    let archetype = match sector {
        SectorRef::Id(id) => archetype_for_id(*id),
        SectorRef::Name(name) => match name.trim().parse::<u32>() {
            Ok(id) => archetype_for_id(id),
            Err(_) => archetype_for_name(name),
        },
    };
    tracing::debug!(sector = %sector, archetype = archetype.key(), "resolved sector archetype");
    archetype
}

pub fn sector_weights(sector: &SectorRef) -> ArchetypeWeights {
    resolve_archetype(sector).profile().weights
}

pub fn sector_insight(sector: &SectorRef) -> SectorInsight {
    let profile = resolve_archetype(sector).profile();
    SectorInsight {
        archetype: profile.archetype,
        name: profile.name.to_string(),
        description: profile.description.to_string(),
        insight: profile.insight.to_string(),
        priority_factors: profile.priority_factors.iter().map(|f| f.to_string()).collect(),
        ignored_factors: profile.ignored_factors.iter().map(|f| f.to_string()).collect(),
    }
}

/// Every archetype in declaration order.
pub fn all_archetypes() -> &'static [ArchetypeProfile] {
    &ARCHETYPES
}
