//! Sector-level statistics over a cohort: average growth, total import
//! volume, country count and the region that imports the most.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::snapshot::CountryMetricSnapshot;
use crate::types::{bounded, round_score, round_tenth};

/// Region key used when a country carries neither a region name nor an id.
pub const UNGROUPED_REGION: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorSummary {
    /// Distinct countries; unidentified entries (id 0) each count once
    pub country_count: usize,
    /// Mean sector growth (%) over the countries that report it, one decimal
    pub average_growth_pct: Decimal,
    pub total_imports_musd: Decimal,
    /// e.g. "$1.2T", "$845B", "$310M"
    pub total_imports_label: String,
    /// Region with the largest summed imports, `None` for an empty cohort
    pub top_region: Option<String>,
}

pub fn sector_summary(cohort: &[CountryMetricSnapshot]) -> SectorSummary {
    let mut ids = BTreeSet::new();
    let mut unidentified = 0usize;
    for c in cohort {
        if c.country_id == 0 {
            unidentified += 1;
        } else {
            ids.insert(c.country_id);
        }
    }

    let growth: Vec<Decimal> = cohort
        .iter()
        .filter_map(|c| c.sector_growth_pct.and_then(bounded))
        .collect();
    let average_growth_pct = if growth.is_empty() {
        Decimal::ZERO
    } else {
        round_tenth(growth.iter().sum::<Decimal>() / Decimal::from(growth.len() as u64))
    };

    let total_imports_musd: Decimal = cohort.iter().map(CountryMetricSnapshot::sector_imports).sum();

    let summary = SectorSummary {
        country_count: ids.len() + unidentified,
        average_growth_pct,
        total_imports_musd,
        total_imports_label: volume_label(total_imports_musd),
        top_region: top_region(cohort),
    };
    tracing::debug!(
        countries = summary.country_count,
        total_imports = %summary.total_imports_musd,
        top_region = ?summary.top_region,
        "summarised sector cohort"
    );
    summary
}

fn region_key(c: &CountryMetricSnapshot) -> String {
    match (&c.region_name, c.region_id) {
        (Some(name), _) if !name.trim().is_empty() => name.trim().to_string(),
        (_, Some(id)) => format!("Region {id}"),
        _ => UNGROUPED_REGION.to_string(),
    }
}

/// Largest summed imports wins; equal volumes go to the alphabetically first region.
fn top_region(cohort: &[CountryMetricSnapshot]) -> Option<String> {
    let mut volumes: BTreeMap<String, Decimal> = BTreeMap::new();
    for c in cohort {
        *volumes.entry(region_key(c)).or_default() += c.sector_imports();
    }
    let mut best: Option<(String, Decimal)> = None;
    for (region, volume) in volumes {
        match &best {
            Some((_, top)) if volume <= *top => {}
            _ => best = Some((region, volume)),
        }
    }
    best.map(|(region, _)| region)
}

/// Human-readable volume for a USD-millions amount.
pub fn volume_label(musd: Decimal) -> String {
    if musd >= dec!(1000000) {
        format!("${}T", round_tenth(musd / dec!(1000000)))
    } else if musd >= dec!(1000) {
        format!("${}B", round_score(musd / dec!(1000)))
    } else {
        format!("${}M", round_score(musd))
    }
}
