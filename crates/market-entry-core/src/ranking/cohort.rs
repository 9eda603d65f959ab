use serde::{Deserialize, Serialize};

use crate::normalize::MetricRange;
use crate::snapshot::CountryMetricSnapshot;

/// Per-metric min/max observed across a cohort.
///
/// Only strictly positive samples set a bound; a zero is read as "no data".
/// A metric with no positive sample falls back to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortStats {
    pub sector_imports: MetricRange,
    pub sector_growth: MetricRange,
    pub gdp_per_capita: MetricRange,
    pub lpi: MetricRange,
    pub customs_days: MetricRange,
    pub container_cost: MetricRange,
    pub population: MetricRange,
}

impl CohortStats {
    pub fn from_cohort(cohort: &[CountryMetricSnapshot]) -> Self {
        let range = |f: fn(&CountryMetricSnapshot) -> rust_decimal::Decimal| {
            MetricRange::from_positive_samples(cohort.iter().map(f))
        };
        Self {
            sector_imports: range(CountryMetricSnapshot::sector_imports),
            sector_growth: range(CountryMetricSnapshot::sector_growth),
            gdp_per_capita: range(CountryMetricSnapshot::gdp),
            lpi: range(CountryMetricSnapshot::lpi_or_default),
            customs_days: range(CountryMetricSnapshot::customs_or_default),
            container_cost: range(CountryMetricSnapshot::container_cost),
            population: range(CountryMetricSnapshot::population),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn country(name: &str, imports: Decimal, growth: Decimal) -> CountryMetricSnapshot {
        CountryMetricSnapshot {
            name: name.into(),
            sector_imports_musd: Some(imports),
            sector_growth_pct: Some(growth),
            ..Default::default()
        }
    }

    #[test]
    fn test_ranges_skip_non_positive_samples() {
        let cohort = vec![
            country("A", dec!(120), dec!(-2)),
            country("B", dec!(0), dec!(4)),
            country("C", dec!(800), dec!(9)),
        ];
        let stats = CohortStats::from_cohort(&cohort);
        assert_eq!(stats.sector_imports, MetricRange::new(dec!(120), dec!(800)));
        assert_eq!(stats.sector_growth, MetricRange::new(dec!(4), dec!(9)));
    }

    #[test]
    fn test_missing_metric_falls_back_to_unit_range() {
        let cohort = vec![country("A", dec!(10), dec!(1))];
        let stats = CohortStats::from_cohort(&cohort);
        assert_eq!(stats.container_cost, MetricRange::UNIT);
        assert_eq!(stats.gdp_per_capita, MetricRange::UNIT);
    }

    #[test]
    fn test_fallback_lpi_and_customs_are_samples() {
        let stats = CohortStats::from_cohort(&[CountryMetricSnapshot::named("A")]);
        assert_eq!(stats.lpi, MetricRange::new(dec!(2.5), dec!(2.5)));
        assert_eq!(stats.customs_days, MetricRange::new(dec!(15), dec!(15)));
    }
}
