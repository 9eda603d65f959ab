//! Min-max normalisation onto the 0-100 score scale.
//!
//! Two range sources feed the normaliser: fixed domain bounds for
//! single-country scoring (see [`domains`]) and cohort-dynamic bounds
//! observed across the countries being ranked (see
//! [`MetricRange::from_positive_samples`]).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{clamp, round_score, Score};

/// Score returned when a range is degenerate (min == max).
pub const NEUTRAL_SCORE: Score = dec!(50);

/// Closed interval a metric is normalised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl MetricRange {
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Range used when a cohort has no usable sample.
    pub const UNIT: MetricRange = MetricRange::new(Decimal::ZERO, Decimal::ONE);

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    /// Cohort-dynamic range: min/max over the strictly positive samples only.
    ///
    /// Zero and negative samples are treated as missing data and never set a
    /// bound. With no positive sample the range falls back to `[0, 1]`.
    pub fn from_positive_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Decimal>,
    {
        let mut bounds: Option<(Decimal, Decimal)> = None;
        for v in samples.into_iter().filter(|v| *v > Decimal::ZERO) {
            bounds = Some(match bounds {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        match bounds {
            Some((min, max)) => MetricRange { min, max },
            None => MetricRange::UNIT,
        }
    }

    /// Position of `value` inside the range as a fraction in `[0, 1]`.
    /// Degenerate ranges yield 0.5.
    pub fn fraction(&self, value: Decimal) -> Decimal {
        if self.is_degenerate() {
            return dec!(0.5);
        }
        let value = clamp(value, self.min.min(self.max), self.max.max(self.min));
        let t = match (value.checked_sub(self.min), self.max.checked_sub(self.min)) {
            (Some(offset), Some(span)) => offset / span,
            // Spans wider than Decimal::MAX are measured in quarters.
            _ => (value / dec!(4) - self.min / dec!(4)) / (self.max / dec!(4) - self.min / dec!(4)),
        };
        clamp(t, Decimal::ZERO, Decimal::ONE)
    }
}

/// Fixed domain bounds used by the single-country decision scorers.
pub mod domains {
    use super::MetricRange;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    pub const GDP_PER_CAPITA: MetricRange = MetricRange::new(Decimal::ZERO, dec!(80000));
    pub const GDP_PER_CAPITA_DIGITAL: MetricRange = MetricRange::new(Decimal::ZERO, dec!(50000));
    pub const LPI: MetricRange = MetricRange::new(dec!(1), dec!(5));
    pub const CUSTOMS_DAYS: MetricRange = MetricRange::new(Decimal::ZERO, dec!(30));
    pub const INFLATION_PCT: MetricRange = MetricRange::new(Decimal::ZERO, dec!(30));
    pub const POPULATION_MILLIONS: MetricRange = MetricRange::new(Decimal::ZERO, dec!(200));
    pub const SECTOR_GROWTH_PCT: MetricRange = MetricRange::new(dec!(-5), dec!(15));
    pub const AGREEMENT_COUNT: MetricRange = MetricRange::new(Decimal::ZERO, dec!(5));
    pub const UNEMPLOYMENT_PCT: MetricRange = MetricRange::new(Decimal::ZERO, dec!(25));
    pub const GDP_GROWTH_PCT: MetricRange = MetricRange::new(dec!(-5), dec!(10));
    pub const SECTOR_INVESTMENT_MUSD: MetricRange = MetricRange::new(Decimal::ZERO, dec!(1000));
}

/// Normalise `value` onto a whole-number 0-100 score.
///
/// The value is clamped to `[min, max]`; `inverse` flips the direction so that
/// lower raw values score higher. A degenerate range (min == max) returns 50.
pub fn normalize(value: Decimal, min: Decimal, max: Decimal, inverse: bool) -> Score {
    normalize_in(value, MetricRange::new(min, max), inverse)
}

/// [`normalize`] against a [`MetricRange`].
pub fn normalize_in(value: Decimal, range: MetricRange, inverse: bool) -> Score {
    if range.is_degenerate() {
        return NEUTRAL_SCORE;
    }
    let t = range.fraction(value);
    let t = if inverse { Decimal::ONE - t } else { t };
    round_score(t * dec!(100))
}

/// Unit-fraction normalisation used by the cohort ranker.
pub fn unit_normalize(value: Decimal, range: MetricRange) -> Decimal {
    range.fraction(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(normalize(dec!(0), dec!(0), dec!(80000), false), dec!(0));
        assert_eq!(normalize(dec!(80000), dec!(0), dec!(80000), false), dec!(100));
        assert_eq!(normalize(dec!(1), dec!(1), dec!(5), false), dec!(0));
        assert_eq!(normalize(dec!(5), dec!(1), dec!(5), false), dec!(100));
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(normalize(dec!(3), dec!(1), dec!(5), false), dec!(50));
        assert_eq!(normalize(dec!(15), dec!(0), dec!(30), true), dec!(50));
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(normalize(dec!(120000), dec!(0), dec!(80000), false), dec!(100));
        assert_eq!(normalize(dec!(-10), dec!(0), dec!(30), false), dec!(0));
        assert_eq!(normalize(dec!(45), dec!(0), dec!(30), true), dec!(0));
    }

    #[test]
    fn test_inverse_is_complement() {
        for v in [dec!(0), dec!(3), dec!(7.5), dec!(12), dec!(29), dec!(30)] {
            let direct = normalize(v, dec!(0), dec!(30), false);
            let inverse = normalize(v, dec!(0), dec!(30), true);
            assert!(
                (direct + inverse - dec!(100)).abs() <= Decimal::ONE,
                "v={v}: {direct} + {inverse}"
            );
        }
    }

    #[test]
    fn test_extreme_bounds_do_not_overflow() {
        assert_eq!(normalize(Decimal::ZERO, Decimal::MIN, Decimal::MAX, false), dec!(50));
        assert_eq!(normalize(Decimal::MAX, Decimal::MIN, Decimal::MAX, false), dec!(100));
        assert_eq!(normalize(Decimal::MIN, Decimal::MIN, Decimal::MAX, true), dec!(100));
        assert_eq!(normalize(Decimal::MAX, dec!(0), dec!(30), false), dec!(100));
    }

    #[test]
    fn test_degenerate_range_is_neutral() {
        assert_eq!(normalize(dec!(7), dec!(3), dec!(3), false), dec!(50));
        assert_eq!(normalize(dec!(-100), dec!(0), dec!(0), true), dec!(50));
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        // 1/8 of 100 = 12.5
        assert_eq!(normalize(dec!(1), dec!(0), dec!(8), false), dec!(13));
    }

    #[test]
    fn test_positive_sample_range() {
        let range = MetricRange::from_positive_samples(vec![dec!(0), dec!(4), dec!(-2), dec!(9), dec!(6)]);
        assert_eq!(range, MetricRange::new(dec!(4), dec!(9)));
    }

    #[test]
    fn test_positive_sample_range_empty_falls_back_to_unit() {
        let range = MetricRange::from_positive_samples(vec![dec!(0), dec!(-1)]);
        assert_eq!(range, MetricRange::UNIT);
        let range = MetricRange::from_positive_samples(Vec::<Decimal>::new());
        assert_eq!(range, MetricRange::UNIT);
    }

    #[test]
    fn test_unit_normalize() {
        let range = MetricRange::new(dec!(2), dec!(4));
        assert_eq!(unit_normalize(dec!(3), range), dec!(0.5));
        assert_eq!(unit_normalize(dec!(10), range), Decimal::ONE);
        assert_eq!(unit_normalize(dec!(0), range), Decimal::ZERO);
        assert_eq!(unit_normalize(dec!(99), MetricRange::new(dec!(4), dec!(4))), dec!(0.5));
    }
}
