use market_entry_core::normalize::{self, domains, MetricRange, NEUTRAL_SCORE};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixed points
// ===========================================================================

#[test]
fn test_range_endpoints_map_to_zero_and_hundred() {
    let cases = [
        domains::GDP_PER_CAPITA,
        domains::LPI,
        domains::CUSTOMS_DAYS,
        domains::SECTOR_GROWTH_PCT,
        domains::GDP_GROWTH_PCT,
    ];
    for range in cases {
        assert_eq!(normalize::normalize_in(range.min, range, false), Decimal::ZERO);
        assert_eq!(normalize::normalize_in(range.max, range, false), dec!(100));
        assert_eq!(normalize::normalize_in(range.min, range, true), dec!(100));
    }
}

#[test]
fn test_degenerate_range_is_neutral() {
    assert_eq!(normalize::normalize(dec!(7), dec!(3), dec!(3), false), NEUTRAL_SCORE);
    assert_eq!(normalize::normalize(dec!(-7), dec!(3), dec!(3), true), dec!(50));
}

#[test]
fn test_negative_domain_lower_bound() {
    // sector growth -5..15: 5% sits in the middle
    assert_eq!(normalize::normalize_in(dec!(5), domains::SECTOR_GROWTH_PCT, false), dec!(50));
}

#[test]
fn test_cohort_range_ignores_zero_and_negative_samples() {
    let range = MetricRange::from_positive_samples([dec!(0), dec!(-3), dec!(12), dec!(4)]);
    assert_eq!(range, MetricRange::new(dec!(4), dec!(12)));
    assert_eq!(normalize::unit_normalize(dec!(8), range), dec!(0.5));
    assert_eq!(MetricRange::from_positive_samples(Vec::new()), MetricRange::UNIT);
}

// ===========================================================================
// Properties
// ===========================================================================

fn decimal(lo: i64, hi: i64) -> impl Strategy<Value = Decimal> {
    (lo..hi).prop_map(|v| Decimal::new(v, 2))
}

proptest! {
    #[test]
    fn prop_normalized_score_is_bounded(
        value in decimal(-10_000_000, 10_000_000),
        min in decimal(-100_000, 100_000),
        span in decimal(1, 1_000_000),
    ) {
        let score = normalize::normalize(value, min, min + span, false);
        prop_assert!(score >= Decimal::ZERO && score <= dec!(100), "score {}", score);
        prop_assert!(score.fract().is_zero());
    }

    #[test]
    fn prop_inverse_is_complement_within_rounding(
        value in decimal(-1_000_000, 1_000_000),
        min in decimal(-10_000, 10_000),
        span in decimal(1, 100_000),
    ) {
        let max = min + span;
        let direct = normalize::normalize(value, min, max, false);
        let inverse = normalize::normalize(value, min, max, true);
        prop_assert!((direct + inverse - dec!(100)).abs() <= Decimal::ONE,
            "direct {} inverse {}", direct, inverse);
    }

    #[test]
    fn prop_normalization_is_monotonic(
        a in decimal(-100_000, 100_000),
        b in decimal(-100_000, 100_000),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let range = domains::CUSTOMS_DAYS;
        prop_assert!(normalize::normalize_in(lo, range, false) <= normalize::normalize_in(hi, range, false));
        prop_assert!(normalize::normalize_in(lo, range, true) >= normalize::normalize_in(hi, range, true));
    }
}
