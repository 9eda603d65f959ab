use market_entry_core::simulator::{classify, simulate_all, strategic_playbook, MetricKind};
use market_entry_core::CountryMetricSnapshot;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn turkey_neighbour(id: u32) -> CountryMetricSnapshot {
    CountryMetricSnapshot {
        country_id: id,
        name: "Neighbour".into(),
        risk_code: Some("BB".into()),
        gdp_per_capita: Some(dec!(14000)),
        population_millions: Some(dec!(10)),
        local_production_pct: Some(dec!(40)),
        lpi: Some(dec!(3.2)),
        customs_days: Some(dec!(6)),
        inflation_pct: Some(dec!(4)),
        region_id: Some(1),
        latitude: Some(dec!(42.7)),
        longitude: Some(dec!(23.3)),
        ..Default::default()
    }
}

#[test]
fn test_same_country_same_metrics() {
    let a = simulate_all(&turkey_neighbour(359));
    let b = simulate_all(&turkey_neighbour(359));
    assert_eq!(a, b);
}

#[test]
fn test_different_countries_draw_different_jitter() {
    let distinct = (1..=20)
        .map(|id| simulate_all(&turkey_neighbour(id)).regulatory.value)
        .collect::<std::collections::BTreeSet<_>>();
    assert!(distinct.len() > 1);
}

#[test]
fn test_nearby_country_is_near_the_hub() {
    let m = simulate_all(&turkey_neighbour(359));
    // Sofia is about 800 km from Ankara
    assert!(m.distance.value > dec!(600) && m.distance.value < dec!(1000), "{:?}", m.distance);
    assert_eq!(m.distance.level, "near");
}

#[test]
fn test_playbook_is_seven_calls() {
    let s = turkey_neighbour(359);
    let calls = strategic_playbook(&s, &simulate_all(&s));
    assert_eq!(calls.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 7]);
    for c in &calls {
        assert!(!c.decision.is_empty());
        assert!(!c.detail.is_empty(), "{}", c.title);
    }
    // 800 km with LPI 3.2
    assert_eq!(calls[2].decision, "Road/Rail");
}

#[test]
fn test_metrics_serialize_with_kind_names() {
    let m = simulate_all(&turkey_neighbour(1));
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["youth"]["kind"], "youth_ratio");
    assert_eq!(v["ease_of_business"]["kind"], "ease_of_business");
}

proptest! {
    #[test]
    fn prop_simulation_is_deterministic_and_bounded(
        id in any::<u32>(),
        region in 0u32..9,
        gdp in 0i64..150_000,
        pop in 0i64..1500,
    ) {
        let s = CountryMetricSnapshot {
            country_id: id,
            region_id: Some(region),
            gdp_per_capita: Some(Decimal::from(gdp)),
            population_millions: Some(Decimal::from(pop)),
            ..Default::default()
        };
        let m = simulate_all(&s);
        prop_assert_eq!(&m, &simulate_all(&s));

        for metric in m.as_array() {
            prop_assert!(metric.value >= Decimal::ZERO);
            prop_assert!(metric.value.fract().is_zero());
            let (level, label, strategy) = classify(metric.kind, metric.value);
            prop_assert_eq!(&metric.level, &level);
            prop_assert_eq!(&metric.label, &label);
            prop_assert_eq!(&metric.strategy, &strategy);
        }
        prop_assert!(m.regulatory.value <= dec!(100));
        prop_assert!(m.digital.value >= dec!(15) && m.digital.value <= dec!(95));
        prop_assert!(m.tax.value >= dec!(5) && m.tax.value <= dec!(40));
        prop_assert!(m.youth.value >= dec!(20) && m.youth.value <= dec!(70));
        prop_assert!(m.distance.value <= dec!(20016));
        prop_assert_eq!(m.youth.kind, MetricKind::YouthRatio);
    }
}
