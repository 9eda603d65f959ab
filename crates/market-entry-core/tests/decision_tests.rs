use market_entry_core::decisions::{DecisionGuidance, DecisionKind};
use market_entry_core::{get_all_decisions, CountryMetricSnapshot, Verdict};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixtures
// ===========================================================================

fn snapshot(f: impl FnOnce(&mut CountryMetricSnapshot)) -> CountryMetricSnapshot {
    let mut s = CountryMetricSnapshot::named("Fixture");
    f(&mut s);
    s
}

fn score_of(s: &CountryMetricSnapshot, kind: DecisionKind) -> (Decimal, Verdict, String) {
    let d = kind.score(s);
    (d.score, d.verdict, d.decision_label)
}

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn test_open_aaa_market_is_enter() {
    let s = snapshot(|s| {
        s.risk_code = Some("AAA".into());
        s.local_production_pct = Some(Decimal::ZERO);
    });
    assert_eq!(
        score_of(&s, DecisionKind::MarketEntry),
        (dec!(100), Verdict::Positive, "Enter Market".to_string())
    );
}

#[test]
fn test_pricing_follows_purchasing_power() {
    let rich = snapshot(|s| s.gdp_per_capita = Some(dec!(80000)));
    assert_eq!(
        score_of(&rich, DecisionKind::Pricing),
        (dec!(100), Verdict::Positive, "Premium".to_string())
    );

    let poor = snapshot(|s| s.gdp_per_capita = Some(Decimal::ZERO));
    assert_eq!(
        score_of(&poor, DecisionKind::Pricing),
        (Decimal::ZERO, Verdict::Negative, "Penetration".to_string())
    );
}

#[test]
fn test_hyperinflation_in_default_needs_hedge() {
    let s = snapshot(|s| {
        s.inflation_pct = Some(dec!(30));
        s.risk_code = Some("D".into());
    });
    assert_eq!(
        score_of(&s, DecisionKind::Financial),
        (dec!(3), Verdict::Negative, "Hard-currency hedge required".to_string())
    );
    match DecisionKind::Financial.score(&s).guidance {
        DecisionGuidance::Financial { hedging_required, .. } => assert!(hedging_required),
        other => panic!("unexpected guidance {other:?}"),
    }
}

// ===========================================================================
// Shape
// ===========================================================================

#[test]
fn test_decisions_are_ordered_and_bounded() {
    let s = snapshot(|s| {
        s.risk_code = Some("BBB".into());
        s.gdp_per_capita = Some(dec!(23000));
        s.lpi = Some(dec!(3.2));
        s.customs_days = Some(dec!(7));
        s.inflation_pct = Some(dec!(6));
        s.population_millions = Some(dec!(60));
        s.sector_growth_pct = Some(dec!(4));
        s.agreements = vec!["EU-CU".into(), "EFTA".into()];
    });
    let decisions = get_all_decisions(&s);

    let ids: Vec<u8> = decisions.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    for d in &decisions {
        assert!(d.score >= Decimal::ZERO && d.score <= dec!(100), "{}: {}", d.title, d.score);
        assert!(d.score.fract().is_zero(), "{}: {}", d.title, d.score);
        assert_eq!(d.verdict, Verdict::from_score(d.score));
        assert!(!d.explanation.is_empty());
    }
}

#[test]
fn test_numeric_strings_score_like_numbers() {
    let typed: CountryMetricSnapshot = serde_json::from_value(serde_json::json!({
        "country_id": 7,
        "name": "Typed",
        "risk_code": "A",
        "gdp_per_capita": 31000,
        "lpi": 3.6,
        "customs_days": 4,
        "inflation_pct": 2.5,
    }))
    .unwrap();
    let stringly: CountryMetricSnapshot = serde_json::from_value(serde_json::json!({
        "country_id": "7",
        "name": "Typed",
        "risk_code": "A",
        "gdp_per_capita": "31000",
        "lpi": "3.6",
        "customs_days": "4",
        "inflation_pct": "2.5",
    }))
    .unwrap();

    let a: Vec<Decimal> = get_all_decisions(&typed).iter().map(|d| d.score).collect();
    let b: Vec<Decimal> = get_all_decisions(&stringly).iter().map(|d| d.score).collect();
    assert_eq!(a, b);
}

#[test]
fn test_decision_serializes_with_camel_case_key() {
    let d = DecisionKind::TradeBarrier.score(&CountryMetricSnapshot::named("X"));
    let v = serde_json::to_value(&d).unwrap();
    assert_eq!(v["key"], "tradeBarrier");
    assert_eq!(v["guidance"]["type"], "trade_barrier");
}
