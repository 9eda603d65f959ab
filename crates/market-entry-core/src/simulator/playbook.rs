//! Strategic playbook: seven concrete go-to-market calls derived from a
//! snapshot and its simulated metrics.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::metrics::AdvancedMetrics;
use crate::rating::{is_distressed, risk_fraction};
use crate::snapshot::CountryMetricSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategicCall {
    pub id: u8,
    pub title: String,
    pub decision: String,
    pub reasoning: String,
    /// Channels, adaptations, phases, transit time or terms, depending on the call.
    pub detail: Vec<String>,
}

fn call(id: u8, title: &str, decision: &str, reasoning: &str, detail: &[&str]) -> StrategicCall {
    StrategicCall {
        id,
        title: title.to_string(),
        decision: decision.to_string(),
        reasoning: reasoning.to_string(),
        detail: detail.iter().map(|d| d.to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Individual calls
// ---------------------------------------------------------------------------

fn entry_mode(c: &CountryMetricSnapshot, m: &AdvancedMetrics) -> StrategicCall {
    let (decision, reasoning, risk) =
        if m.regulatory.value > dec!(60) && m.distance.value > dec!(5000) {
            (
                "Distributor / Franchise",
                "High regulatory friction and distance call for a local partner.",
                "medium risk",
            )
        } else if m.regulatory.value < dec!(40) && c.sector_growth() > dec!(5) {
            (
                "Direct Investment (FDI)",
                "Low barriers and strong sector growth support direct entry.",
                "low risk",
            )
        } else {
            (
                "Joint Venture",
                "Share entry risk with a local partner.",
                "medium risk",
            )
        };
    call(1, "Entry Mode", decision, reasoning, &[risk])
}

fn pricing(c: &CountryMetricSnapshot, m: &AdvancedMetrics) -> StrategicCall {
    let competition = m.competition.value;
    let (decision, reasoning, multiplier) = if c.gdp() > dec!(40000) && competition < dec!(50) {
        (
            "Skimming (Premium)",
            "High income and thin competition support a premium price.",
            "1.5x",
        )
    } else if competition > dec!(70) {
        (
            "Penetration",
            "Crowded market; win share with aggressive pricing.",
            "0.8x",
        )
    } else {
        (
            "Value-based",
            "Target the mid segment on a quality/price balance.",
            "1.0x",
        )
    };
    call(2, "Pricing Strategy", decision, reasoning, &[multiplier])
}

fn logistics_channel(c: &CountryMetricSnapshot, m: &AdvancedMetrics) -> StrategicCall {
    let (decision, reasoning, transit) = if c.lpi_or_default() < dec!(3) {
        (
            "Air cargo (avoid port delays)",
            "Weak logistics performance makes sea and road unreliable.",
            "3-7 days",
        )
    } else if m.distance.value < dec!(3000) {
        (
            "Road/Rail",
            "Short distance and adequate infrastructure favour overland transport.",
            "5-10 days",
        )
    } else {
        (
            "Sea/Rail intermodal",
            "Long distance with solid infrastructure; the cost-effective option.",
            "15-25 days",
        )
    };
    call(3, "Logistics Channel", decision, reasoning, &[transit])
}

fn marketing_focus(m: &AdvancedMetrics) -> StrategicCall {
    let youth = m.youth.value;
    if youth > dec!(50) && m.digital.value > dec!(60) {
        call(
            4,
            "Marketing Focus",
            "Digital/Social",
            "A young, connected population responds to online channels.",
            &["Instagram", "TikTok", "YouTube"],
        )
    } else if youth < dec!(35) {
        call(
            4,
            "Marketing Focus",
            "Traditional",
            "An ageing population relies on broadcast and print.",
            &["TV", "Newspaper", "Radio"],
        )
    } else {
        call(
            4,
            "Marketing Focus",
            "Omnichannel",
            "Mixed demographics need several channels at once.",
            &["Digital", "TV", "OOH"],
        )
    }
}

fn product_adaptation(m: &AdvancedMetrics) -> StrategicCall {
    let cultural = m.cultural.value;
    if cultural < dec!(40) {
        call(
            5,
            "Product Adaptation",
            "Heavy localisation",
            "Low cultural similarity requires extensive adaptation.",
            &["Packaging", "Formulation", "Brand name"],
        )
    } else if cultural > dec!(70) {
        call(
            5,
            "Product Adaptation",
            "Standard global product",
            "High cultural similarity; minimal changes suffice.",
            &["Language"],
        )
    } else {
        call(
            5,
            "Product Adaptation",
            "Moderate adaptation",
            "Partial similarity; localise selectively.",
            &["Packaging", "Language"],
        )
    }
}

fn payment_terms(c: &CountryMetricSnapshot) -> StrategicCall {
    let inflation = c.inflation();
    let (decision, reasoning, terms) = if inflation > dec!(10) || is_distressed(c.risk()) {
        (
            "Hedging / prepayment",
            "High inflation or sovereign distress; protect against currency loss.",
            "LC at sight / Prepayment",
        )
    } else if inflation < dec!(5) && risk_fraction(c.risk()) > dec!(0.6) {
        (
            "Open account",
            "Stable economy; standard trade terms apply.",
            "Net 60-90",
        )
    } else {
        (
            "Letter of credit",
            "Moderate risk; a bank guarantee is advisable.",
            "LC 30-60 days",
        )
    };
    call(6, "Payment Terms", decision, reasoning, &[terms])
}

fn launch_timeline(c: &CountryMetricSnapshot, m: &AdvancedMetrics) -> StrategicCall {
    let ease = m.ease_of_business.value;
    if ease < dec!(40) || c.customs_or_default() > dec!(15) {
        call(
            7,
            "Launch Timeline",
            "Start 6+ months ahead",
            "Heavy bureaucracy needs a long preparation window.",
            &["Research (2 months)", "Legal (2 months)", "Setup (2 months)"],
        )
    } else if ease > dec!(70) {
        call(
            7,
            "Launch Timeline",
            "Fast launch (1-2 months)",
            "An easy business climate allows quick entry.",
            &["Preparation (2 weeks)", "Launch (2 weeks)"],
        )
    } else {
        call(
            7,
            "Launch Timeline",
            "Standard (3-4 months)",
            "A typical business climate with standard lead times.",
            &["Research (1 month)", "Setup (2 months)", "Launch (1 month)"],
        )
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// The seven strategic calls, in fixed order (ids 1-7).
pub fn strategic_playbook(
    snapshot: &CountryMetricSnapshot,
    metrics: &AdvancedMetrics,
) -> [StrategicCall; 7] {
    [
        entry_mode(snapshot, metrics),
        pricing(snapshot, metrics),
        logistics_channel(snapshot, metrics),
        marketing_focus(metrics),
        product_adaptation(metrics),
        payment_terms(snapshot),
        launch_timeline(snapshot, metrics),
    ]
}

/// Whether the entry-mode call recommends working through a local partner.
pub fn needs_local_partner(calls: &[StrategicCall]) -> bool {
    calls
        .iter()
        .find(|c| c.id == 1)
        .map(|c| c.decision != "Direct Investment (FDI)")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use crate::simulator::metrics::{classify, MetricKind, SimulatedMetric};

    fn metric(kind: MetricKind, value: Decimal) -> SimulatedMetric {
        let (level, label, strategy) = classify(kind, value);
        SimulatedMetric {
            kind,
            value,
            level,
            label,
            strategy,
        }
    }

    fn metrics(
        regulatory: Decimal,
        distance: Decimal,
        competition: Decimal,
        youth: Decimal,
        digital: Decimal,
        cultural: Decimal,
        ease: Decimal,
    ) -> AdvancedMetrics {
        AdvancedMetrics {
            regulatory: metric(MetricKind::RegulatoryDifficulty, regulatory),
            cultural: metric(MetricKind::CulturalSimilarity, cultural),
            digital: metric(MetricKind::DigitalAdoption, digital),
            distance: metric(MetricKind::HubDistance, distance),
            tax: metric(MetricKind::CorporateTax, dec!(20)),
            competition: metric(MetricKind::CompetitionIntensity, competition),
            youth: metric(MetricKind::YouthRatio, youth),
            ease_of_business: metric(MetricKind::EaseOfBusiness, ease),
        }
    }

    fn neutral() -> AdvancedMetrics {
        metrics(dec!(50), dec!(4000), dec!(60), dec!(45), dec!(50), dec!(55), dec!(55))
    }

    #[test]
    fn test_ids_in_order() {
        let calls = strategic_playbook(&CountryMetricSnapshot::default(), &neutral());
        let ids: Vec<u8> = calls.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_neutral_defaults() {
        // lpi falls back to 2.5, so air cargo
        let calls = strategic_playbook(&CountryMetricSnapshot::default(), &neutral());
        assert_eq!(calls[0].decision, "Joint Venture");
        assert_eq!(calls[1].decision, "Value-based");
        assert_eq!(calls[2].decision, "Air cargo (avoid port delays)");
        assert_eq!(calls[3].decision, "Omnichannel");
        assert_eq!(calls[4].decision, "Moderate adaptation");
        // inflation 0, unknown risk 0.5: not above 0.6
        assert_eq!(calls[5].decision, "Letter of credit");
        assert_eq!(calls[6].decision, "Standard (3-4 months)");
    }

    #[test]
    fn test_remote_regulated_market_uses_distributor() {
        let m = metrics(dec!(75), dec!(9000), dec!(60), dec!(45), dec!(50), dec!(55), dec!(55));
        let calls = strategic_playbook(&CountryMetricSnapshot::default(), &m);
        assert_eq!(calls[0].decision, "Distributor / Franchise");
        assert!(needs_local_partner(&calls));
    }

    #[test]
    fn test_open_growing_market_uses_fdi() {
        let c = CountryMetricSnapshot {
            sector_growth_pct: Some(dec!(8)),
            ..Default::default()
        };
        let m = metrics(dec!(30), dec!(2000), dec!(60), dec!(45), dec!(50), dec!(55), dec!(55));
        let calls = strategic_playbook(&c, &m);
        assert_eq!(calls[0].decision, "Direct Investment (FDI)");
        assert!(!needs_local_partner(&calls));
    }

    #[test]
    fn test_rich_uncontested_market_skims() {
        let c = CountryMetricSnapshot {
            gdp_per_capita: Some(dec!(55000)),
            lpi: Some(dec!(4)),
            ..Default::default()
        };
        let m = metrics(dec!(50), dec!(2000), dec!(30), dec!(45), dec!(50), dec!(55), dec!(55));
        let calls = strategic_playbook(&c, &m);
        assert_eq!(calls[1].decision, "Skimming (Premium)");
        assert_eq!(calls[1].detail, vec!["1.5x".to_string()]);
        assert_eq!(calls[2].decision, "Road/Rail");
    }

    #[test]
    fn test_young_digital_market_goes_social() {
        let m = metrics(dec!(50), dec!(4000), dec!(80), dec!(60), dec!(75), dec!(30), dec!(80));
        let c = CountryMetricSnapshot {
            lpi: Some(dec!(3.5)),
            customs_days: Some(dec!(5)),
            ..Default::default()
        };
        let calls = strategic_playbook(&c, &m);
        assert_eq!(calls[1].decision, "Penetration");
        assert_eq!(calls[2].decision, "Sea/Rail intermodal");
        assert_eq!(calls[3].decision, "Digital/Social");
        assert_eq!(calls[3].detail.len(), 3);
        assert_eq!(calls[4].decision, "Heavy localisation");
        assert_eq!(calls[6].decision, "Fast launch (1-2 months)");
    }

    #[test]
    fn test_payment_terms() {
        let distressed = CountryMetricSnapshot {
            risk_code: Some("CCC".into()),
            inflation_pct: Some(dec!(3)),
            ..Default::default()
        };
        assert_eq!(payment_terms(&distressed).decision, "Hedging / prepayment");

        let stable = CountryMetricSnapshot {
            risk_code: Some("A".into()),
            inflation_pct: Some(dec!(2)),
            ..Default::default()
        };
        assert_eq!(payment_terms(&stable).decision, "Open account");
        assert_eq!(payment_terms(&stable).detail, vec!["Net 60-90".to_string()]);
    }

    #[test]
    fn test_slow_customs_forces_long_timeline() {
        let c = CountryMetricSnapshot {
            customs_days: Some(dec!(20)),
            ..Default::default()
        };
        let m = metrics(dec!(50), dec!(4000), dec!(60), dec!(45), dec!(50), dec!(55), dec!(85));
        assert_eq!(launch_timeline(&c, &m).decision, "Start 6+ months ahead");
        assert_eq!(launch_timeline(&c, &m).detail.len(), 3);
    }
}
