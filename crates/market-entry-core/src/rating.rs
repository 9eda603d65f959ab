//! Ordinal sovereign risk codes (AAA..D) and their numeric equivalents.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Score;

/// Score used for codes that are missing or not on the scale.
pub const NEUTRAL_RISK_SCORE: Decimal = dec!(50);

/// Rating notches from best to worst with their 0-100 score.
/// Each notch is five points below the previous one.
static RISK_SCALE: [(&str, Decimal); 20] = [
    ("AAA", dec!(100)),
    ("AA+", dec!(95)),
    ("AA", dec!(90)),
    ("AA-", dec!(85)),
    ("A+", dec!(80)),
    ("A", dec!(75)),
    ("A-", dec!(70)),
    ("BBB+", dec!(65)),
    ("BBB", dec!(60)),
    ("BBB-", dec!(55)),
    ("BB+", dec!(50)),
    ("BB", dec!(45)),
    ("BB-", dec!(40)),
    ("B+", dec!(35)),
    ("B", dec!(30)),
    ("B-", dec!(25)),
    ("CCC", dec!(20)),
    ("CC", dec!(15)),
    ("C", dec!(10)),
    ("D", dec!(5)),
];

const LOW_RISK_CODES: [&str; 7] = ["AAA", "AA+", "AA", "AA-", "A+", "A", "A-"];
const MEDIUM_RISK_CODES: [&str; 5] = ["BBB+", "BBB", "BBB-", "BB+", "BB"];

/// Normalise a raw rating code: trimmed and upper-cased.
fn canonical(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Look up a code on the scale. `None` when the code is not a known notch.
pub fn lookup(code: &str) -> Option<Score> {
    let code = canonical(code);
    RISK_SCALE
        .iter()
        .find(|(notch, _)| *notch == code)
        .map(|(_, score)| *score)
}

/// Risk score on the 0-100 scale (AAA = 100, D = 5). Unknown or missing → 50.
pub fn risk_score(code: Option<&str>) -> Score {
    code.and_then(lookup).unwrap_or(NEUTRAL_RISK_SCORE)
}

/// Risk score as a fraction of one (AAA = 1.00, D = 0.05).
pub fn risk_fraction(code: Option<&str>) -> Decimal {
    risk_score(code) / dec!(100)
}

/// Coarse risk tier used when presenting ranked countries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Medium => "Medium Risk",
            RiskTier::High => "High Risk",
        }
    }
}

/// AAA..A- is low risk, BBB+..BB medium, everything else (including unknown) high.
pub fn risk_tier(code: Option<&str>) -> RiskTier {
    let Some(code) = code.map(canonical) else {
        return RiskTier::High;
    };
    if LOW_RISK_CODES.contains(&code.as_str()) {
        RiskTier::Low
    } else if MEDIUM_RISK_CODES.contains(&code.as_str()) {
        RiskTier::Medium
    } else {
        RiskTier::High
    }
}

/// Codes at or below CCC, treated as distressed by the payment-terms call.
pub fn is_distressed(code: Option<&str>) -> bool {
    matches!(
        code.map(canonical).as_deref(),
        Some("CCC") | Some("CC") | Some("C") | Some("D")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(risk_score(Some("AAA")), dec!(100));
        assert_eq!(risk_score(Some("D")), dec!(5));
        assert_eq!(risk_score(Some("BBB")), dec!(60));
    }

    #[test]
    fn test_scale_steps_are_five_points() {
        for pair in RISK_SCALE.windows(2) {
            assert_eq!(pair[0].1 - pair[1].1, dec!(5), "{} -> {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_unknown_and_missing_are_neutral() {
        assert_eq!(risk_score(Some("ZZZ")), dec!(50));
        assert_eq!(risk_score(Some("")), dec!(50));
        assert_eq!(risk_score(None), dec!(50));
    }

    #[test]
    fn test_code_is_trimmed_and_case_insensitive() {
        assert_eq!(risk_score(Some(" aa- ")), dec!(85));
    }

    #[test]
    fn test_risk_fraction() {
        assert_eq!(risk_fraction(Some("A")), dec!(0.75));
        assert_eq!(risk_fraction(None), dec!(0.5));
    }

    #[test]
    fn test_risk_tiers() {
        assert_eq!(risk_tier(Some("A-")), RiskTier::Low);
        assert_eq!(risk_tier(Some("BBB+")), RiskTier::Medium);
        assert_eq!(risk_tier(Some("BB")), RiskTier::Medium);
        assert_eq!(risk_tier(Some("BB-")), RiskTier::High);
        assert_eq!(risk_tier(Some("unknown")), RiskTier::High);
        assert_eq!(risk_tier(None), RiskTier::High);
    }

    #[test]
    fn test_distressed_codes() {
        assert!(is_distressed(Some("CCC")));
        assert!(is_distressed(Some("d")));
        assert!(!is_distressed(Some("B-")));
        assert!(!is_distressed(None));
    }
}
