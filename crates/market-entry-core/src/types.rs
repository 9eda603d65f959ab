use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A score on the 0-100 scale.
pub type Score = Decimal;

/// Weights expressed as relative units or percentages, never as fractions of 1.
pub type Weight = Decimal;

/// Largest magnitude a raw input may have. Anything beyond reads as absent.
pub const MAX_INPUT_MAGNITUDE: Decimal = dec!(1000000000000);

/// Largest weight any caller-supplied weight is capped at.
pub const MAX_WEIGHT: Weight = dec!(1000000);

/// Verdict bucket shared by every decision and the global score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Positive,
    Neutral,
    Negative,
}

impl Verdict {
    /// score >= 70 positive, 40 <= score < 70 neutral, below 40 negative.
    pub fn from_score(score: Score) -> Self {
        if score >= dec!(70) {
            Verdict::Positive
        } else if score >= dec!(40) {
            Verdict::Neutral
        } else {
            Verdict::Negative
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Positive => "Positive",
            Verdict::Neutral => "Neutral",
            Verdict::Negative => "Negative",
        }
    }
}

/// Number of decisions that landed in each verdict bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl BucketCounts {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Positive => self.positive += 1,
            Verdict::Neutral => self.neutral += 1,
            Verdict::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative
    }
}

// ---------------------------------------------------------------------------
// Parse-or-default numeric coercion
// ---------------------------------------------------------------------------

/// Parse a raw numeric field. Accepts plain decimals and scientific notation,
/// surrounding whitespace is ignored. Values beyond [`MAX_INPUT_MAGNITUDE`]
/// are unreadable.
pub fn parse_number(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
        .and_then(bounded)
}

/// `Some(value)` when it lies within [`MAX_INPUT_MAGNITUDE`].
pub fn bounded(value: Decimal) -> Option<Decimal> {
    (value.abs() <= MAX_INPUT_MAGNITUDE).then_some(value)
}

/// Hold a weight within `[0, MAX_WEIGHT]`.
pub fn cap_weight(weight: Weight) -> Weight {
    clamp(weight, Decimal::ZERO, MAX_WEIGHT)
}

/// Parse a raw numeric field, falling back to `fallback` when it cannot be read.
/// This is the single coercion policy of the engine: bad input never fails.
pub fn parse_number_or(raw: &str, fallback: Decimal) -> Decimal {
    parse_number(raw).unwrap_or(fallback)
}

/// Read a JSON value as a number. Numbers and numeric strings are accepted;
/// anything else is treated as absent.
pub fn number_from_value(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(n) => parse_number(&n.to_string()),
        serde_json::Value::String(s) => parse_number(s),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Rounding helpers
// ---------------------------------------------------------------------------

/// Round to a whole point, halves away from zero (2.5 -> 3).
pub fn round_score(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to one decimal place, halves away from zero.
pub fn round_tenth(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamp a value between min and max.
pub fn clamp(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamp onto the 0-100 score scale.
pub fn clamp_score(value: Decimal) -> Score {
    clamp(value, Decimal::ZERO, dec!(100))
}

// ---------------------------------------------------------------------------
// Output envelope
// ---------------------------------------------------------------------------

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(Verdict::from_score(dec!(70)), Verdict::Positive);
        assert_eq!(Verdict::from_score(dec!(69)), Verdict::Neutral);
        assert_eq!(Verdict::from_score(dec!(40)), Verdict::Neutral);
        assert_eq!(Verdict::from_score(dec!(39)), Verdict::Negative);
        assert_eq!(Verdict::from_score(dec!(100)), Verdict::Positive);
        assert_eq!(Verdict::from_score(Decimal::ZERO), Verdict::Negative);
    }

    #[test]
    fn test_parse_number_or_valid() {
        assert_eq!(parse_number_or("12.5", Decimal::ZERO), dec!(12.5));
        assert_eq!(parse_number_or("  -3 ", Decimal::ZERO), dec!(-3));
        assert_eq!(parse_number_or("1e3", Decimal::ZERO), dec!(1000));
    }

    #[test]
    fn test_parse_number_or_falls_back() {
        assert_eq!(parse_number_or("n/a", Decimal::ZERO), Decimal::ZERO);
        assert_eq!(parse_number_or("", dec!(2.5)), dec!(2.5));
        assert_eq!(parse_number_or("twelve", dec!(15)), dec!(15));
    }

    #[test]
    fn test_out_of_range_numbers_are_unreadable() {
        assert_eq!(parse_number("9e27"), None);
        assert_eq!(parse_number("-79228162514264337593543950335"), None);
        assert_eq!(parse_number("1000000000000"), Some(MAX_INPUT_MAGNITUDE));
        assert_eq!(parse_number_or("1e13", dec!(2.5)), dec!(2.5));
        assert_eq!(number_from_value(&serde_json::json!(1e20)), None);
    }

    #[test]
    fn test_cap_weight() {
        assert_eq!(cap_weight(Decimal::MAX), MAX_WEIGHT);
        assert_eq!(cap_weight(Decimal::MIN), Decimal::ZERO);
        assert_eq!(cap_weight(dec!(3)), dec!(3));
    }

    #[test]
    fn test_number_from_value() {
        assert_eq!(number_from_value(&serde_json::json!(4.2)), Some(dec!(4.2)));
        assert_eq!(number_from_value(&serde_json::json!("7")), Some(dec!(7)));
        assert_eq!(number_from_value(&serde_json::json!(true)), None);
        assert_eq!(number_from_value(&serde_json::Value::Null), None);
    }

    #[test]
    fn test_round_score_half_away_from_zero() {
        assert_eq!(round_score(dec!(2.5)), dec!(3));
        assert_eq!(round_score(dec!(69.5)), dec!(70));
        assert_eq!(round_score(dec!(69.49)), dec!(69));
        assert_eq!(round_tenth(dec!(47.25)), dec!(47.3));
    }

    #[test]
    fn test_bucket_counts() {
        let mut counts = BucketCounts::default();
        counts.record(Verdict::Positive);
        counts.record(Verdict::Negative);
        counts.record(Verdict::Negative);
        assert_eq!(counts.positive, 1);
        assert_eq!(counts.negative, 2);
        assert_eq!(counts.total(), 3);
    }
}
