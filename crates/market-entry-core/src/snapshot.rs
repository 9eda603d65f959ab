//! Per-country metric record supplied by the external data layer.
//!
//! Every numeric field is optional and read leniently: JSON numbers and
//! numeric strings are accepted, anything else is stored as absent. The
//! accessor methods apply the engine-wide fallbacks so scorers never see a
//! missing value.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::{bounded, number_from_value};

/// LPI assumed when the index is missing or unreadable.
pub const DEFAULT_LPI: Decimal = dec!(2.5);
/// Customs dwell time (days) assumed when missing or unreadable.
pub const DEFAULT_CUSTOMS_DAYS: Decimal = dec!(15);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Immutable per-country (and per-sector) metric snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryMetricSnapshot {
    /// Stable country identifier, also the simulator seed
    #[serde(default, deserialize_with = "lenient_u32")]
    pub country_id: u32,
    /// Display name, the ranker's pre-sort key
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,
    /// Sovereign risk rating code ("AAA".."D")
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub risk_code: Option<String>,

    /// Share of domestic demand covered by local production (%)
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub local_production_pct: Option<Decimal>,
    /// GDP per capita (USD)
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub gdp_per_capita: Option<Decimal>,
    /// Logistics performance index (1-5)
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub lpi: Option<Decimal>,
    /// Customs dwell time (days)
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub customs_days: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub inflation_pct: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub population_millions: Option<Decimal>,
    /// Sector growth rate (%)
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub sector_growth_pct: Option<Decimal>,
    /// Number of active trade agreements, derived from `agreements` when absent
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub agreement_count: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub agreements: Vec<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub unemployment_pct: Option<Decimal>,
    /// Real GDP growth (%)
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub gdp_growth_pct: Option<Decimal>,

    /// Region id for the simulator's regional baselines (1-7)
    #[serde(default, deserialize_with = "lenient_opt_u32", skip_serializing_if = "Option::is_none")]
    pub region_id: Option<u32>,
    /// Region display name, the sector summary's grouping key
    #[serde(default, deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Decimal>,

    /// Sector imports (USD millions), ranker only
    #[serde(default, deserialize_with = "lenient_decimal", skip_serializing_if = "Option::is_none")]
    pub sector_imports_musd: Option<Decimal>,
    /// Sector investment (USD millions), ranker only
    #[serde(default, deserialize_with = "lenient_decimal", skip_serializing_if = "Option::is_none")]
    pub sector_investment_musd: Option<Decimal>,
    /// Export container cost (USD), ranker only
    #[serde(default, deserialize_with = "lenient_decimal", skip_serializing_if = "Option::is_none")]
    pub container_cost_usd: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Fallback-applying accessors
// ---------------------------------------------------------------------------

impl CountryMetricSnapshot {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn risk(&self) -> Option<&str> {
        self.risk_code.as_deref()
    }

    pub fn local_production(&self) -> Decimal {
        or_fallback(self.local_production_pct, Decimal::ZERO)
    }

    pub fn gdp(&self) -> Decimal {
        or_fallback(self.gdp_per_capita, Decimal::ZERO)
    }

    pub fn lpi_or_default(&self) -> Decimal {
        or_fallback(self.lpi, DEFAULT_LPI)
    }

    pub fn customs_or_default(&self) -> Decimal {
        or_fallback(self.customs_days, DEFAULT_CUSTOMS_DAYS)
    }

    pub fn inflation(&self) -> Decimal {
        or_fallback(self.inflation_pct, Decimal::ZERO)
    }

    pub fn population(&self) -> Decimal {
        or_fallback(self.population_millions, Decimal::ZERO)
    }

    pub fn sector_growth(&self) -> Decimal {
        or_fallback(self.sector_growth_pct, Decimal::ZERO)
    }

    /// Explicit count when present, otherwise the length of the agreement list.
    pub fn agreements_count(&self) -> Decimal {
        self.agreement_count
            .and_then(bounded)
            .unwrap_or_else(|| Decimal::from(self.agreements.len() as u64))
    }

    pub fn unemployment(&self) -> Decimal {
        or_fallback(self.unemployment_pct, Decimal::ZERO)
    }

    pub fn gdp_growth(&self) -> Decimal {
        or_fallback(self.gdp_growth_pct, Decimal::ZERO)
    }

    pub fn sector_imports(&self) -> Decimal {
        or_fallback(self.sector_imports_musd, Decimal::ZERO)
    }

    pub fn sector_investment(&self) -> Decimal {
        or_fallback(self.sector_investment_musd, Decimal::ZERO)
    }

    pub fn container_cost(&self) -> Decimal {
        or_fallback(self.container_cost_usd, Decimal::ZERO)
    }

    /// Latitude in degrees, absent when outside [-90, 90].
    pub fn lat(&self) -> Option<Decimal> {
        self.latitude.filter(|v| v.abs() <= dec!(90))
    }

    /// Longitude in degrees, absent when outside [-180, 180].
    pub fn lon(&self) -> Option<Decimal> {
        self.longitude.filter(|v| v.abs() <= dec!(180))
    }
}

/// Stored value when within the input bounds, otherwise the fallback.
fn or_fallback(value: Option<Decimal>, fallback: Decimal) -> Decimal {
    value.and_then(bounded).unwrap_or(fallback)
}

// ---------------------------------------------------------------------------
// Lenient deserializers
// ---------------------------------------------------------------------------

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(number_from_value(&value).and_then(decimal_to_u32))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_u32(deserializer)?.unwrap_or(0))
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(string_from_value(value))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn string_from_value(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items.into_iter().filter_map(string_from_value).collect())
}

fn decimal_to_u32(value: Decimal) -> Option<u32> {
    use rust_decimal::prelude::ToPrimitive;
    if value.is_sign_negative() || !value.fract().is_zero() {
        return None;
    }
    value.to_u32()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_strings_are_accepted() {
        let snap: CountryMetricSnapshot = serde_json::from_value(json!({
            "country_id": "12",
            "name": "Germany",
            "gdp_per_capita": "48500.5",
            "lpi": 4.1,
        }))
        .unwrap();
        assert_eq!(snap.country_id, 12);
        assert_eq!(snap.gdp(), dec!(48500.5));
        assert_eq!(snap.lpi_or_default(), dec!(4.1));
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let snap: CountryMetricSnapshot = serde_json::from_value(json!({
            "name": "Nowhere",
            "lpi": "n/a",
            "customs_days": null,
            "inflation_pct": {"bad": true},
        }))
        .unwrap();
        assert_eq!(snap.lpi_or_default(), dec!(2.5));
        assert_eq!(snap.customs_or_default(), dec!(15));
        assert_eq!(snap.inflation(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_is_kept_not_replaced() {
        let snap: CountryMetricSnapshot = serde_json::from_value(json!({
            "customs_days": 0,
            "lpi": 0,
        }))
        .unwrap();
        assert_eq!(snap.customs_or_default(), Decimal::ZERO);
        assert_eq!(snap.lpi_or_default(), Decimal::ZERO);
    }

    #[test]
    fn test_agreement_count_from_list() {
        let snap: CountryMetricSnapshot = serde_json::from_value(json!({
            "agreements": ["EU Customs Union", "FTA"],
        }))
        .unwrap();
        assert_eq!(snap.agreements_count(), dec!(2));

        let explicit: CountryMetricSnapshot = serde_json::from_value(json!({
            "agreement_count": 4,
            "agreements": ["FTA"],
        }))
        .unwrap();
        assert_eq!(explicit.agreements_count(), dec!(4));
    }

    #[test]
    fn test_bad_region_id_is_absent() {
        let snap: CountryMetricSnapshot = serde_json::from_value(json!({
            "region_id": -3,
        }))
        .unwrap();
        assert_eq!(snap.region_id, None);
        let snap: CountryMetricSnapshot = serde_json::from_value(json!({
            "region_id": "2",
        }))
        .unwrap();
        assert_eq!(snap.region_id, Some(2));
    }

    #[test]
    fn test_non_string_labels_are_read_leniently() {
        let snap: CountryMetricSnapshot = serde_json::from_value(json!({
            "name": 42,
            "risk_code": 5,
            "iso_code": {"alpha2": "DE"},
        }))
        .unwrap();
        assert_eq!(snap.name, "42");
        assert_eq!(snap.risk(), Some("5"));
        assert_eq!(snap.iso_code, None);

        let snap: CountryMetricSnapshot = serde_json::from_value(json!({
            "name": [1, 2],
            "risk_code": true,
        }))
        .unwrap();
        assert_eq!(snap.name, "");
        assert_eq!(snap.risk(), None);
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let snap: CountryMetricSnapshot = serde_json::from_value(json!({
            "lpi": "9e27",
            "local_production_pct": "-79228162514264337593543950335",
            "latitude": 400,
        }))
        .unwrap();
        assert_eq!(snap.lpi_or_default(), DEFAULT_LPI);
        assert_eq!(snap.local_production(), Decimal::ZERO);
        assert_eq!(snap.lat(), None);

        let built = CountryMetricSnapshot {
            gdp_per_capita: Some(Decimal::MAX),
            agreement_count: Some(Decimal::MIN),
            ..Default::default()
        };
        assert_eq!(built.gdp(), Decimal::ZERO);
        assert_eq!(built.agreements_count(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_document_is_all_defaults() {
        let snap: CountryMetricSnapshot = serde_json::from_value(json!({})).unwrap();
        assert_eq!(snap, CountryMetricSnapshot::default());
        assert!(snap.agreements.is_empty());
    }
}
