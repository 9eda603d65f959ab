//! Great-circle distance from the export hub.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Export hub (Ankara) latitude in degrees.
pub const HUB_LATITUDE: Decimal = dec!(39.9334);
/// Export hub (Ankara) longitude in degrees.
pub const HUB_LONGITUDE: Decimal = dec!(32.8597);
/// Mean Earth radius in km.
pub const EARTH_RADIUS_KM: Decimal = dec!(6371);

fn to_radians(degrees: Decimal) -> Decimal {
    degrees * Decimal::PI / dec!(180)
}

/// Arctangent by argument halving then a Taylor series. Input must be in [-1, 1].
fn atan_unit(x: Decimal) -> Decimal {
    // atan(x) = 2·atan(x / (1 + sqrt(1 + x²))) until |x| < 0.1
    let mut x = x;
    let mut factor = Decimal::ONE;
    while x.abs() > dec!(0.1) {
        let root = (Decimal::ONE + x * x).sqrt().unwrap_or(Decimal::ONE);
        x /= Decimal::ONE + root;
        factor *= dec!(2);
    }
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    for n in 1..15u32 {
        term = -term * x2;
        sum += term / Decimal::from(2 * n + 1);
    }
    sum * factor
}

/// atan2 for a non-negative numerator and denominator, in [0, π/2].
fn atan2_non_negative(y: Decimal, x: Decimal) -> Decimal {
    if x.is_zero() {
        return Decimal::HALF_PI;
    }
    if y <= x {
        atan_unit(y / x)
    } else {
        Decimal::HALF_PI - atan_unit(x / y)
    }
}

/// Haversine distance in km between two points given in degrees.
pub fn haversine_km(lat1: Decimal, lon1: Decimal, lat2: Decimal, lon2: Decimal) -> Decimal {
    let d_lat = to_radians(lat2 - lat1);
    let d_lon = to_radians(lon2 - lon1);
    let half_lat = (d_lat / dec!(2)).sin();
    let half_lon = (d_lon / dec!(2)).sin();

    let a = half_lat * half_lat
        + to_radians(lat1).cos() * to_radians(lat2).cos() * half_lon * half_lon;
    let a = a.max(Decimal::ZERO).min(Decimal::ONE);

    let root_a = a.sqrt().unwrap_or(Decimal::ZERO);
    let root_rest = (Decimal::ONE - a).sqrt().unwrap_or(Decimal::ZERO);
    let c = dec!(2) * atan2_non_negative(root_a, root_rest);
    EARTH_RADIUS_KM * c
}

/// Distance from the export hub in km.
pub fn distance_from_hub_km(latitude: Decimal, longitude: Decimal) -> Decimal {
    haversine_km(HUB_LATITUDE, HUB_LONGITUDE, latitude, longitude)
}
