//! Portable per-(country, metric) seeding.
//!
//! `seed = mix64(country_id, fnv1a32(metric_key))` feeds a ChaCha8 stream
//! whose first `u32` is the unit draw. The stream is fixed by the algorithm,
//! so draws are identical on every platform.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 2^32, the divisor mapping a `u32` onto `[0, 1)`.
const U32_RANGE: Decimal = dec!(4294967296);

pub fn fnv1a32(key: &str) -> u32 {
    key.bytes()
        .fold(FNV_OFFSET, |hash, byte| (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME))
}

/// SplitMix64 finaliser over two words.
pub fn mix64(a: u64, b: u64) -> u64 {
    let mut z = a.wrapping_mul(0x9e37_79b9_7f4a_7c15) ^ b;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Uniform draw in `[0, 1)` for a country and metric key.
pub fn unit_draw(country_id: u32, metric_key: &str) -> Decimal {
    let seed = mix64(u64::from(country_id), u64::from(fnv1a32(metric_key)));
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Decimal::from(rng.next_u32()) / U32_RANGE
}

/// Uniform draw in `[lo, hi)`.
pub fn jitter(country_id: u32, metric_key: &str, lo: Decimal, hi: Decimal) -> Decimal {
    lo + unit_draw(country_id, metric_key) * (hi - lo)
}
