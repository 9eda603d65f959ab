pub mod decisions;
pub mod profiles;
pub mod ranking;
pub mod simulator;

use market_entry_core::profiles::SectorRef;

/// A `--sector` flag: a number is a sector id, anything else a free-text name.
pub fn parse_sector(raw: &str) -> SectorRef {
    match raw.trim().parse::<u32>() {
        Ok(id) => SectorRef::Id(id),
        Err(_) => SectorRef::Name(raw.to_string()),
    }
}

/// Microseconds elapsed since `start`.
pub fn elapsed_us(start: std::time::Instant) -> u64 {
    start.elapsed().as_micros() as u64
}
