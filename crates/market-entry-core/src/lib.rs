pub mod error;
pub mod normalize;
pub mod profiles;
pub mod rating;
pub mod snapshot;
pub mod types;

#[cfg(feature = "decisions")]
pub mod decisions;

#[cfg(feature = "ranking")]
pub mod ranking;

#[cfg(feature = "simulator")]
pub mod simulator;

pub use error::MarketEntryError;
pub use snapshot::CountryMetricSnapshot;
pub use types::*;

#[cfg(feature = "decisions")]
pub use decisions::{calculate_global_score, get_all_decisions};

#[cfg(feature = "ranking")]
pub use ranking::get_country_rankings;

/// Standard result type for all market-entry operations
pub type MarketEntryResult<T> = Result<T, MarketEntryError>;
