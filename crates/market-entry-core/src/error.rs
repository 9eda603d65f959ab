use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketEntryError {
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error(
        "Consistency violation: global score {global_score} differs from expected mean {expected} by more than {tolerance}"
    )]
    ConsistencyViolation {
        global_score: Decimal,
        expected: Decimal,
        tolerance: Decimal,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for MarketEntryError {
    fn from(e: serde_json::Error) -> Self {
        MarketEntryError::SerializationError(e.to_string())
    }
}
