//! Deterministic synthetic metrics for signals the data source does not carry,
//! and the strategic playbook derived from them.

pub mod geo;
pub mod metrics;
pub mod playbook;
pub mod seed;

pub use metrics::{classify, simulate_all, AdvancedMetrics, MetricKind, SimulatedMetric};
pub use playbook::{strategic_playbook, StrategicCall};
