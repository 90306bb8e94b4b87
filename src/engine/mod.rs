//! Statistics and classification engine.
//!
//! Pure functions over borrowed readings: no storage, no shared state. Callers
//! recompute on every change instead of caching results.

pub mod bands;
pub mod classification;
pub mod config;
pub mod index;
pub mod period;
pub mod statistics;
pub mod trend;

pub use bands::{MetricAssessment, ReadingBand};
pub use classification::{classify, ClassificationResult, ControlTier};
pub use config::{PresetKind, ThresholdPreset, VariabilityMeasure};
pub use index::{compute_index, compute_index_last_days, IndexResult};
pub use period::{combine, select, select_last_days, Period};
pub use statistics::{compute_statistics, StatisticsResult};
pub use trend::{detect_trend, Trend};
