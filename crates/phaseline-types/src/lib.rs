pub mod domain;
pub mod metrics;
pub mod query;

pub use domain::*;
pub use metrics::PhaseMetrics;
pub use query::{FilterCriteria, SortKey};
