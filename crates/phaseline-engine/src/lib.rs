// Engine module - the schedule pipeline (normalization, derivation,
// filtering, aggregation). Sits between raw sheet rows and presentation.

pub mod derive;
pub mod filter;
pub mod label;
pub mod metrics;
pub mod normalize;
pub mod schema;

pub use derive::derive_intervals;
pub use filter::{filter_and_sort, matches, sort_schedules};
pub use label::project_label;
pub use metrics::compute_metrics;
pub use normalize::normalize_record;
pub use schema::{ColumnMap, RawRecord};

use chrono::NaiveDate;
use phaseline_types::{FilterCriteria, PhaseInterval, PhaseMetrics, ProjectSchedule, SortKey};
use serde::{Deserialize, Serialize};

/// Terminal output of one pipeline run, for rendering collaborators: the
/// interval rows for a chart, the label list for jump-to controls, and the
/// aggregate metrics for a summary strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub intervals: Vec<PhaseInterval>,
    pub labels: Vec<String>,
    pub metrics: PhaseMetrics,
}

/// Assemble schedules from raw rows: normalize each row, build its label
/// (rows without a name fall back to their 1-based sheet position), derive
/// its intervals.
pub fn assemble_schedules(rows: &[RawRecord], columns: &ColumnMap) -> Vec<ProjectSchedule> {
    rows.iter()
        .enumerate()
        .map(|(index, raw)| {
            let record = normalize_record(raw, columns);
            let fallback = format!("Project {}", index + 1);
            let label = project_label(&record, &fallback);
            let intervals = derive_intervals(&record, &label);
            ProjectSchedule {
                record,
                label,
                intervals,
            }
        })
        .collect()
}

/// Run the full pipeline: assemble, filter, sort, aggregate.
pub fn run_pipeline(
    rows: &[RawRecord],
    columns: &ColumnMap,
    criteria: &FilterCriteria,
    sort: SortKey,
    reference: NaiveDate,
) -> PipelineOutput {
    let schedules = assemble_schedules(rows, columns);
    let kept = filter_and_sort(schedules, criteria, sort);
    let metrics = compute_metrics(&kept, reference);

    PipelineOutput {
        intervals: kept
            .iter()
            .flat_map(|schedule| schedule.intervals.iter().cloned())
            .collect(),
        labels: kept.iter().map(|schedule| schedule.label.clone()).collect(),
        metrics,
    }
}
