use super::{PhaseInterval, ProjectRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One project assembled for the downstream stages: the normalized record,
/// its display label, and the intervals derived from its milestones.
///
/// The label is the project's identity from here on. Rows that render to
/// the same label are indistinguishable to filtering and aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSchedule {
    pub record: ProjectRecord,
    pub label: String,
    pub intervals: Vec<PhaseInterval>,
}

impl ProjectSchedule {
    /// True when at least one interval contains `date`. A project with no
    /// dated phases is never active.
    pub fn active_on(&self, date: NaiveDate) -> bool {
        self.intervals.iter().any(|interval| interval.contains(date))
    }
}
