use crate::domain::Phase;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate counts over the filtered working set, keyed by display label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseMetrics {
    /// Distinct project labels in the filtered set.
    pub total_projects: usize,
    /// Distinct labels with at least one interval containing the reference
    /// date.
    pub active_today: usize,
    /// Distinct labels per phase, counting each label once under the first
    /// phase (in lifecycle order) active on the reference date. Every phase
    /// is present, zeros included.
    pub per_phase_active: BTreeMap<Phase, usize>,
}

impl PhaseMetrics {
    /// Active-project count for one phase.
    pub fn active_in(&self, phase: Phase) -> usize {
        self.per_phase_active.get(&phase).copied().unwrap_or(0)
    }
}
