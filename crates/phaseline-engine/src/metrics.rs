use chrono::NaiveDate;
use phaseline_types::{Phase, PhaseMetrics, ProjectSchedule};
use std::collections::{BTreeMap, BTreeSet};

/// Aggregate counts over the filtered working set.
///
/// Counting is by distinct display label. A label contributes to at most
/// one phase bucket: the first phase in lifecycle order whose interval
/// contains the reference date wins, even when out-of-order milestones make
/// several intervals contain it.
pub fn compute_metrics(schedules: &[ProjectSchedule], reference: NaiveDate) -> PhaseMetrics {
    let mut labels: BTreeSet<&str> = BTreeSet::new();
    let mut first_active_phase: BTreeMap<&str, Phase> = BTreeMap::new();

    for schedule in schedules {
        labels.insert(schedule.label.as_str());
        for interval in &schedule.intervals {
            if interval.contains(reference) {
                first_active_phase
                    .entry(schedule.label.as_str())
                    .and_modify(|phase| {
                        if interval.phase.index() < phase.index() {
                            *phase = interval.phase;
                        }
                    })
                    .or_insert(interval.phase);
            }
        }
    }

    let mut per_phase_active: BTreeMap<Phase, usize> =
        Phase::ALL.iter().map(|phase| (*phase, 0)).collect();
    for phase in first_active_phase.values() {
        *per_phase_active.entry(*phase).or_insert(0) += 1;
    }

    PhaseMetrics {
        total_projects: labels.len(),
        active_today: first_active_phase.len(),
        per_phase_active,
    }
}
