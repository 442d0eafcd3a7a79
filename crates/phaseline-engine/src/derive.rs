use phaseline_types::{Phase, PhaseInterval, ProjectRecord};

/// Derive the phase intervals for one project.
///
/// Phase `i` runs from milestone `i` to milestone `i + 1`. An interval is
/// emitted only when both endpoints are present; the relative order of the
/// two dates is passed through unchecked, so a sheet with out-of-order
/// milestones produces an interval that runs backwards. Output is always in
/// lifecycle order.
pub fn derive_intervals(record: &ProjectRecord, label: &str) -> Vec<PhaseInterval> {
    let mut intervals = Vec::new();
    for phase in Phase::ALL {
        let index = phase.index();
        if let (Some(start), Some(end)) = (
            record.milestones.get(index),
            record.milestones.get(index + 1),
        ) {
            intervals.push(PhaseInterval {
                project_label: label.to_string(),
                phase,
                start,
                end,
            });
        }
    }
    intervals
}
