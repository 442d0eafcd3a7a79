use phaseline_types::{FilterCriteria, ProjectSchedule, SortKey};
use std::cmp::Ordering;

/// True when `schedule` passes every criterion. The three text filters AND
/// together; absent or empty patterns are no-ops.
pub fn matches(schedule: &ProjectSchedule, criteria: &FilterCriteria) -> bool {
    if !matches_folded(schedule.record.name.as_deref(), criteria.name.as_deref()) {
        return false;
    }
    if !matches_literal(schedule.record.number.as_deref(), criteria.number.as_deref()) {
        return false;
    }
    if !matches_folded(
        schedule.record.manager.as_deref(),
        criteria.manager.as_deref(),
    ) {
        return false;
    }
    if let Some(reference) = criteria.active_on {
        if !schedule.active_on(reference) {
            return false;
        }
    }
    true
}

/// Filter the working set, then sort it. Sorting is stable for every key,
/// so rows with equal keys keep their sheet order.
pub fn filter_and_sort(
    schedules: Vec<ProjectSchedule>,
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<ProjectSchedule> {
    let mut kept: Vec<ProjectSchedule> = schedules
        .into_iter()
        .filter(|schedule| matches(schedule, criteria))
        .collect();
    sort_schedules(&mut kept, sort);
    kept
}

pub fn sort_schedules(schedules: &mut [ProjectSchedule], key: SortKey) {
    match key {
        SortKey::ManagerThenName => schedules.sort_by(|a, b| {
            (a.record.manager.as_deref(), a.record.name.as_deref())
                .cmp(&(b.record.manager.as_deref(), b.record.name.as_deref()))
        }),
        SortKey::Name => schedules.sort_by(|a, b| a.record.name.cmp(&b.record.name)),
        SortKey::FirstMilestone => schedules.sort_by(|a, b| {
            absent_last(a.record.milestones.first()).cmp(&absent_last(b.record.milestones.first()))
        }),
        SortKey::NumberNumeric => schedules.sort_by(|a, b| {
            compare_numeric(a.record.number.as_deref(), b.record.number.as_deref())
        }),
    }
}

/// Case-insensitive substring match; an absent value never matches a
/// non-empty pattern.
fn matches_folded(value: Option<&str>, pattern: Option<&str>) -> bool {
    let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
        return true;
    };
    match value {
        Some(v) => v.to_lowercase().contains(&pattern.to_lowercase()),
        None => false,
    }
}

/// Plain substring match over the literal cell text.
fn matches_literal(value: Option<&str>, pattern: Option<&str>) -> bool {
    let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
        return true;
    };
    value.is_some_and(|v| v.contains(pattern))
}

/// Option ordering key with `None` sorted after `Some`.
fn absent_last<T: Ord>(value: Option<T>) -> (bool, Option<T>) {
    (value.is_none(), value)
}

/// Ascending numeric order; values that do not parse as a finite number
/// sort last.
fn compare_numeric(a: Option<&str>, b: Option<&str>) -> Ordering {
    let parse = |value: Option<&str>| {
        value
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|n| n.is_finite())
    };
    match (parse(a), parse(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
