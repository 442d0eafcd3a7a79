use super::Phase;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One derived phase interval for a project.
///
/// `start <= end` is not guaranteed: milestones entered out of order in the
/// sheet pass through unchanged, so an interval can run backwards. Downstream
/// consumers see the same data the sheet held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseInterval {
    pub project_label: String,
    pub phase: Phase,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PhaseInterval {
    /// Half-open containment: `start <= date < end`. The end date itself
    /// belongs to the next phase.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Interval length in days. Negative when the milestones are out of
    /// order.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn interval(start: NaiveDate, end: NaiveDate) -> PhaseInterval {
        PhaseInterval {
            project_label: "Lab Tower (42)".to_string(),
            phase: Phase::Programming,
            start,
            end,
        }
    }

    #[test]
    fn test_containment_is_half_open() {
        let iv = interval(d(2024, 1, 1), d(2024, 2, 1));
        assert!(iv.contains(d(2024, 1, 1)));
        assert!(iv.contains(d(2024, 1, 31)));
        assert!(!iv.contains(d(2024, 2, 1)));
        assert!(!iv.contains(d(2023, 12, 31)));
    }

    #[test]
    fn test_backwards_interval_contains_nothing() {
        let iv = interval(d(2024, 3, 1), d(2024, 1, 1));
        assert!(!iv.contains(d(2024, 2, 1)));
        assert_eq!(iv.duration_days(), -60);
    }

    #[test]
    fn test_duration_days() {
        let iv = interval(d(2024, 1, 1), d(2024, 2, 1));
        assert_eq!(iv.duration_days(), 31);
    }
}
