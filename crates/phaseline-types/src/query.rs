use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter criteria applied to the working set.
///
/// The three text patterns are substring matches ANDed together; an absent
/// or empty pattern matches everything. `active_on` keeps only projects
/// with at least one interval containing the reference date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub name: Option<String>,
    pub number: Option<String>,
    pub manager: Option<String>,
    pub active_on: Option<NaiveDate>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring filter on the project name.
    pub fn name(mut self, pattern: impl Into<String>) -> Self {
        self.name = Some(pattern.into());
        self
    }

    /// Substring filter on the literal project number text.
    pub fn number(mut self, pattern: impl Into<String>) -> Self {
        self.number = Some(pattern.into());
        self
    }

    /// Case-insensitive substring filter on the design manager.
    pub fn manager(mut self, pattern: impl Into<String>) -> Self {
        self.manager = Some(pattern.into());
        self
    }

    /// Keep only projects with a phase active on `date`.
    pub fn active_on(mut self, date: NaiveDate) -> Self {
        self.active_on = Some(date);
        self
    }
}

/// Total orderings available for the filtered set. Every sort is stable:
/// rows with equal keys keep their sheet order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Ascending by (manager, name); absent values sort first.
    #[default]
    ManagerThenName,
    /// Ascending by name; absent names sort first.
    Name,
    /// Ascending by the first milestone date; undated projects sort last.
    FirstMilestone,
    /// Ascending by numeric value of the project number; non-numeric or
    /// absent numbers sort last.
    NumberNumeric,
}
