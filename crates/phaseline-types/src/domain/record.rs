use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The five ordered milestone dates bounding a project's design phases:
/// programming start, schematic design start, design development start,
/// construction document start, permit set delivery.
///
/// Milestone `i` starts phase `i`; milestone `i + 1` is that phase's
/// implicit end. Any of the five may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilestoneDates([Option<NaiveDate>; 5]);

impl MilestoneDates {
    /// Number of milestone positions.
    pub const COUNT: usize = 5;

    pub fn new(dates: [Option<NaiveDate>; 5]) -> Self {
        Self(dates)
    }

    /// Date at milestone position `index`, if present and in range.
    pub fn get(&self, index: usize) -> Option<NaiveDate> {
        self.0.get(index).copied().flatten()
    }

    /// The first milestone (programming start), used for date ordering.
    pub fn first(&self) -> Option<NaiveDate> {
        self.0[0]
    }

    pub fn as_array(&self) -> &[Option<NaiveDate>; 5] {
        &self.0
    }
}

impl From<[Option<NaiveDate>; 5]> for MilestoneDates {
    fn from(dates: [Option<NaiveDate>; 5]) -> Self {
        Self(dates)
    }
}

/// One normalized row from the project sheet.
///
/// Every field tolerates absence: a row with nothing but a name (or not
/// even that) still flows through the pipeline and simply yields fewer
/// intervals and a degraded label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: Option<String>,
    /// Literal string form of the project number cell. Numeric cells keep
    /// their source rendering here ("42.0" stays "42.0"); display
    /// normalization happens when the label is built.
    pub number: Option<String>,
    pub manager: Option<String>,
    pub milestones: MilestoneDates,
}
