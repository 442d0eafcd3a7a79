use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw sheet row: column title to cell value, exactly as the source
/// collaborator handed it over. Unknown columns are carried but ignored.
pub type RawRecord = serde_json::Map<String, Value>;

/// Maps external column titles to the semantic fields of a project record.
///
/// The source sheet is matched by column title, so a retitled sheet only
/// needs an override here; downstream stages never see raw titles. Missing
/// columns degrade to absent fields rather than failing the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub name: String,
    pub number: String,
    pub manager: String,
    /// Milestone column titles in lifecycle order: programming start,
    /// schematic design start, design development start, construction
    /// document start, permit set delivery.
    pub milestones: [String; 5],
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            name: "Project Name".to_string(),
            number: "Project #".to_string(),
            manager: "Design Manager Name".to_string(),
            milestones: [
                "Programming Start Date".to_string(),
                "Schematic Design Start Date".to_string(),
                "Design Development Start Date".to_string(),
                "Construction Document Start Date".to_string(),
                "Permit Set Delivery Date".to_string(),
            ],
        }
    }
}
