use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed stages of a project's design lifecycle.
///
/// The order is significant: each phase ends where the next one begins,
/// and per-phase aggregation breaks ties by this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "Programming")]
    Programming,
    #[serde(rename = "Schematic Design")]
    SchematicDesign,
    #[serde(rename = "Design Development")]
    DesignDevelopment,
    #[serde(rename = "Construction Documents")]
    ConstructionDocuments,
}

impl Phase {
    /// All phases in lifecycle order.
    pub const ALL: [Phase; 4] = [
        Phase::Programming,
        Phase::SchematicDesign,
        Phase::DesignDevelopment,
        Phase::ConstructionDocuments,
    ];

    /// Zero-based position in the lifecycle.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Human-readable name, as shown in timelines and exports.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Programming => "Programming",
            Phase::SchematicDesign => "Schematic Design",
            Phase::DesignDevelopment => "Design Development",
            Phase::ConstructionDocuments => "Construction Documents",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_matches_index() {
        for (i, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }

    #[test]
    fn test_phase_serializes_as_display_name() {
        let json = serde_json::to_string(&Phase::SchematicDesign).unwrap();
        assert_eq!(json, "\"Schematic Design\"");

        let parsed: Phase = serde_json::from_str("\"Construction Documents\"").unwrap();
        assert_eq!(parsed, Phase::ConstructionDocuments);
    }
}
