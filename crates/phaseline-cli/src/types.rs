use clap::ValueEnum;
use phaseline_types::SortKey;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Csv,
    Json,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Csv => write!(f, "csv"),
            SourceFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum SortOrder {
    Manager,
    Name,
    Date,
    Number,
}

impl SortOrder {
    pub fn to_key(self) -> SortKey {
        match self {
            SortOrder::Manager => SortKey::ManagerThenName,
            SortOrder::Name => SortKey::Name,
            SortOrder::Date => SortKey::FirstMilestone,
            SortOrder::Number => SortKey::NumberNumeric,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Manager => write!(f, "manager"),
            SortOrder::Name => write!(f, "name"),
            SortOrder::Date => write!(f, "date"),
            SortOrder::Number => write!(f, "number"),
        }
    }
}
