use crate::types::SortOrder;
use chrono::{Local, NaiveDate};
use clap::Args;
use phaseline_types::FilterCriteria;

/// Filter and ordering options shared by every data command.
#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Keep projects whose name contains this text (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,

    /// Keep projects whose number contains this text
    #[arg(long)]
    pub number: Option<String>,

    /// Keep projects whose design manager contains this text (case-insensitive)
    #[arg(long)]
    pub manager: Option<String>,

    /// Keep only projects with a phase active on the reference date
    #[arg(long)]
    pub active: bool,

    /// Reference date, YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "DATE")]
    pub on: Option<NaiveDate>,

    /// Project ordering
    #[arg(long, default_value = "manager")]
    pub sort: SortOrder,
}

impl FilterArgs {
    /// The date active checks and metrics are evaluated against.
    pub fn reference_date(&self) -> NaiveDate {
        self.on.unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            name: self.name.clone(),
            number: self.number.clone(),
            manager: self.manager.clone(),
            active_on: self.active.then(|| self.reference_date()),
        }
    }
}
