use crate::schema::{ColumnMap, RawRecord};
use chrono::NaiveDate;
use phaseline_types::{MilestoneDates, ProjectRecord};
use serde_json::Value;

/// Plain date formats accepted from sheet cells, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y"];

/// Normalize one raw sheet row into a `ProjectRecord`.
///
/// Every field degrades to absent instead of failing: missing columns leave
/// the field empty, wrong-typed cells are dropped, and unparseable dates
/// resolve to `None` so the row still flows through the pipeline.
pub fn normalize_record(raw: &RawRecord, columns: &ColumnMap) -> ProjectRecord {
    let mut dates = [None; MilestoneDates::COUNT];
    for (slot, title) in dates.iter_mut().zip(columns.milestones.iter()) {
        *slot = raw.get(title).and_then(parse_date);
    }

    ProjectRecord {
        name: raw.get(&columns.name).and_then(text_value),
        number: raw.get(&columns.number).and_then(literal_value),
        manager: raw.get(&columns.manager).and_then(text_value),
        milestones: MilestoneDates::new(dates),
    }
}

/// Non-empty trimmed string content of a cell, if any.
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// Literal string form of a cell, preserving the source rendering of
/// numeric values ("42.0" stays "42.0").
fn literal_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a date cell. Accepts plain dates in the common sheet formats and
/// full RFC 3339 timestamps (date part only). Anything else is absent.
fn parse_date(value: &Value) -> Option<NaiveDate> {
    let text = match value {
        Value::String(s) => s.trim(),
        _ => return None,
    };
    if text.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    chrono::DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawRecord {
        value.as_object().unwrap().clone()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_normalizes_complete_row() {
        let row = raw(json!({
            "Project Name": "Lab Tower",
            "Project #": 42.0,
            "Design Manager Name": "R. Smith",
            "Programming Start Date": "2024-01-01",
            "Schematic Design Start Date": "2024-02-01",
            "Design Development Start Date": "2024-04-01",
            "Construction Document Start Date": "2024-07-01",
            "Permit Set Delivery Date": "2024-10-01",
        }));

        let record = normalize_record(&row, &ColumnMap::default());
        assert_eq!(record.name.as_deref(), Some("Lab Tower"));
        assert_eq!(record.number.as_deref(), Some("42.0"));
        assert_eq!(record.manager.as_deref(), Some("R. Smith"));
        assert_eq!(record.milestones.get(0), Some(d(2024, 1, 1)));
        assert_eq!(record.milestones.get(4), Some(d(2024, 10, 1)));
    }

    #[test]
    fn test_bad_dates_become_absent() {
        let row = raw(json!({
            "Programming Start Date": "not a date",
            "Schematic Design Start Date": 20240201,
            "Design Development Start Date": null,
            "Construction Document Start Date": "",
        }));

        let record = normalize_record(&row, &ColumnMap::default());
        assert!(record.milestones.as_array().iter().all(Option::is_none));
    }

    #[test]
    fn test_accepts_timestamp_and_us_formats() {
        let row = raw(json!({
            "Programming Start Date": "2024-01-15T00:00:00Z",
            "Schematic Design Start Date": "3/1/2024",
        }));

        let record = normalize_record(&row, &ColumnMap::default());
        assert_eq!(record.milestones.get(0), Some(d(2024, 1, 15)));
        assert_eq!(record.milestones.get(1), Some(d(2024, 3, 1)));
    }

    #[test]
    fn test_whitespace_only_fields_are_absent() {
        let row = raw(json!({
            "Project Name": "   ",
            "Design Manager Name": "",
        }));

        let record = normalize_record(&row, &ColumnMap::default());
        assert!(record.name.is_none());
        assert!(record.manager.is_none());
    }

    #[test]
    fn test_number_keeps_text_form() {
        let row = raw(json!({ "Project #": "42A" }));
        let record = normalize_record(&row, &ColumnMap::default());
        assert_eq!(record.number.as_deref(), Some("42A"));

        let row = raw(json!({ "Project #": 7 }));
        let record = normalize_record(&row, &ColumnMap::default());
        assert_eq!(record.number.as_deref(), Some("7"));
    }

    #[test]
    fn test_retitled_sheet_via_overrides() {
        let columns = ColumnMap {
            name: "Title".to_string(),
            ..ColumnMap::default()
        };
        let row = raw(json!({ "Title": "Annex", "Project Name": "ignored" }));

        let record = normalize_record(&row, &columns);
        assert_eq!(record.name.as_deref(), Some("Annex"));
    }
}
