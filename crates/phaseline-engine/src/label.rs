use phaseline_types::ProjectRecord;

/// Build the display label for a project row.
///
/// Shape: `name (number) — manager`, with the number and manager parts
/// omitted when absent. A row without a name uses the caller's fallback
/// text. The label is the project's identity downstream: rows that render
/// to the same label are indistinguishable to later stages.
pub fn project_label(record: &ProjectRecord, fallback: &str) -> String {
    let mut label = record
        .name
        .clone()
        .unwrap_or_else(|| fallback.to_string());

    if let Some(number) = &record.number {
        label.push_str(&format!(" ({})", display_number(number)));
    }
    if let Some(manager) = &record.manager {
        label.push_str(&format!(" \u{2014} {}", manager));
    }
    label
}

/// Render the project number for display. A value whose text, minus at
/// most one decimal point, is all digits renders as an integer (dropping
/// the fractional part, so "42.0" becomes "42"); anything else is shown
/// verbatim.
fn display_number(raw: &str) -> String {
    let (integer, fraction) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw, None),
    };

    let all_digits = integer.bytes().all(|b| b.is_ascii_digit())
        && fraction.is_none_or(|f| f.bytes().all(|b| b.is_ascii_digit()));
    let has_digits = !integer.is_empty() || fraction.is_some_and(|f| !f.is_empty());
    if !all_digits || !has_digits {
        return raw.to_string();
    }

    let int_part = if integer.is_empty() { "0" } else { integer };
    match int_part.parse::<u64>() {
        Ok(n) => n.to_string(),
        // too many digits for u64; keep the raw integer part
        Err(_) => int_part.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: Option<&str>, number: Option<&str>, manager: Option<&str>) -> ProjectRecord {
        ProjectRecord {
            name: name.map(str::to_string),
            number: number.map(str::to_string),
            manager: manager.map(str::to_string),
            ..ProjectRecord::default()
        }
    }

    #[test]
    fn test_name_only() {
        let label = project_label(&record(Some("Lab Tower"), None, None), "Project 1");
        assert_eq!(label, "Lab Tower");
    }

    #[test]
    fn test_fallback_when_name_absent() {
        let label = project_label(&record(None, None, None), "Project 7");
        assert_eq!(label, "Project 7");
    }

    #[test]
    fn test_numeric_number_drops_trailing_zero() {
        let label = project_label(&record(Some("Lab Tower"), Some("42.0"), None), "Project 1");
        assert_eq!(label, "Lab Tower (42)");
    }

    #[test]
    fn test_mixed_number_kept_verbatim() {
        let label = project_label(&record(Some("Lab Tower"), Some("42A"), None), "Project 1");
        assert_eq!(label, "Lab Tower (42A)");
    }

    #[test]
    fn test_manager_appended() {
        let label = project_label(
            &record(Some("Lab Tower"), Some("42.0"), Some("R. Smith")),
            "Project 1",
        );
        assert_eq!(label, "Lab Tower (42) \u{2014} R. Smith");
    }

    #[test]
    fn test_display_number_cases() {
        assert_eq!(display_number("42"), "42");
        assert_eq!(display_number("42.0"), "42");
        assert_eq!(display_number("42.5"), "42");
        assert_eq!(display_number("007"), "7");
        assert_eq!(display_number("42."), "42");
        assert_eq!(display_number(".5"), "0");
        assert_eq!(display_number("42A"), "42A");
        assert_eq!(display_number("1.2.3"), "1.2.3");
        assert_eq!(display_number("4-2"), "4-2");
    }
}
