use crate::types::SourceFormat;
use anyhow::{Context, Result};
use phaseline_engine::RawRecord;
use serde_json::Value;
use std::path::Path;

/// Load a snapshot of raw sheet rows from a local export file.
pub fn load_snapshot(path: &Path, format: SourceFormat) -> Result<Vec<RawRecord>> {
    match format {
        SourceFormat::Csv => load_csv(path),
        SourceFormat::Json => load_json(path),
    }
}

/// Pick a format from the file extension; CSV when in doubt.
pub fn detect_format(path: &Path) -> SourceFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => SourceFormat::Json,
        _ => SourceFormat::Csv,
    }
}

fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open snapshot: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read CSV headers: {}", path.display()))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record =
            result.with_context(|| format!("malformed CSV row in {}", path.display()))?;
        let mut row = RawRecord::new();
        for (title, cell) in headers.iter().zip(record.iter()) {
            // empty cells stay absent, like blank sheet cells
            if !cell.is_empty() {
                row.insert(title.to_string(), Value::String(cell.to_string()));
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

fn load_json(path: &Path) -> Result<Vec<RawRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to open snapshot: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("snapshot is not an array of flat records: {}", path.display()))
}
