use crate::args::FilterArgs;
use anyhow::{Context, Result};
use phaseline_engine::{assemble_schedules, filter_and_sort, ColumnMap, RawRecord};
use std::path::PathBuf;

pub fn handle(
    rows: &[RawRecord],
    columns: &ColumnMap,
    filter: &FilterArgs,
    output: Option<PathBuf>,
) -> Result<()> {
    let schedules = filter_and_sort(
        assemble_schedules(rows, columns),
        &filter.criteria(),
        filter.sort.to_key(),
    );

    let output_path = output.unwrap_or_else(|| PathBuf::from("filtered_projects.csv"));
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("failed to create file: {}", output_path.display()))?;

    writer.write_record(["project", "phase", "start", "end"])?;
    let mut count = 0;
    for schedule in &schedules {
        for interval in &schedule.intervals {
            let start = interval.start.to_string();
            let end = interval.end.to_string();
            writer.write_record([
                interval.project_label.as_str(),
                interval.phase.name(),
                start.as_str(),
                end.as_str(),
            ])?;
            count += 1;
        }
    }
    writer.flush()?;

    println!("Exported {} phase rows to {}", count, output_path.display());
    Ok(())
}
