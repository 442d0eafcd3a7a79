use crate::args::FilterArgs;
use crate::types::OutputFormat;
use anyhow::Result;
use phaseline_engine::{assemble_schedules, filter_and_sort, ColumnMap, RawRecord};

pub fn handle(
    rows: &[RawRecord],
    columns: &ColumnMap,
    filter: &FilterArgs,
    format: OutputFormat,
) -> Result<()> {
    let schedules = filter_and_sort(
        assemble_schedules(rows, columns),
        &filter.criteria(),
        filter.sort.to_key(),
    );
    let labels: Vec<&str> = schedules.iter().map(|s| s.label.as_str()).collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&labels)?),
        OutputFormat::Plain => {
            if labels.is_empty() {
                println!("No projects match the current filters");
                return Ok(());
            }
            for label in labels {
                println!("{}", label);
            }
        }
    }
    Ok(())
}
