use crate::args::FilterArgs;
use crate::types::OutputFormat;
use anyhow::Result;
use phaseline_engine::{assemble_schedules, compute_metrics, filter_and_sort, ColumnMap, RawRecord};
use phaseline_types::Phase;

pub fn handle(
    rows: &[RawRecord],
    columns: &ColumnMap,
    filter: &FilterArgs,
    format: OutputFormat,
) -> Result<()> {
    let reference = filter.reference_date();
    let schedules = filter_and_sort(
        assemble_schedules(rows, columns),
        &filter.criteria(),
        filter.sort.to_key(),
    );
    let metrics = compute_metrics(&schedules, reference);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metrics)?),
        OutputFormat::Plain => {
            println!("Projects: {}", metrics.total_projects);
            println!("Active on {}: {}", reference, metrics.active_today);
            for phase in Phase::ALL {
                println!("  {:<22} {}", phase.name(), metrics.active_in(phase));
            }
        }
    }
    Ok(())
}
