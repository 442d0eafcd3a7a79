use crate::args::FilterArgs;
use crate::types::OutputFormat;
use anyhow::Result;
use chrono::NaiveDate;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use phaseline_engine::{assemble_schedules, filter_and_sort, run_pipeline, ColumnMap, RawRecord};
use phaseline_types::{Phase, ProjectSchedule};

pub fn handle(
    rows: &[RawRecord],
    columns: &ColumnMap,
    filter: &FilterArgs,
    format: OutputFormat,
) -> Result<()> {
    let reference = filter.reference_date();

    match format {
        OutputFormat::Json => {
            let output = run_pipeline(
                rows,
                columns,
                &filter.criteria(),
                filter.sort.to_key(),
                reference,
            );
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let schedules = filter_and_sort(
                assemble_schedules(rows, columns),
                &filter.criteria(),
                filter.sort.to_key(),
            );
            print_timeline(&schedules, reference);
        }
    }
    Ok(())
}

fn print_timeline(schedules: &[ProjectSchedule], reference: NaiveDate) {
    let enable_color = std::io::stdout().is_terminal();

    if schedules.is_empty() {
        let msg = "No projects match the current filters";
        if enable_color {
            println!("{}", msg.bright_black());
        } else {
            println!("{}", msg);
        }
        return;
    }

    for schedule in schedules {
        if enable_color {
            println!("{}", schedule.label.bold());
        } else {
            println!("{}", schedule.label);
        }

        if schedule.intervals.is_empty() {
            println!("  (no dated phases)");
            continue;
        }

        for interval in &schedule.intervals {
            let marker = if interval.contains(reference) { "*" } else { " " };
            let name = format!("{:<22}", interval.phase.name());
            let name = if enable_color {
                phase_colored(interval.phase, &name)
            } else {
                name
            };
            println!(
                "  {} {} {} .. {} ({} days)",
                marker,
                name,
                interval.start,
                interval.end,
                interval.duration_days()
            );
        }
    }
}

/// Phase colors carried over from the source dashboard's chart legend:
/// red, blue, orange, green in lifecycle order.
fn phase_colored(phase: Phase, padded_name: &str) -> String {
    match phase {
        Phase::Programming => format!("{}", padded_name.red()),
        Phase::SchematicDesign => format!("{}", padded_name.blue()),
        Phase::DesignDevelopment => format!("{}", padded_name.yellow()),
        Phase::ConstructionDocuments => format!("{}", padded_name.green()),
    }
}
