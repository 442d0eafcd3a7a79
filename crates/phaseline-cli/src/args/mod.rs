mod commands;
mod common;

pub use commands::*;
pub use common::*;

use crate::types::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phaseline")]
#[command(about = "Reshape project sheets into design-phase timelines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace directory for the config and cached snapshots
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Snapshot file to read, overriding the configured source
    #[arg(long, global = true)]
    pub source: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Reload the snapshot even if a cached copy is still fresh
    #[arg(long, global = true)]
    pub refresh: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
