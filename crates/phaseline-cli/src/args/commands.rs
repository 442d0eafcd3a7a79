use super::common::FilterArgs;
use clap::Subcommand;
use std::path::PathBuf;

// Flat command surface: five commands, well under the point where
// namespacing starts paying for itself.
#[derive(Subcommand)]
pub enum Commands {
    /// Write a starter config.toml into the workspace, recording the
    /// --source path when one is given
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Show the per-project phase timeline
    Timeline {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show aggregate metrics for the filtered set
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List the filtered, sorted project labels
    Projects {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export the filtered phase intervals as CSV
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output path (defaults to filtered_projects.csv)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
