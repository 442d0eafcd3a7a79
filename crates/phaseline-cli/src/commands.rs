use crate::args::{Cli, Commands};
use crate::cache::{snapshot_key, SnapshotCache};
use crate::config::{resolve_data_dir, Config};
use crate::handlers;
use crate::source;
use anyhow::{Context, Result};
use phaseline_engine::RawRecord;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_dir,
        source,
        format,
        refresh,
        command,
    } = cli;
    let data_dir = resolve_data_dir(data_dir.as_deref())?;

    let Some(command) = command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    match command {
        Commands::Init { force } => handlers::init::handle(&data_dir, source, force),

        Commands::Timeline { filter } => {
            let (config, rows) = load_workspace(&data_dir, source.as_deref(), refresh)?;
            handlers::timeline::handle(&rows, &config.columns, &filter, format)
        }

        Commands::Summary { filter } => {
            let (config, rows) = load_workspace(&data_dir, source.as_deref(), refresh)?;
            handlers::summary::handle(&rows, &config.columns, &filter, format)
        }

        Commands::Projects { filter } => {
            let (config, rows) = load_workspace(&data_dir, source.as_deref(), refresh)?;
            handlers::projects::handle(&rows, &config.columns, &filter, format)
        }

        Commands::Export { filter, output } => {
            let (config, rows) = load_workspace(&data_dir, source.as_deref(), refresh)?;
            handlers::export::handle(&rows, &config.columns, &filter, output)
        }
    }
}

/// Load the config and a snapshot of raw rows, going through the TTL cache
/// unless --refresh asked for a reload.
fn load_workspace(
    data_dir: &Path,
    source_override: Option<&Path>,
    refresh: bool,
) -> Result<(Config, Vec<RawRecord>)> {
    let config = Config::load_from(&data_dir.join("config.toml"))?;

    let source_path: PathBuf = source_override
        .map(Path::to_path_buf)
        .or_else(|| config.source.path.clone())
        .context(
            "no snapshot source configured; run 'phaseline init --source <file>' or pass --source",
        )?;
    let format = config
        .source
        .format
        .unwrap_or_else(|| source::detect_format(&source_path));

    let cache = SnapshotCache::new(data_dir.join("cache"));
    let key = snapshot_key(&source_path);
    let ttl = Duration::from_secs(config.cache.ttl_secs);

    if !refresh {
        if let Some(rows) = cache.get(&key, ttl)? {
            return Ok((config, rows));
        }
    }

    let rows = source::load_snapshot(&source_path, format)?;
    cache.put(&key, &rows)?;
    Ok((config, rows))
}

fn show_guidance(data_dir: &Path) {
    println!("phaseline - reshape project sheets into design-phase timelines");
    println!();
    println!("Workspace: {}", data_dir.display());
    println!();
    println!("Get started:");
    println!("  phaseline init --source <sheet.csv>   write a starter config");
    println!("  phaseline timeline                    show the phase timeline");
    println!("  phaseline summary                     show aggregate metrics");
    println!();
    println!("See 'phaseline --help' for all commands.");
}
