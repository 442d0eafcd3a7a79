use crate::config::Config;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

pub fn handle(data_dir: &Path, source: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = data_dir.join("config.toml");
    if config_path.exists() && !force {
        bail!(
            "config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut config = Config::default();
    config.source.path = source;
    config.save_to(&config_path)?;

    println!("Wrote {}", config_path.display());
    match &config.source.path {
        Some(path) => println!("Source: {}", path.display()),
        None => println!("Set [source] path in the config, or pass --source to commands."),
    }
    Ok(())
}
