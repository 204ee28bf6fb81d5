//! Init command implementation
//!
//! Writes a `.shadow.toml` holding the default configuration.

use std::path::{Path, PathBuf};

use colored::Colorize;
use shadow_core::ShadowConfig;

use crate::error::{CliError, Result};

/// Run the init command
pub fn run_init(dir: &Path, force: bool) -> Result<()> {
    let path = init_config(dir, force)?;
    println!(
        "{} Wrote {}",
        "OK".green().bold(),
        path.display().to_string().cyan()
    );
    Ok(())
}

/// Write the default config to `dir/.shadow.toml` and return its path.
///
/// An existing config file of any supported format is kept unless `force`
/// is set.
pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    if let Some(existing) = ShadowConfig::find(dir).filter(|_| !force) {
        return Err(CliError::user(format!(
            "{} already exists (use --force to overwrite)",
            existing.display()
        )));
    }

    let path = dir.join(".shadow.toml");
    ShadowConfig::default().save(&path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(path)
}
