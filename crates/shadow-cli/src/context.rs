//! Config file detection
//!
//! Walks up from the working directory to the nearest `.shadow.*` file, so
//! commands work from anywhere below it.

use std::path::{Path, PathBuf};

use shadow_core::{ShadowConfig, ShadowController};

use crate::cli::SyncArgs;
use crate::error::Result;

/// Nearest config file at or above `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(ShadowConfig::find)
}

/// Load the effective configuration.
///
/// An explicit path wins over the config found from `cwd`; with neither,
/// defaults apply.
pub fn load_config(cwd: &Path, explicit: Option<&Path>) -> Result<ShadowConfig> {
    let path = explicit.map(Path::to_path_buf).or_else(|| find_config(cwd));
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using config file");
            Ok(ShadowConfig::load(&path)?)
        }
        None => Ok(ShadowConfig::default()),
    }
}

/// Apply command-line overrides on top of file values.
pub fn apply_overrides(mut config: ShadowConfig, args: &SyncArgs) -> ShadowConfig {
    if args.backup {
        config.backups = true;
    }
    if let Some(algorithm) = args.algorithm {
        config.algorithm = algorithm;
    }
    if args.trace {
        config.trace = true;
    }
    config
}

/// Build a controller from the effective configuration.
pub fn controller(cwd: &Path, explicit: Option<&Path>, args: &SyncArgs) -> Result<ShadowController> {
    let config = apply_overrides(load_config(cwd, explicit)?, args);
    Ok(ShadowController::new(config)?)
}
