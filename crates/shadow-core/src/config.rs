//! Shadow Sync configuration
//!
//! Read from the first of [`config_file_names`] found in a directory; every
//! key is optional.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shadow_content::{DiffAlgorithm, MarkerTable, PropagateOptions};
use shadow_fs::config::SUPPORTED_EXTENSIONS;
use shadow_fs::{ConfigStore, DEFAULT_SHADOW_PREFIX, DEFAULT_SHADOW_SUBDIR, ShadowLayout};

use crate::Result;

/// Config file name without its extension; the extension picks the format.
pub const CONFIG_FILE_STEM: &str = ".shadow";

/// Config file names in lookup order, one per format [`ConfigStore`] reads.
pub fn config_file_names() -> impl Iterator<Item = String> {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| format!("{CONFIG_FILE_STEM}.{ext}"))
}

/// Effective configuration for pull and push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Directory, next to each public file, holding its private twin
    pub shadow_subdir: String,

    /// Filename prefix of private files
    pub shadow_prefix: String,

    /// Keep `name.~N~` backups of overwritten files
    pub backups: bool,

    /// Line alignment algorithm
    pub algorithm: DiffAlgorithm,

    /// Debug-level tracing of every diff operation
    pub trace: bool,

    /// Extension to marker overrides, e.g. `rs = "//@"`
    pub markers: BTreeMap<String, String>,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            shadow_subdir: DEFAULT_SHADOW_SUBDIR.to_string(),
            shadow_prefix: DEFAULT_SHADOW_PREFIX.to_string(),
            backups: false,
            algorithm: DiffAlgorithm::default(),
            trace: false,
            markers: BTreeMap::new(),
        }
    }
}

impl ShadowConfig {
    /// Load from an explicit file.
    pub fn load(path: &Path) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Save to `path`; the format follows the extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        Ok(ConfigStore::new().save(path, self)?)
    }

    /// The config file `dir` would be read from, if any.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        config_file_names()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Load the config file in `dir`, or defaults if there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        match Self::find(dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading shadow config");
                Self::load(&path)
            }
            None => {
                tracing::debug!(dir = %dir.display(), "no shadow config; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn layout(&self) -> Result<ShadowLayout> {
        Ok(ShadowLayout::new(&self.shadow_subdir, &self.shadow_prefix)?)
    }

    /// Built-in markers with this config's overrides applied.
    pub fn marker_table(&self) -> Result<MarkerTable> {
        Ok(MarkerTable::builtin().with_overrides(&self.markers)?)
    }

    pub fn propagate_options(&self) -> PropagateOptions {
        PropagateOptions {
            algorithm: self.algorithm,
            trace: self.trace,
        }
    }
}
