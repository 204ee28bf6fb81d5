//! ShadowController implementation
//!
//! The controller owns the effective configuration and runs the per-file
//! operations:
//! - **pull**: propagate a public file's edits into its private twin
//! - **push**: write the marker-free view of a private file to its public twin
//! - **check**: a pull in dry-run mode
//! - **locate**: translate a public line number into a private one

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shadow_content::{
    DiffAlgorithm, DiffTag, Marker, MarkerTable, diff, line_ops, propagate_with, strip,
};
use shadow_fs::io::{read_lines, read_lines_if_exists};
use shadow_fs::{ShadowLayout, WriteOptions, write_if_changed};

use crate::config::ShadowConfig;
use crate::{Error, Result};

/// Options for pull and push
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// If true, report what would change without modifying the filesystem.
    pub dry_run: bool,
}

/// Report from a pull
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullReport {
    pub public: PathBuf,
    pub private: PathBuf,
    /// Marker prefix used for the pair
    pub marker: String,
    /// True if the private file was (or in a dry run would be) rewritten
    pub changed: bool,
    /// Backup of the previous private file, if one was made
    pub backup: Option<PathBuf>,
    /// Public lines added or rewritten since the last sync
    pub inserted: usize,
    /// Old public lines dropped since the last sync
    pub deleted: usize,
    /// Similarity of old and new public content in `0.0..=1.0`
    pub similarity: f32,
    pub dry_run: bool,
}

/// Report from a push
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushReport {
    pub private: PathBuf,
    pub public: PathBuf,
    pub marker: String,
    /// True if the public file was (or in a dry run would be) rewritten
    pub changed: bool,
    pub backup: Option<PathBuf>,
    /// Marker lines left out of the public file
    pub markers_removed: usize,
    pub dry_run: bool,
}

/// Runs Shadow Sync operations for one configuration.
#[derive(Debug, Clone)]
pub struct ShadowController {
    config: ShadowConfig,
    layout: ShadowLayout,
    markers: MarkerTable,
}

impl ShadowController {
    /// Create a controller, validating the layout and marker overrides.
    pub fn new(config: ShadowConfig) -> Result<Self> {
        let layout = config.layout()?;
        let markers = config.marker_table()?;
        Ok(Self {
            config,
            layout,
            markers,
        })
    }

    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    pub fn layout(&self) -> &ShadowLayout {
        &self.layout
    }

    /// Built-in markers with the configured overrides applied.
    pub fn markers(&self) -> &MarkerTable {
        &self.markers
    }

    /// Marker for a public or private file name.
    pub fn marker_for(&self, path: &Path) -> Marker {
        self.markers.classify(path)
    }

    pub fn private_path_for(&self, public: &Path) -> Result<PathBuf> {
        Ok(self.layout.private_path_for(public)?)
    }

    pub fn public_path_for(&self, private: &Path) -> Result<PathBuf> {
        self.layout
            .public_path_for(private)
            .ok_or_else(|| Error::NotShadowed {
                path: private.to_path_buf(),
            })
    }

    /// Merge the current contents of `public` into its private file.
    ///
    /// The private file takes the public file's modification time when
    /// written.
    pub fn pull(&self, public: &Path, options: &SyncOptions) -> Result<PullReport> {
        let private = self.private_path_for(public)?;
        let marker = self.marker_for(public);

        let new_public = read_lines(public)?;
        let old_private =
            read_lines_if_exists(&private)?.ok_or_else(|| Error::PrivateFileMissing {
                public: public.to_path_buf(),
                private: private.clone(),
            })?;

        let old_public = strip(&old_private, &marker).kept;
        let (inserted, deleted) = change_counts(&old_public, &new_public, self.config.algorithm);
        let similarity = diff::ratio(&old_public, &new_public, self.config.algorithm);

        let new_private = propagate_with(
            &new_public,
            &old_private,
            &marker,
            &self.config.propagate_options(),
        )?;

        let outcome = write_if_changed(
            &new_private,
            &private,
            public,
            &self.write_options(options),
        )?;

        tracing::debug!(
            public = %public.display(),
            private = %private.display(),
            changed = outcome.changed,
            inserted,
            deleted,
            "pull complete"
        );

        Ok(PullReport {
            public: public.to_path_buf(),
            private,
            marker: marker.as_str().to_string(),
            changed: outcome.changed,
            backup: outcome.backup,
            inserted,
            deleted,
            similarity,
            dry_run: options.dry_run,
        })
    }

    /// Regenerate the public twin of `private` with all marker lines removed.
    pub fn push(&self, private: &Path, options: &SyncOptions) -> Result<PushReport> {
        let public = self.public_path_for(private)?;
        let marker = self.marker_for(&public);

        let lines = read_lines(private)?;
        let stripped = strip(&lines, &marker);

        let outcome = write_if_changed(
            &stripped.kept,
            &public,
            private,
            &self.write_options(options),
        )?;

        tracing::debug!(
            private = %private.display(),
            public = %public.display(),
            changed = outcome.changed,
            "push complete"
        );

        Ok(PushReport {
            private: private.to_path_buf(),
            public,
            marker: marker.as_str().to_string(),
            changed: outcome.changed,
            backup: outcome.backup,
            markers_removed: stripped.markers.len(),
            dry_run: options.dry_run,
        })
    }

    /// Report whether `public` has edits its private file does not yet hold.
    pub fn check(&self, public: &Path) -> Result<PullReport> {
        self.pull(public, &SyncOptions { dry_run: true })
    }

    /// Private line number (1-based) holding public line `line` (1-based).
    pub fn locate(&self, public: &Path, line: usize) -> Result<usize> {
        let private = self.private_path_for(public)?;
        let marker = self.marker_for(public);
        let lines = read_lines_if_exists(&private)?.ok_or_else(|| Error::PrivateFileMissing {
            public: public.to_path_buf(),
            private: private.clone(),
        })?;
        let stripped = strip(&lines, &marker);

        line.checked_sub(1)
            .and_then(|index| stripped.private_index(index))
            .map(|index| index + 1)
            .ok_or_else(|| Error::LineOutOfRange {
                path: public.to_path_buf(),
                line,
                lines: stripped.kept.len(),
            })
    }

    fn write_options(&self, options: &SyncOptions) -> WriteOptions {
        WriteOptions {
            backup: self.config.backups,
            dry_run: options.dry_run,
        }
    }
}

/// Lines inserted and deleted between two public versions.
fn change_counts(old: &[String], new: &[String], algorithm: DiffAlgorithm) -> (usize, usize) {
    line_ops(old, new, algorithm)
        .iter()
        .fold((0, 0), |(inserted, deleted), op| match op.tag {
            DiffTag::Equal => (inserted, deleted),
            DiffTag::Insert => (inserted + op.new.len(), deleted),
            DiffTag::Delete => (inserted, deleted + op.old.len()),
            DiffTag::Replace => (inserted + op.new.len(), deleted + op.old.len()),
        })
}
