//! Guarded file replacement
//!
//! A target is rewritten only when its lines differ from the new ones. After
//! a write the target takes the reference file's modification time, so
//! tools watching timestamps see no spurious change.

use std::path::{Path, PathBuf};

use crate::backup::make_backup;
use crate::io::{read_lines_if_exists, write_lines};
use crate::timestamp::copy_modification_time;
use crate::Result;

/// Options for [`write_if_changed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Keep the previous target as `name.~N~` before overwriting.
    pub backup: bool,
    /// Report whether a write would happen without touching the disk.
    pub dry_run: bool,
}

/// What [`write_if_changed`] did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOutcome {
    /// True if the target was (or, in a dry run, would be) written.
    pub changed: bool,
    /// Where the previous target was copied, if a backup was made.
    pub backup: Option<PathBuf>,
    /// True if the reference timestamp was copied onto the target.
    pub timestamp_copied: bool,
}

/// Write `lines` to `target` unless it already holds exactly those lines.
///
/// `reference` supplies the modification time applied after writing.
pub fn write_if_changed(
    lines: &[String],
    target: &Path,
    reference: &Path,
    options: &WriteOptions,
) -> Result<WriteOutcome> {
    let existing = read_lines_if_exists(target)?;
    let changed = existing.as_deref() != Some(lines);

    if !changed {
        tracing::debug!(target = %target.display(), "target unchanged; not written");
        return Ok(WriteOutcome::default());
    }

    if options.dry_run {
        tracing::info!(target = %target.display(), "[dry-run] would write");
        return Ok(WriteOutcome {
            changed: true,
            ..Default::default()
        });
    }

    let backup = if options.backup && existing.is_some() {
        Some(make_backup(target)?)
    } else {
        None
    };

    write_lines(target, lines)?;
    let timestamp_copied = copy_modification_time(reference, target)?;

    tracing::info!(
        target = %target.display(),
        reference = %reference.display(),
        lines = lines.len(),
        "wrote file"
    );

    Ok(WriteOutcome {
        changed: true,
        backup,
        timestamp_copied,
    })
}
