//! Numbered backups: `name.~0~`, `name.~1~`, ...

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

fn numbered(target: &Path, n: u32) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(format!(".~{n}~"));
    PathBuf::from(name)
}

/// The backup name for `target` with the smallest unused number.
pub fn backup_path(target: &Path) -> PathBuf {
    let mut n = 0;
    loop {
        let candidate = numbered(target, n);
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Copy `target` to its next free backup name and return that name.
///
/// The target itself stays in place, so a later failed write cannot leave
/// it missing.
pub fn make_backup(target: &Path) -> Result<PathBuf> {
    let backup = backup_path(target);
    fs::copy(target, &backup).map_err(|e| Error::io(target, e))?;
    tracing::info!(
        target = %target.display(),
        backup = %backup.display(),
        "backed up file"
    );
    Ok(backup)
}
