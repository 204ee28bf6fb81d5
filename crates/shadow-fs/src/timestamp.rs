//! Modification-time copying between files

use std::fs::{self, FileTimes, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use crate::{Error, Result};

/// Give `target` the access and modification times of `source`.
///
/// Returns `Ok(false)` with a warning when the platform cannot report or
/// set file times; the copy is skipped rather than failing the write.
pub fn copy_modification_time(source: &Path, target: &Path) -> Result<bool> {
    let metadata = fs::metadata(source).map_err(|e| Error::io(source, e))?;

    let modified = match metadata.modified() {
        Ok(time) => time,
        Err(e) if e.kind() == ErrorKind::Unsupported => {
            warn_unsupported(target);
            return Ok(false);
        }
        Err(e) => return Err(Error::io(source, e)),
    };

    let mut times = FileTimes::new().set_modified(modified);
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    let file = OpenOptions::new()
        .write(true)
        .open(target)
        .map_err(|e| Error::io(target, e))?;

    match file.set_times(times) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::Unsupported => {
            warn_unsupported(target);
            Ok(false)
        }
        Err(e) => Err(Error::io(target, e)),
    }
}

fn warn_unsupported(target: &Path) {
    tracing::warn!(
        target = %target.display(),
        "platform cannot set file times; modification time not copied"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    #[test]
    fn target_gets_source_mtime() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("public.py");
        let target = dir.path().join("private.py");
        fs::write(&source, "a\n").unwrap();
        fs::write(&target, "#@x\na\n").unwrap();

        let past = SystemTime::now() - Duration::from_secs(86_400);
        fs::File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(past)
            .unwrap();

        assert!(copy_modification_time(&source, &target).unwrap());

        let source_mtime = fs::metadata(&source).unwrap().modified().unwrap();
        let target_mtime = fs::metadata(&target).unwrap().modified().unwrap();
        assert_eq!(source_mtime, target_mtime);
    }

    #[test]
    fn content_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("a");
        let target = dir.path().join("b");
        fs::write(&source, "one").unwrap();
        fs::write(&target, "two").unwrap();

        copy_modification_time(&source, &target).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "two");
    }

    #[test]
    fn missing_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("b");
        fs::write(&target, "two").unwrap();

        assert!(copy_modification_time(&dir.path().join("absent"), &target).is_err());
    }
}
