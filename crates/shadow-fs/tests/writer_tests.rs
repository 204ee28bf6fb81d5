//! Tests for write_if_changed: change detection, backups, timestamps.

use std::fs;
use std::time::{Duration, SystemTime};

use pretty_assertions::assert_eq;
use shadow_fs::io::read_lines;
use shadow_fs::{WriteOptions, write_if_changed};
use tempfile::TempDir;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn set_mtime(path: &std::path::Path, time: SystemTime) {
    fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

#[test]
fn creates_missing_target() {
    let temp = TempDir::new().unwrap();
    let reference = temp.path().join("app.py");
    let target = temp.path().join("LeoFolder").join("app.py");
    fs::write(&reference, "a\n").unwrap();

    let outcome = write_if_changed(
        &lines(&["#@x\n", "a\n"]),
        &target,
        &reference,
        &WriteOptions::default(),
    )
    .unwrap();

    assert!(outcome.changed);
    assert!(outcome.backup.is_none());
    assert_eq!(fs::read_to_string(&target).unwrap(), "#@x\na\n");
}

#[test]
fn identical_content_is_not_rewritten() {
    let temp = TempDir::new().unwrap();
    let reference = temp.path().join("ref.py");
    let target = temp.path().join("target.py");
    fs::write(&reference, "a\n").unwrap();
    fs::write(&target, "a\nb\n").unwrap();

    let old = SystemTime::now() - Duration::from_secs(3_600);
    set_mtime(&target, old);

    let outcome = write_if_changed(
        &lines(&["a\n", "b\n"]),
        &target,
        &reference,
        &WriteOptions { backup: true, dry_run: false },
    )
    .unwrap();

    assert!(!outcome.changed);
    assert!(outcome.backup.is_none());
    assert_eq!(fs::metadata(&target).unwrap().modified().unwrap(), old);
    assert!(!temp.path().join("target.py.~0~").exists());
}

#[test]
fn changed_content_copies_reference_mtime() {
    let temp = TempDir::new().unwrap();
    let reference = temp.path().join("ref.py");
    let target = temp.path().join("target.py");
    fs::write(&reference, "a\n").unwrap();
    fs::write(&target, "old\n").unwrap();

    let stamp = SystemTime::now() - Duration::from_secs(7 * 86_400);
    set_mtime(&reference, stamp);

    let outcome = write_if_changed(
        &lines(&["new\n"]),
        &target,
        &reference,
        &WriteOptions::default(),
    )
    .unwrap();

    assert!(outcome.changed);
    assert!(outcome.timestamp_copied);
    assert_eq!(read_lines(&target).unwrap(), lines(&["new\n"]));
    assert_eq!(fs::metadata(&target).unwrap().modified().unwrap(), stamp);
}

#[test]
fn backup_keeps_previous_content() {
    let temp = TempDir::new().unwrap();
    let reference = temp.path().join("ref.py");
    let target = temp.path().join("target.py");
    fs::write(&reference, "a\n").unwrap();
    fs::write(&target, "previous\n").unwrap();

    let outcome = write_if_changed(
        &lines(&["next\n"]),
        &target,
        &reference,
        &WriteOptions { backup: true, dry_run: false },
    )
    .unwrap();

    let backup = outcome.backup.unwrap();
    assert_eq!(backup, temp.path().join("target.py.~0~"));
    assert_eq!(fs::read_to_string(backup).unwrap(), "previous\n");
    assert_eq!(fs::read_to_string(&target).unwrap(), "next\n");
}

#[test]
fn backup_numbering_skips_existing() {
    let temp = TempDir::new().unwrap();
    let reference = temp.path().join("ref.py");
    let target = temp.path().join("target.py");
    fs::write(&reference, "a\n").unwrap();
    fs::write(&target, "second\n").unwrap();
    fs::write(temp.path().join("target.py.~0~"), "first\n").unwrap();

    let outcome = write_if_changed(
        &lines(&["third\n"]),
        &target,
        &reference,
        &WriteOptions { backup: true, dry_run: false },
    )
    .unwrap();

    assert_eq!(outcome.backup, Some(temp.path().join("target.py.~1~")));
    assert_eq!(
        fs::read_to_string(temp.path().join("target.py.~0~")).unwrap(),
        "first\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("target.py.~1~")).unwrap(),
        "second\n"
    );
}

#[test]
fn no_backup_for_new_target() {
    let temp = TempDir::new().unwrap();
    let reference = temp.path().join("ref.py");
    let target = temp.path().join("target.py");
    fs::write(&reference, "a\n").unwrap();

    let outcome = write_if_changed(
        &lines(&["a\n"]),
        &target,
        &reference,
        &WriteOptions { backup: true, dry_run: false },
    )
    .unwrap();

    assert!(outcome.changed);
    assert!(outcome.backup.is_none());
}

#[test]
fn dry_run_reports_without_writing() {
    let temp = TempDir::new().unwrap();
    let reference = temp.path().join("ref.py");
    let target = temp.path().join("target.py");
    fs::write(&reference, "a\n").unwrap();
    fs::write(&target, "old\n").unwrap();

    let outcome = write_if_changed(
        &lines(&["new\n"]),
        &target,
        &reference,
        &WriteOptions { backup: true, dry_run: true },
    )
    .unwrap();

    assert!(outcome.changed);
    assert!(outcome.backup.is_none());
    assert_eq!(fs::read_to_string(&target).unwrap(), "old\n");
}

#[test]
fn missing_reference_is_an_error() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("target.py");

    let result = write_if_changed(
        &lines(&["a\n"]),
        &target,
        &temp.path().join("absent.py"),
        &WriteOptions::default(),
    );

    assert!(result.is_err());
}

#[test]
fn failed_write_keeps_target_in_place() {
    let temp = TempDir::new().unwrap();
    let reference = temp.path().join("ref.py");
    let target = temp.path().join("t.py");
    fs::write(&reference, "a\n").unwrap();
    fs::write(&target, "#@x\nold\n").unwrap();

    // A directory where the temp file should go makes the atomic write fail
    let blocker = temp
        .path()
        .join(format!(".t.py.{}.tmp", std::process::id()));
    fs::create_dir(&blocker).unwrap();

    let result = write_if_changed(
        &lines(&["#@x\n", "new\n"]),
        &target,
        &reference,
        &WriteOptions { backup: true, dry_run: false },
    );

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&target).unwrap(), "#@x\nold\n");
    assert_eq!(
        fs::read_to_string(temp.path().join("t.py.~0~")).unwrap(),
        "#@x\nold\n"
    );
}
