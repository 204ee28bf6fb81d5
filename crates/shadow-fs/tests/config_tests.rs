use rstest::rstest;
use serde::{Deserialize, Serialize};
use shadow_fs::{ConfigStore, Error};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    shadow_subdir: String,
    backups: bool,
}

fn sample() -> Sample {
    Sample {
        shadow_subdir: "Shadow".into(),
        backups: true,
    }
}

#[rstest]
#[case("config.toml")]
#[case("config.json")]
#[case("config.yaml")]
#[case("config.yml")]
fn save_then_load(#[case] name: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    let store = ConfigStore::new();

    store.save(&path, &sample()).unwrap();
    let loaded: Sample = store.load(&path).unwrap();

    assert_eq!(loaded, sample());
}

#[test]
fn load_toml_written_by_hand() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".shadow.toml");
    fs::write(&path, "shadow_subdir = \"LeoFolder\"\nbackups = false\n").unwrap();

    let loaded: Sample = ConfigStore::new().load(&path).unwrap();

    assert_eq!(loaded.shadow_subdir, "LeoFolder");
    assert!(!loaded.backups);
}

#[test]
fn malformed_config_reports_format_and_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(&path, "shadow_subdir = [unterminated").unwrap();

    let err = ConfigStore::new().load::<Sample>(&path).unwrap_err();

    match err {
        Error::ConfigParse { format, path: p, .. } => {
            assert_eq!(format, "TOML");
            assert_eq!(p, path);
        }
        other => panic!("expected ConfigParse, got {other:?}"),
    }
}

#[test]
fn unknown_extension_is_unsupported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.ini");
    fs::write(&path, "x=1").unwrap();

    let err = ConfigStore::new().load::<Sample>(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { extension } if extension == "ini"));
}

#[test]
fn missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = ConfigStore::new()
        .load::<Sample>(&temp.path().join("absent.toml"))
        .unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
