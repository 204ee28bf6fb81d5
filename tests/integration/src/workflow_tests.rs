//! End-to-end workflow tests
//!
//! These exercise the complete flow across crates: config discovery ->
//! push of a private outline -> edits to the public file -> pull back into
//! the private file.

use pretty_assertions::assert_eq;
use rstest::rstest;
use shadow_content::{DiffAlgorithm, Marker, strip};
use shadow_core::{ShadowConfig, ShadowController, SyncOptions};
use shadow_fs::io::{read_lines, split_lines};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const OUTLINE: &str = "\
//@+leo-ver=5-thin
//@+node:ekr.1: * @file main.c
//@@language c
#include <stdio.h>
//@+others
//@+node:ekr.2: ** helper
static int helper(int x) {
    return x * 2;
}
//@+node:ekr.3: ** main
int main(void) {
    printf(\"%d\\n\", helper(21));
    return 0;
}
//@-others
//@-leo
";

struct Project {
    _temp: TempDir,
    public: PathBuf,
    private: PathBuf,
}

/// A project with `src/main.c` shadowed by `src/LeoFolder/main.c`, public
/// side generated by a push.
fn setup_project(config: &str) -> Project {
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("src");
    fs::create_dir_all(src.join("LeoFolder")).unwrap();
    fs::write(temp.path().join(".shadow.toml"), config).unwrap();

    let private = src.join("LeoFolder").join("main.c");
    fs::write(&private, OUTLINE).unwrap();

    let project = Project {
        public: src.join("main.c"),
        private,
        _temp: temp,
    };
    controller(&project)
        .push(&project.private, &SyncOptions::default())
        .unwrap();
    project
}

fn controller(project: &Project) -> ShadowController {
    let root = project.public.parent().and_then(Path::parent).unwrap();
    ShadowController::new(ShadowConfig::discover(root).unwrap()).unwrap()
}

fn markers(path: &Path) -> Vec<String> {
    strip(&read_lines(path).unwrap(), &Marker::new("//@").unwrap()).markers
}

fn edit_public(project: &Project, edit: impl FnOnce(String) -> String) {
    let text = fs::read_to_string(&project.public).unwrap();
    fs::write(&project.public, edit(text)).unwrap();
}

#[test]
fn test_push_produces_marker_free_public_file() {
    let project = setup_project("");
    let public = fs::read_to_string(&project.public).unwrap();

    assert!(!public.contains("//@"));
    assert!(public.starts_with("#include <stdio.h>\n"));
    assert!(public.contains("static int helper"));
}

#[test]
fn test_edit_pull_cycle_keeps_outline_structure() {
    let project = setup_project("");
    let before = markers(&project.private);
    let controller = controller(&project);

    edit_public(&project, |text| text.replace("x * 2", "x + x"));
    assert!(controller.pull(&project.public, &SyncOptions::default()).unwrap().changed);

    edit_public(&project, |text| {
        text.replace("    return 0;\n", "    puts(\"done\");\n    return 0;\n")
    });
    assert!(controller.pull(&project.public, &SyncOptions::default()).unwrap().changed);

    edit_public(&project, |text| {
        text.replace("#include <stdio.h>\n", "#include <stdio.h>\n#include <stdlib.h>\n")
    });
    assert!(controller.pull(&project.public, &SyncOptions::default()).unwrap().changed);

    assert_eq!(markers(&project.private), before);

    let private = fs::read_to_string(&project.private).unwrap();
    assert!(private.contains("    return x + x;\n"));
    assert!(private.contains("    puts(\"done\");\n    return 0;\n}\n//@-others\n"));
    assert!(private.contains("#include <stdio.h>\n#include <stdlib.h>\n//@+others\n"));

    // The regenerated public file matches what the user wrote
    let public = fs::read_to_string(&project.public).unwrap();
    controller.push(&project.private, &SyncOptions::default()).unwrap();
    assert_eq!(fs::read_to_string(&project.public).unwrap(), public);
}

#[test]
fn test_function_added_before_main_lands_in_helper_node() {
    let project = setup_project("");

    edit_public(&project, |text| {
        text.replace(
            "int main(void) {\n",
            "static void unused(void) {}\nint main(void) {\n",
        )
    });
    controller(&project)
        .pull(&project.public, &SyncOptions::default())
        .unwrap();

    let private = fs::read_to_string(&project.private).unwrap();
    assert!(private.contains(
        "    return x * 2;\n}\nstatic void unused(void) {}\n//@+node:ekr.3: ** main\n"
    ));
}

#[test]
fn test_deleting_a_function_keeps_its_node() {
    let project = setup_project("");
    let before = markers(&project.private);

    edit_public(&project, |text| {
        text.replace("static int helper(int x) {\n    return x * 2;\n}\n", "")
    });
    controller(&project)
        .pull(&project.public, &SyncOptions::default())
        .unwrap();

    assert_eq!(markers(&project.private), before);
    assert!(!fs::read_to_string(&project.private).unwrap().contains("helper(int"));
}

#[rstest]
#[case::myers(DiffAlgorithm::Myers)]
#[case::patience(DiffAlgorithm::Patience)]
#[case::lcs(DiffAlgorithm::Lcs)]
fn test_config_algorithm_round_trips(#[case] algorithm: DiffAlgorithm) {
    let project = setup_project(&format!("algorithm = \"{algorithm}\"\nbackups = true\n"));
    let controller = controller(&project);
    assert_eq!(controller.config().algorithm, algorithm);

    edit_public(&project, |text| format!("/* header */\n{text}/* footer */\n"));
    let report = controller
        .pull(&project.public, &SyncOptions::default())
        .unwrap();

    assert!(report.backup.is_some());
    let private = read_lines(&project.private).unwrap();
    let public = read_lines(&project.public).unwrap();
    assert_eq!(strip(&private, &Marker::new("//@").unwrap()).kept, public);
    assert_eq!(private.last().map(String::as_str), Some("//@-leo\n"));
}

#[test]
fn test_check_after_pull_is_clean() {
    let project = setup_project("");
    let controller = controller(&project);

    edit_public(&project, |text| text.replace("21", "42"));
    assert!(controller.check(&project.public).unwrap().changed);

    controller
        .pull(&project.public, &SyncOptions::default())
        .unwrap();
    assert!(!controller.check(&project.public).unwrap().changed);
}

#[test]
fn test_locate_after_edits() {
    let project = setup_project("");
    let controller = controller(&project);

    let public = split_lines(&fs::read_to_string(&project.public).unwrap());
    let line = public
        .iter()
        .position(|l| l.starts_with("int main"))
        .map(|i| i + 1)
        .unwrap();

    let private_line = controller.locate(&project.public, line).unwrap();
    let private = read_lines(&project.private).unwrap();
    assert_eq!(private[private_line - 1], "int main(void) {\n");
}
