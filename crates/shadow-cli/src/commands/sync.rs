//! Pull, push, and check command implementations

use std::path::{Path, PathBuf};

use colored::Colorize;
use shadow_core::{PullReport, PushReport, ShadowController, SyncOptions};

use crate::error::{CliError, Result};

/// Run the pull command
///
/// Files are processed independently; a failure on one does not stop the
/// rest, but makes the command fail at the end.
pub fn run_pull(
    controller: &ShadowController,
    files: &[PathBuf],
    dry_run: bool,
    json: bool,
) -> Result<()> {
    if !json {
        println!(
            "{} Pulling {} file(s){}...",
            "=>".blue().bold(),
            files.len(),
            if dry_run { " (dry run)" } else { "" }
        );
    }

    let options = SyncOptions { dry_run };
    let mut reports = Vec::new();
    let mut failures = 0;

    for file in files {
        match controller.pull(file, &options) {
            Ok(report) => {
                if !json {
                    print_pull(&report);
                }
                reports.push(report);
            }
            Err(e) => {
                failures += 1;
                print_failure(file, &e);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    finish(failures, files.len())
}

/// Run the push command
pub fn run_push(
    controller: &ShadowController,
    files: &[PathBuf],
    dry_run: bool,
    json: bool,
) -> Result<()> {
    if !json {
        println!(
            "{} Pushing {} file(s){}...",
            "=>".blue().bold(),
            files.len(),
            if dry_run { " (dry run)" } else { "" }
        );
    }

    let options = SyncOptions { dry_run };
    let mut reports = Vec::new();
    let mut failures = 0;

    for file in files {
        match controller.push(file, &options) {
            Ok(report) => {
                if !json {
                    print_push(&report);
                }
                reports.push(report);
            }
            Err(e) => {
                failures += 1;
                print_failure(file, &e);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    finish(failures, files.len())
}

/// Run the check command
///
/// Fails when any file is out of sync or cannot be checked.
pub fn run_check(controller: &ShadowController, files: &[PathBuf]) -> Result<()> {
    println!("{} Checking {} file(s)...", "=>".blue().bold(), files.len());

    let mut pending = 0;
    let mut failures = 0;

    for file in files {
        match controller.check(file) {
            Ok(report) if report.changed => {
                pending += 1;
                println!(
                    "   {} {} ({})",
                    "PENDING".yellow().bold(),
                    file.display().to_string().cyan(),
                    changes(report.inserted, report.deleted)
                );
            }
            Ok(_) => {
                println!("   {} {}", "OK".green().bold(), file.display());
            }
            Err(e) => {
                failures += 1;
                print_failure(file, &e);
            }
        }
    }

    if failures > 0 {
        return finish(failures, files.len());
    }
    if pending > 0 {
        println!();
        println!("Run {} to update the private files.", "shadow pull".cyan());
        return Err(CliError::user(format!(
            "{pending} of {} file(s) out of sync",
            files.len()
        )));
    }

    println!("{} All files in sync.", "OK".green().bold());
    Ok(())
}

fn print_pull(report: &PullReport) {
    let private = report.private.display().to_string();
    if !report.changed {
        println!("   {} {} unchanged", "-".dimmed(), private.dimmed());
    } else if report.dry_run {
        println!(
            "   {} Would update {} ({})",
            "[dry-run]".yellow(),
            private.cyan(),
            changes(report.inserted, report.deleted)
        );
    } else {
        println!(
            "   {} {} ({})",
            "+".green(),
            private.cyan(),
            changes(report.inserted, report.deleted)
        );
        print_backup(report.backup.as_deref());
    }
}

fn print_push(report: &PushReport) {
    let public = report.public.display().to_string();
    if !report.changed {
        println!("   {} {} unchanged", "-".dimmed(), public.dimmed());
    } else if report.dry_run {
        println!("   {} Would update {}", "[dry-run]".yellow(), public.cyan());
    } else {
        println!(
            "   {} {} ({} marker lines removed)",
            "+".green(),
            public.cyan(),
            report.markers_removed
        );
        print_backup(report.backup.as_deref());
    }
}

fn print_backup(backup: Option<&Path>) {
    if let Some(backup) = backup {
        println!("     backup: {}", backup.display().to_string().dimmed());
    }
}

fn print_failure(file: &Path, error: &shadow_core::Error) {
    let label = if error.is_internal() {
        "INTERNAL"
    } else {
        "FAILED"
    };
    eprintln!("   {} {}: {}", label.red().bold(), file.display(), error);
}

fn changes(inserted: usize, deleted: usize) -> String {
    format!("+{inserted} -{deleted}")
}

fn finish(failures: usize, total: usize) -> Result<()> {
    if failures == 0 {
        Ok(())
    } else {
        Err(CliError::user(format!("{failures} of {total} file(s) failed")))
    }
}
