//! Locate and marker command implementations

use std::path::{Path, PathBuf};

use colored::Colorize;
use shadow_core::ShadowController;

use crate::error::Result;

/// Run the locate command
///
/// Prints the private file path and the 1-based line holding `line` of
/// `public`, in `path:line` form.
pub fn run_locate(controller: &ShadowController, public: &Path, line: usize) -> Result<()> {
    let private = controller.private_path_for(public)?;
    let private_line = controller.locate(public, line)?;
    println!("{}:{}", private.display(), private_line);
    Ok(())
}

/// Run the marker command
///
/// With `list`, prints the whole extension table as `extension marker`.
pub fn run_marker(controller: &ShadowController, files: &[PathBuf], list: bool) -> Result<()> {
    if list {
        for (extension, marker) in controller.markers().entries() {
            println!("{} {}", extension.cyan(), marker.as_str().green().bold());
        }
        return Ok(());
    }
    for file in files {
        let marker = controller.marker_for(file);
        println!("{} {}", marker.as_str().green().bold(), file.display());
    }
    Ok(())
}
