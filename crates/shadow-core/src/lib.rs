//! Orchestration layer for Shadow Sync
//!
//! Ties the pure propagation core (`shadow-content`) to the filesystem layer
//! (`shadow-fs`):
//!
//! ```text
//!              CLI
//!               |
//!          shadow-core
//!           /       \
//! shadow-content   shadow-fs
//! ```
//!
//! - **pull**: merge edits of a public file into its private twin
//! - **push**: regenerate a public file from its private twin
//! - **check**: a pull that only reports
//! - **locate**: map a public line number to the private file

pub mod config;
pub mod controller;
pub mod error;

pub use config::{CONFIG_FILE_STEM, ShadowConfig, config_file_names};
pub use controller::{PullReport, PushReport, ShadowController, SyncOptions};
pub use error::{Error, Result};
