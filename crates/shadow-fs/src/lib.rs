//! Filesystem layer for Shadow Sync
//!
//! Reads files as line sequences, writes them back only when they changed,
//! keeps numbered backups, copies modification times, and resolves where a
//! public file's private twin lives.

pub mod backup;
pub mod config;
pub mod error;
pub mod io;
pub mod layout;
pub mod timestamp;
pub mod writer;

pub use backup::{backup_path, make_backup};
pub use config::ConfigStore;
pub use error::{Error, Result};
pub use layout::{DEFAULT_SHADOW_PREFIX, DEFAULT_SHADOW_SUBDIR, ShadowLayout};
pub use writer::{WriteOptions, WriteOutcome, write_if_changed};
