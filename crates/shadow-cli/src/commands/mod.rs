//! Command implementations for shadow-cli

pub mod completions;
pub mod init;
pub mod inspect;
pub mod sync;

pub use completions::run_completions;
pub use init::run_init;
pub use inspect::{run_locate, run_marker};
pub use sync::{run_check, run_pull, run_push};
