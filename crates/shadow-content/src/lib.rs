//! Marker-aware change propagation for Shadow Sync
//!
//! A *private* file carries sentinel lines (markers) that encode an outline
//! structure. Its *public* twin is the same text with every marker removed.
//! This crate merges edits made to the public text back into the private
//! text without ever losing or reordering a marker.
//!
//! The pieces, leaf first:
//!
//! - [`marker`]: maps a filename to the marker prefix for its language
//! - [`cursor`]: forward-only line reader and append-only line writer
//! - [`strip`]: splits a private file into content, markers, and an index mapping
//! - [`diff`]: line-level alignment on top of `similar`
//! - [`propagate`]: replays the alignment against the private file
//! - [`verify`]: proves the propagated output is faithful
//!
//! # Example
//!
//! ```
//! use shadow_content::{Marker, propagate};
//!
//! let marker = Marker::new("#@").unwrap();
//! let private: Vec<String> = ["#@1\n", "a\n", "#@2\n", "b\n"]
//!     .iter().map(|s| s.to_string()).collect();
//! let public: Vec<String> = ["a\n", "NEW\n", "b\n"]
//!     .iter().map(|s| s.to_string()).collect();
//!
//! let merged = propagate(&public, &private, &marker).unwrap();
//! assert_eq!(merged, ["#@1\n", "a\n", "NEW\n", "#@2\n", "b\n"]);
//! ```

pub mod cursor;
pub mod diff;
pub mod error;
pub mod marker;
pub mod propagate;
pub mod strip;
pub mod verify;

pub use cursor::{LineReader, LineWriter};
pub use diff::{DiffAlgorithm, DiffTag, LineOp, line_ops};
pub use error::{Error, Result};
pub use marker::{DEFAULT_MARKER, Marker, MarkerTable};
pub use propagate::{PropagateOptions, propagate, propagate_with};
pub use strip::{Stripped, strip};
pub use verify::{Mismatch, MismatchKind, VerifyError, verify};
