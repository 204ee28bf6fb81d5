//! Marker classification
//!
//! A marker is the comment prefix that identifies a sentinel line. Which
//! prefix applies is decided once per file from its extension.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Marker used when a file's extension is not in the table.
pub const DEFAULT_MARKER: &str = "#";

/// Secondary extension that is peeled off before classification.
const SECONDARY_EXTENSION: &str = "tmp";

/// Built-in extension table.
const BUILTIN_MARKERS: &[(&str, &str)] = &[
    ("c", "//@"),
    ("h", "//@"),
    ("py", "#@"),
    ("cfg", "#@"),
    ("ksh", "#@"),
    ("txt", "#@"),
    ("bat", "REM@"),
];

/// A sentinel line prefix such as `#@` or `//@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker(String);

impl Marker {
    /// Create a marker from a prefix.
    ///
    /// Fails when the prefix is blank or has leading or trailing whitespace.
    /// Marker lines are matched after their own indentation is trimmed, so a
    /// padded prefix would match no line at all.
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.trim().is_empty() || prefix.trim() != prefix {
            return Err(Error::InvalidMarker { prefix });
        }
        Ok(Self(prefix))
    }

    /// The fallback marker, [`DEFAULT_MARKER`].
    pub fn fallback() -> Self {
        Self(DEFAULT_MARKER.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if `line`, after leading whitespace is trimmed, starts with this marker.
    pub fn is_marker_line(&self, line: &str) -> bool {
        line.trim_start().starts_with(self.0.as_str())
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Marker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Extension-to-marker table.
///
/// Starts from the built-in entries; user overrides replace or extend them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTable {
    entries: BTreeMap<String, Marker>,
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MarkerTable {
    /// The built-in table: C sources, Python-style hash comments, batch files.
    pub fn builtin() -> Self {
        let entries = BUILTIN_MARKERS
            .iter()
            .map(|(ext, prefix)| (ext.to_string(), Marker(prefix.to_string())))
            .collect();
        Self { entries }
    }

    /// Add or replace the marker for `extension` (with or without a leading dot).
    pub fn with_override(mut self, extension: &str, prefix: &str) -> Result<Self> {
        let marker = Marker::new(prefix)?;
        self.entries
            .insert(extension.trim_start_matches('.').to_string(), marker);
        Ok(self)
    }

    /// Apply a batch of overrides, typically from configuration.
    pub fn with_overrides<'a, I>(self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        overrides
            .into_iter()
            .try_fold(self, |table, (ext, prefix)| table.with_override(ext, prefix))
    }

    /// Extension and marker pairs, sorted by extension.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Marker)> {
        self.entries.iter().map(|(ext, marker)| (ext.as_str(), marker))
    }

    /// Look up the marker for `filename` without falling back.
    ///
    /// A trailing `.tmp` extension is removed first, so `foo.py.tmp`
    /// classifies as `foo.py`.
    pub fn lookup(&self, filename: impl AsRef<Path>) -> Option<Marker> {
        classify_extension(filename.as_ref()).and_then(|ext| self.entries.get(&ext).cloned())
    }

    /// Classify `filename`, falling back to [`DEFAULT_MARKER`] with a warning
    /// when the extension is unknown.
    pub fn classify(&self, filename: impl AsRef<Path>) -> Marker {
        let filename = filename.as_ref();
        match self.lookup(filename) {
            Some(marker) => marker,
            None => {
                let extension = classify_extension(filename).unwrap_or_default();
                tracing::warn!(
                    filename = %filename.display(),
                    extension = %extension,
                    fallback = DEFAULT_MARKER,
                    "extension not known; using default marker"
                );
                Marker::fallback()
            }
        }
    }
}

/// Classify `filename` against the built-in table.
pub fn classify(filename: impl AsRef<Path>) -> Marker {
    MarkerTable::builtin().classify(filename)
}

/// The extension used for classification, after peeling off `.tmp`.
fn classify_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    if ext != SECONDARY_EXTENSION {
        return Some(ext.to_string());
    }
    let stem = path.file_stem()?;
    Path::new(stem)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_string)
}
