//! Where private files live relative to their public twins
//!
//! `dir/name.py` is shadowed by `dir/<subdir>/<prefix>name.py`.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Default shadow directory name.
pub const DEFAULT_SHADOW_SUBDIR: &str = "LeoFolder";

/// Default private filename prefix.
pub const DEFAULT_SHADOW_PREFIX: &str = "";

/// Shadow directory naming scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowLayout {
    subdir: String,
    prefix: String,
}

impl Default for ShadowLayout {
    fn default() -> Self {
        Self {
            subdir: DEFAULT_SHADOW_SUBDIR.to_string(),
            prefix: DEFAULT_SHADOW_PREFIX.to_string(),
        }
    }
}

impl ShadowLayout {
    /// Create a layout, rejecting subdirectory names that are not a single
    /// plain path component.
    pub fn new(subdir: impl Into<String>, prefix: impl Into<String>) -> Result<Self> {
        let subdir = subdir.into();
        let prefix = prefix.into();

        let plain = |s: &str| !s.contains(['/', '\\']) && s != "." && s != "..";
        if subdir.is_empty() || !plain(&subdir) {
            return Err(Error::InvalidShadowPath {
                path: PathBuf::from(&subdir),
                reason: "shadow directory must be a single directory name".into(),
            });
        }
        if !plain(&prefix) {
            return Err(Error::InvalidShadowPath {
                path: PathBuf::from(&prefix),
                reason: "shadow prefix must not contain path separators".into(),
            });
        }

        Ok(Self { subdir, prefix })
    }

    pub fn subdir(&self) -> &str {
        &self.subdir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The shadow directory that holds private files for `public`.
    pub fn shadow_dir_for(&self, public: &Path) -> PathBuf {
        match public.parent() {
            Some(parent) => parent.join(&self.subdir),
            None => PathBuf::from(&self.subdir),
        }
    }

    /// Private file path for a public file.
    pub fn private_path_for(&self, public: &Path) -> Result<PathBuf> {
        let name = public
            .file_name()
            .ok_or_else(|| Error::InvalidShadowPath {
                path: public.to_path_buf(),
                reason: "path has no file name".into(),
            })?
            .to_string_lossy();
        Ok(self
            .shadow_dir_for(public)
            .join(format!("{}{}", self.prefix, name)))
    }

    /// Public file path for a private file, or `None` if `private` is not
    /// inside a shadow directory or lacks the prefix.
    pub fn public_path_for(&self, private: &Path) -> Option<PathBuf> {
        let name = private.file_name()?.to_str()?;
        let shadow_dir = private.parent()?;
        if shadow_dir.file_name()?.to_str()? != self.subdir {
            return None;
        }
        let public_name = name.strip_prefix(self.prefix.as_str())?;
        if public_name.is_empty() {
            return None;
        }
        let base = shadow_dir.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(public_name))
    }

    /// True if `path` sits directly inside a shadow directory.
    pub fn is_private(&self, path: &Path) -> bool {
        self.public_path_for(path).is_some()
    }
}
