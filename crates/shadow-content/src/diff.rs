//! Line-level alignment
//!
//! Thin layer over `similar` that yields contiguous equal/replace/delete/insert
//! operations covering both inputs.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use similar::Algorithm;

/// Alignment algorithm used to compare old and new public lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl DiffAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Myers => "myers",
            Self::Patience => "patience",
            Self::Lcs => "lcs",
        }
    }

    fn to_similar(self) -> Algorithm {
        match self {
            Self::Myers => Algorithm::Myers,
            Self::Patience => Algorithm::Patience,
            Self::Lcs => Algorithm::Lcs,
        }
    }
}

impl fmt::Display for DiffAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "myers" => Ok(Self::Myers),
            "patience" => Ok(Self::Patience),
            "lcs" => Ok(Self::Lcs),
            other => Err(format!(
                "unknown diff algorithm '{other}' (expected myers, patience or lcs)"
            )),
        }
    }
}

/// Kind of a line operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

impl fmt::Display for DiffTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Equal => "equal",
            Self::Replace => "replace",
            Self::Delete => "delete",
            Self::Insert => "insert",
        })
    }
}

/// One alignment operation with half-open ranges into the old and new sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOp {
    pub tag: DiffTag,
    pub old: Range<usize>,
    pub new: Range<usize>,
}

impl LineOp {
    pub fn new(tag: DiffTag, old: Range<usize>, new: Range<usize>) -> Self {
        Self { tag, old, new }
    }
}

impl From<&similar::DiffOp> for LineOp {
    fn from(op: &similar::DiffOp) -> Self {
        let (tag, old, new) = op.as_tag_tuple();
        let tag = match tag {
            similar::DiffTag::Equal => DiffTag::Equal,
            similar::DiffTag::Replace => DiffTag::Replace,
            similar::DiffTag::Delete => DiffTag::Delete,
            similar::DiffTag::Insert => DiffTag::Insert,
        };
        Self { tag, old, new }
    }
}

/// Align `old` against `new`.
///
/// Consecutive operations are contiguous: the old ranges tile `0..old.len()`
/// and the new ranges tile `0..new.len()`. Two empty inputs produce no
/// operations.
pub fn line_ops(old: &[String], new: &[String], algorithm: DiffAlgorithm) -> Vec<LineOp> {
    similar::capture_diff_slices(algorithm.to_similar(), old, new)
        .iter()
        .map(LineOp::from)
        .collect()
}

/// Similarity of the two sequences in `0.0..=1.0`.
pub fn ratio(old: &[String], new: &[String], algorithm: DiffAlgorithm) -> f32 {
    let ops = similar::capture_diff_slices(algorithm.to_similar(), old, new);
    similar::get_diff_ratio(&ops, old.len(), new.len())
}
