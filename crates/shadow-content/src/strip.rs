//! Marker stripping with an index mapping back to the original lines

use crate::marker::Marker;

/// A line sequence split into content and marker lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stripped {
    /// Non-marker lines, in original order.
    pub kept: Vec<String>,
    /// Marker lines, in original order.
    pub markers: Vec<String>,
    /// `mapping[k]` is the original index of `kept[k]`. One extra trailing
    /// entry holds the original length, so `mapping.len() == kept.len() + 1`.
    pub mapping: Vec<usize>,
}

impl Stripped {
    /// Length of the unstripped sequence.
    pub fn original_len(&self) -> usize {
        self.mapping.last().copied().unwrap_or_default()
    }

    /// Original index of the kept line at `index`, or `None` when `index`
    /// is not a kept line.
    pub fn private_index(&self, index: usize) -> Option<usize> {
        if index < self.kept.len() {
            self.mapping.get(index).copied()
        } else {
            None
        }
    }
}

/// Split `lines` into content lines, marker lines, and the index mapping.
pub fn strip(lines: &[String], marker: &Marker) -> Stripped {
    let mut kept = Vec::with_capacity(lines.len());
    let mut markers = Vec::new();
    let mut mapping = Vec::with_capacity(lines.len() + 1);

    for (index, line) in lines.iter().enumerate() {
        if marker.is_marker_line(line) {
            markers.push(line.clone());
        } else {
            kept.push(line.clone());
            mapping.push(index);
        }
    }
    mapping.push(lines.len());

    Stripped {
        kept,
        markers,
        mapping,
    }
}
