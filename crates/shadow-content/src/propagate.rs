//! Change propagation from a public file into its private twin
//!
//! The old public lines are derived by stripping the old private file. They
//! are aligned against the new public lines, and the alignment is replayed
//! over the old private file while its marker lines are interleaved at the
//! positions the index mapping gives them.
//!
//! Placement rule: text inserted between two content blocks goes at the end
//! of the preceding block, before any markers that follow it. Text appended
//! after the last content line goes before the trailing marker block rather
//! than after every marker.

use crate::cursor::{LineReader, LineWriter};
use crate::diff::{DiffAlgorithm, DiffTag, LineOp, line_ops};
use crate::error::Result;
use crate::marker::Marker;
use crate::strip::{Stripped, strip};
use crate::verify::verify;

/// Tuning for a propagation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropagateOptions {
    /// Alignment algorithm for old vs. new public lines.
    pub algorithm: DiffAlgorithm,
    /// Emit per-operation debug events and cursor dumps.
    pub trace: bool,
}

/// Merge `new_public` into `old_private` with default options.
pub fn propagate(new_public: &[String], old_private: &[String], marker: &Marker) -> Result<Vec<String>> {
    propagate_with(new_public, old_private, marker, &PropagateOptions::default())
}

/// Merge `new_public` into `old_private`.
///
/// The result always strips back to `new_public` and always holds every
/// marker of `old_private` in its original order. If it does not, the run
/// fails with [`Error::Verification`](crate::Error::Verification) and
/// nothing is returned.
pub fn propagate_with(
    new_public: &[String],
    old_private: &[String],
    marker: &Marker,
    options: &PropagateOptions,
) -> Result<Vec<String>> {
    let Stripped {
        kept: old_public,
        markers: old_markers,
        mapping,
    } = strip(old_private, marker);
    let ops = line_ops(&old_public, new_public, options.algorithm);

    let mut private = LineReader::new(old_private);
    let mut public = LineReader::new(&old_public);
    let mut incoming = LineReader::new(new_public);
    let mut writer = LineWriter::with_capacity(old_private.len() + new_public.len());

    // Loop invariant: all three readers are in sync with the start of `op`.
    for op in &ops {
        if options.trace {
            trace_op(op, &private, &public, &incoming, &writer);
        }

        if let Some(upto) = marker_flush_point(op, &mapping, old_private.len()) {
            copy_markers(&mut private, &mut writer, marker, upto);
        }

        match op.tag {
            DiffTag::Equal => {
                // Content and markers alike, through the last kept line of the block.
                copy_lines(&mut private, &mut writer, mapping[op.old.end - 1] + 1);
                incoming.sync(op.new.end);
            }
            DiffTag::Replace | DiffTag::Insert => {
                copy_lines(&mut incoming, &mut writer, op.new.end);
            }
            DiffTag::Delete => {}
        }
        public.sync(op.old.end);
    }

    if options.trace {
        private.dump("old private lines");
        public.dump("old public lines");
        incoming.dump("new public lines");
        writer.dump("new private lines before final copy");
    }

    let end = private.size();
    copy_markers(&mut private, &mut writer, marker, end);

    let new_private = writer.into_lines();
    verify(&new_private, new_public, &old_markers, marker)?;

    tracing::debug!(
        ops = ops.len(),
        markers = old_markers.len(),
        lines = new_private.len(),
        "propagated public changes"
    );
    Ok(new_private)
}

/// Private-file index up to which markers are flushed before `op` runs.
///
/// `None` means the flush is deferred: the op inserts past the last private
/// line, so the trailing markers are left for the final copy and the new
/// text lands before them.
fn marker_flush_point(op: &LineOp, mapping: &[usize], private_len: usize) -> Option<usize> {
    let anchor = mapping[op.old.start];
    match op.tag {
        DiffTag::Insert if anchor >= private_len => None,
        // Stay at the end of the preceding block instead of crossing the
        // markers that open the next one.
        DiffTag::Insert if op.old.start > 0 => Some(mapping[op.old.start - 1] + 1),
        _ => Some(anchor),
    }
}

/// Copy marker lines from `reader` up to, not including, `upto`; content
/// lines passed over are dropped.
fn copy_markers(reader: &mut LineReader<'_>, writer: &mut LineWriter, marker: &Marker, upto: usize) {
    while reader.index() < upto {
        let Some(line) = reader.next() else { break };
        if marker.is_marker_line(line) {
            writer.put(line);
        }
    }
}

/// Copy every line from `reader` up to, not including, `upto`.
fn copy_lines(reader: &mut LineReader<'_>, writer: &mut LineWriter, upto: usize) {
    while reader.index() < upto {
        let Some(line) = reader.next() else { break };
        writer.put(line);
    }
}

fn trace_op(
    op: &LineOp,
    private: &LineReader<'_>,
    public: &LineReader<'_>,
    incoming: &LineReader<'_>,
    writer: &LineWriter,
) {
    tracing::debug!(
        tag = %op.tag,
        old_start = op.old.start,
        old_end = op.old.end,
        new_start = op.new.start,
        new_end = op.new.end,
        private = private.index(),
        old_public = public.index(),
        new_public = incoming.index(),
        written = writer.index(),
        "diff op"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn marker() -> Marker {
        Marker::new("#@").unwrap()
    }

    #[test]
    fn flush_point_for_equal_is_anchor() {
        let mapping = [1, 3, 4];
        let op = LineOp::new(DiffTag::Equal, 1..2, 2..3);
        assert_eq!(marker_flush_point(&op, &mapping, 4), Some(3));
    }

    #[test]
    fn flush_point_for_middle_insert_stops_after_previous_line() {
        let mapping = [1, 3, 4];
        let op = LineOp::new(DiffTag::Insert, 1..1, 1..2);
        assert_eq!(marker_flush_point(&op, &mapping, 4), Some(2));
    }

    #[test]
    fn flush_point_for_leading_insert_crosses_header_markers() {
        let mapping = [1, 3, 4];
        let op = LineOp::new(DiffTag::Insert, 0..0, 0..1);
        assert_eq!(marker_flush_point(&op, &mapping, 4), Some(1));
    }

    #[test]
    fn flush_point_for_insert_past_end_is_deferred() {
        let mapping = [1, 3, 5];
        let op = LineOp::new(DiffTag::Insert, 2..2, 2..3);
        assert_eq!(marker_flush_point(&op, &mapping, 5), None);
    }

    #[test]
    fn flush_point_for_insert_into_empty_private_is_deferred() {
        let mapping = [0];
        let op = LineOp::new(DiffTag::Insert, 0..0, 0..2);
        assert_eq!(marker_flush_point(&op, &mapping, 0), None);
    }

    #[test]
    fn copy_markers_drops_content() {
        let source = lines(&["#@a\n", "x\n", "#@b\n", "y\n"]);
        let mut reader = LineReader::new(&source);
        let mut writer = LineWriter::new();

        copy_markers(&mut reader, &mut writer, &marker(), 3);

        assert_eq!(writer.lines(), ["#@a\n", "#@b\n"]);
        assert_eq!(reader.index(), 3);
    }

    #[test]
    fn copy_lines_keeps_everything() {
        let source = lines(&["#@a\n", "x\n", "#@b\n"]);
        let mut reader = LineReader::new(&source);
        let mut writer = LineWriter::new();

        copy_lines(&mut reader, &mut writer, 2);

        assert_eq!(writer.lines(), ["#@a\n", "x\n"]);
    }

    #[test]
    fn unchanged_public_reproduces_private() {
        let private = lines(&["#@+leo\n", "#@+node\n", "a\n", "b\n", "#@-node\n", "#@-leo\n"]);
        let public = lines(&["a\n", "b\n"]);

        assert_eq!(propagate(&public, &private, &marker()).unwrap(), private);
    }

    #[test]
    fn tracing_does_not_change_output() {
        let private = lines(&["#@1\n", "a\n", "#@2\n", "b\n"]);
        let public = lines(&["a\n", "z\n"]);
        let options = PropagateOptions {
            trace: true,
            ..Default::default()
        };

        assert_eq!(
            propagate_with(&public, &private, &marker(), &options).unwrap(),
            propagate(&public, &private, &marker()).unwrap()
        );
    }
}
