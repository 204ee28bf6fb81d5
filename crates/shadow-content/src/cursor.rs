//! Sequential line cursors
//!
//! [`LineReader`] walks a fixed line sequence forward with an explicit
//! position; [`LineWriter`] accumulates output lines.

/// Forward-only reader over a line sequence.
///
/// The position is the index of the *next* line to be returned. It starts
/// at 0 and never moves backwards.
#[derive(Debug, Clone)]
pub struct LineReader<'a> {
    lines: &'a [String],
    position: usize,
}

impl<'a> LineReader<'a> {
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines, position: 0 }
    }

    /// Index of the next line to be read.
    pub fn index(&self) -> usize {
        self.position
    }

    /// Total number of lines, regardless of position.
    pub fn size(&self) -> usize {
        self.lines.len()
    }

    /// Jump forward to `index` without yielding the skipped lines.
    ///
    /// Positions behind the cursor are ignored; positions past the end
    /// clamp to the end.
    pub fn sync(&mut self, index: usize) {
        self.position = index.clamp(self.position, self.lines.len());
    }

    /// Emit the sequence with the cursor position highlighted.
    pub(crate) fn dump(&self, title: &str) {
        tracing::trace!(position = self.position, size = self.lines.len(), "{title}");
        for (i, line) in self.lines.iter().enumerate() {
            let pointer = if i == self.position { "===>" } else { "" };
            tracing::trace!("{pointer}{i}:{}", line.trim_end_matches(['\r', '\n']));
        }
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.get(self.position)?;
        self.position += 1;
        Some(line.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.lines.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineReader<'_> {}

/// Append-only collector of output lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineWriter {
    lines: Vec<String>,
}

impl LineWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
        }
    }

    pub fn put(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Number of lines written so far.
    pub fn index(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub(crate) fn dump(&self, title: &str) {
        tracing::trace!(written = self.lines.len(), "{title}");
        for (i, line) in self.lines.iter().enumerate() {
            tracing::trace!("{i}:{}", line.trim_end_matches(['\r', '\n']));
        }
    }
}
