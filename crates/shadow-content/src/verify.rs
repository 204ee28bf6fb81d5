//! Output verification
//!
//! After propagation the result is stripped again and compared against what
//! it must reproduce. A mismatch means the propagator is wrong, so the error
//! carries both sequences for diagnosis.

use std::fmt;

use similar::TextDiff;

use crate::marker::Marker;
use crate::strip::strip;

/// Which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// Stripped output differs from the new public lines.
    PublicContent,
    /// Output markers differ from the original private markers.
    Markers,
}

impl MismatchKind {
    fn message(&self) -> &'static str {
        match self {
            Self::PublicContent => "not all changes made",
            Self::Markers => "markers not preserved",
        }
    }
}

/// One failed comparison with both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub kind: MismatchKind,
    pub expected_label: &'static str,
    pub expected: Vec<String>,
    pub actual_label: &'static str,
    pub actual: Vec<String>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({} lines expected, {} lines found)",
            self.kind.message(),
            self.expected.len(),
            self.actual.len()
        )?;
        let expected = self.expected.concat();
        let actual = self.actual.concat();
        let diff = TextDiff::from_lines(&expected, &actual);
        write!(
            f,
            "{}",
            diff.unified_diff()
                .context_radius(3)
                .header(self.expected_label, self.actual_label)
        )
    }
}

/// Propagated output failed self-verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyError {
    pub mismatches: Vec<Mismatch>,
}

impl VerifyError {
    pub fn has(&self, kind: MismatchKind) -> bool {
        self.mismatches.iter().any(|m| m.kind == kind)
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "propagated private file failed verification")?;
        for mismatch in &self.mismatches {
            write!(f, "{mismatch}")?;
        }
        Ok(())
    }
}

impl std::error::Error for VerifyError {}

/// Check that `new_private` reproduces `new_public` and keeps `original_markers`.
pub fn verify(
    new_private: &[String],
    new_public: &[String],
    original_markers: &[String],
    marker: &Marker,
) -> Result<(), VerifyError> {
    let stripped = strip(new_private, marker);
    let mut mismatches = Vec::new();

    if stripped.kept != new_public {
        mismatches.push(Mismatch {
            kind: MismatchKind::PublicContent,
            expected_label: "new public lines",
            expected: new_public.to_vec(),
            actual_label: "new public lines (derived from new private lines)",
            actual: stripped.kept,
        });
    }

    if stripped.markers != original_markers {
        mismatches.push(Mismatch {
            kind: MismatchKind::Markers,
            expected_label: "old markers",
            expected: original_markers.to_vec(),
            actual_label: "new markers",
            actual: stripped.markers,
        });
    }

    if mismatches.is_empty() {
        Ok(())
    } else {
        tracing::error!(
            checks = mismatches.len(),
            "propagated private file failed verification"
        );
        Err(VerifyError { mismatches })
    }
}
