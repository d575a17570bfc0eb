//! Determinism testing framework for Radiance.
//!
//! Radiance guarantees that a seed and a config fully determine the SVG.
//! [`verify_determinism`] runs a generator several times and reports the
//! first differing position, with line and column since the output is text.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the first output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first output.
    pub hash: String,
    /// If non-deterministic, where the first difference was found.
    pub diff_info: Option<DiffInfo>,
}

/// Position of the first difference between two runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference.
    pub offset: usize,
    /// 1-based line of the difference in the reference output.
    pub line: usize,
    /// 1-based column (in bytes) within that line.
    pub column: usize,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
    /// Reference text around the difference.
    pub expected: String,
    /// Differing text around the difference.
    pub actual: String,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {} (line {}, column {}) in run {}\n  expected: {:?}\n  actual:   {:?}",
            self.offset, self.line, self.column, self.run_index, self.expected, self.actual
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Context bytes shown on each side of a difference.
const CONTEXT: usize = 24;

/// Run generation `runs` times and verify all outputs are identical.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<str>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = blake3::hash(reference.as_bytes()).to_hex().to_string();

    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(diff) = first_difference(reference, output.as_ref(), run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                output_size: reference.len(),
                hash,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        output_size: reference.len(),
        hash,
        diff_info: None,
    }
}

/// Locate the first differing byte of two outputs.
pub fn first_difference(expected: &str, actual: &str, run_index: usize) -> Option<DiffInfo> {
    let a = expected.as_bytes();
    let b = actual.as_bytes();
    let offset = a
        .iter()
        .zip(b.iter())
        .position(|(x, y)| x != y)
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))?;

    let before = &a[..offset];
    let line = before.iter().filter(|&&c| c == b'\n').count() + 1;
    let column = offset - before.iter().rposition(|&c| c == b'\n').map_or(0, |p| p + 1) + 1;

    let window = |bytes: &[u8]| {
        let start = offset.saturating_sub(CONTEXT);
        let end = (offset + CONTEXT).min(bytes.len());
        String::from_utf8_lossy(&bytes[start.min(end)..end]).into_owned()
    };

    Some(DiffInfo {
        offset,
        line,
        column,
        run_index,
        expected: window(a),
        actual: window(b),
    })
}
