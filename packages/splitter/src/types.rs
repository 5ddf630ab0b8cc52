//! Core data types for the splitter.

use std::path::PathBuf;

/// A recognized marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Identifier captured between the fences, used verbatim as file name.
    pub name: String,
}

/// Lines collected for one named output file.
///
/// Each line keeps its original terminator, if it had one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub lines: Vec<Vec<u8>>,
}

impl Segment {
    /// Start an empty segment.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// Total size of the buffered content in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Buffered content joined into one byte string.
    #[must_use]
    pub fn content(&self) -> Vec<u8> {
        self.lines.concat()
    }
}

/// Outcome of flushing one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlushRecord {
    pub name: String,
    /// Where the segment ended up.
    pub path: PathBuf,
    pub lines: usize,
    pub bytes: usize,
}

/// Summary of a complete split pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitSummary {
    /// Flushes in the order they happened.
    pub flushed: Vec<FlushRecord>,
    /// Lines seen before the first marker.
    pub discarded_lines: usize,
}

impl SplitSummary {
    /// Number of distinct file names written.
    #[must_use]
    pub fn distinct_files(&self) -> usize {
        let mut names: Vec<&str> = self.flushed.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}
