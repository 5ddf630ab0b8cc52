//! Flush targets for finished segments.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_OUTPUT_DIR;
use crate::error::{Result, SplitterError};
use crate::types::{FlushRecord, Segment};

/// Destination for segments once their last line has been read.
pub trait SegmentSink {
    /// Persist `segment` under its name, replacing any previous content.
    fn flush(&mut self, segment: &Segment) -> Result<FlushRecord>;
}

impl<S: SegmentSink + ?Sized> SegmentSink for &mut S {
    fn flush(&mut self, segment: &Segment) -> Result<FlushRecord> {
        (**self).flush(segment)
    }
}

/// Writes each segment to a file named after it inside `root`.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Create a sink rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root the sink at `root`, which must already be a directory.
    pub fn existing(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(SplitterError::InvalidOutputDir(root));
        }
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn write_lines(path: &Path, lines: &[Vec<u8>]) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for line in lines {
            writer.write_all(line)?;
        }
        writer.flush()
    }
}

impl Default for DirectorySink {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl SegmentSink for DirectorySink {
    fn flush(&mut self, segment: &Segment) -> Result<FlushRecord> {
        let path = self.root.join(&segment.name);
        Self::write_lines(&path, &segment.lines).map_err(|source| SplitterError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(
            path = %path.display(),
            lines = segment.lines.len(),
            "Wrote segment"
        );

        Ok(FlushRecord {
            name: segment.name.clone(),
            path,
            lines: segment.lines.len(),
            bytes: segment.byte_len(),
        })
    }
}

/// Keeps flushed segments in memory instead of touching the filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<String, Vec<u8>>,
    flushes: usize,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Final content per file name, as a directory would hold it.
    #[must_use]
    pub fn files(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.files
    }

    /// Content currently stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files.get(name).map(Vec::as_slice)
    }

    /// Number of flushes received, counting overwrites.
    #[must_use]
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl SegmentSink for MemorySink {
    fn flush(&mut self, segment: &Segment) -> Result<FlushRecord> {
        self.files.insert(segment.name.clone(), segment.content());
        self.flushes += 1;

        Ok(FlushRecord {
            name: segment.name.clone(),
            path: PathBuf::from(&segment.name),
            lines: segment.lines.len(),
            bytes: segment.byte_len(),
        })
    }
}
