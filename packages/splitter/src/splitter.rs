//! Single-pass splitting of a marked-up stream into segments.
//!
//! Every line is either a marker, which closes the open segment and opens a
//! new one, or content for the open segment. Content seen before the first
//! marker has nowhere to go and is dropped.

use std::collections::HashSet;
use std::io::BufRead;
use std::mem;

use crate::config::parse_marker;
use crate::error::{Result, SplitterError};
use crate::sink::SegmentSink;
use crate::types::{Segment, SplitSummary};

/// Splits an input stream and hands each finished segment to a sink.
pub struct Splitter<S: SegmentSink> {
    sink: S,
}

impl<S: SegmentSink> Splitter<S> {
    /// Create a splitter that flushes into `sink`.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Read `input` to the end, flushing one segment per marker.
    ///
    /// A segment is flushed when the next marker is seen or the input ends.
    /// Lines are passed through byte-for-byte, terminators included. The
    /// first failing flush aborts the pass; segments flushed before it stay
    /// where they were written.
    pub fn split<R: BufRead>(&mut self, mut input: R) -> Result<SplitSummary> {
        let mut summary = SplitSummary::default();
        let mut current: Option<Segment> = None;
        let mut seen: HashSet<String> = HashSet::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            if input
                .read_until(b'\n', &mut line)
                .map_err(SplitterError::Read)?
                == 0
            {
                break;
            }

            if let Some(marker) = parse_marker(&line) {
                if let Some(segment) = current.take() {
                    summary.flushed.push(self.sink.flush(&segment)?);
                }
                tracing::debug!(name = %marker.name, "Marker found");
                if !seen.insert(marker.name.clone()) {
                    tracing::warn!(
                        name = %marker.name,
                        "Identifier repeated, earlier segment will be overwritten"
                    );
                }
                current = Some(Segment::new(marker.name));
                continue;
            }

            match current.as_mut() {
                Some(segment) => segment.lines.push(mem::take(&mut line)),
                None => summary.discarded_lines += 1,
            }
        }

        if let Some(segment) = current.take() {
            summary.flushed.push(self.sink.flush(&segment)?);
        }

        if summary.discarded_lines > 0 {
            tracing::warn!(
                lines = summary.discarded_lines,
                "Discarded content before the first marker"
            );
        }

        Ok(summary)
    }
}

/// Split `input` into `sink` in one call.
pub fn split<R: BufRead, S: SegmentSink>(input: R, sink: &mut S) -> Result<SplitSummary> {
    Splitter::new(sink).split(input)
}
