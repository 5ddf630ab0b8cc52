//! Segment splitter - turn one marked-up text stream into many files.
//!
//! The input is a concatenation of sections, each opened by a marker line
//! of the form `===== name =====`. Every section is written to a file
//! called `name`; content before the first marker is dropped.
//!
//! # Example
//!
//! ```
//! use segment_splitter::{split, MemorySink};
//!
//! let input = "===== a.txt =====\nhello\n===== b.txt =====\nworld\n";
//! let mut sink = MemorySink::new();
//! split(input.as_bytes(), &mut sink).unwrap();
//!
//! assert_eq!(sink.get("a.txt"), Some(&b"hello\n"[..]));
//! assert_eq!(sink.get("b.txt"), Some(&b"world\n"[..]));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and marker recognition
//! - [`types`]: Markers, segments and pass summaries
//! - [`error`]: Error types and Result alias
//! - [`sink`]: Where finished segments are flushed to
//! - [`splitter`]: The splitting pass
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod sink;
pub mod splitter;
pub mod types;

pub use splitter::{split, Splitter};

pub use config::{is_valid_identifier, marker_line, parse_marker};
pub use error::{Result, SplitterError};
pub use sink::{DirectorySink, MemorySink, SegmentSink};
pub use types::{FlushRecord, Marker, Segment, SplitSummary};
