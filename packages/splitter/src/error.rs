//! Error types for the splitter.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Reading the input stream failed.
    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),

    /// The input file named on the command line could not be opened.
    #[error("Failed to open input {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A segment could not be written to its target file.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested output directory is missing or not a directory.
    #[error("Output directory does not exist or is not a directory: {}", .0.display())]
    InvalidOutputDir(PathBuf),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
