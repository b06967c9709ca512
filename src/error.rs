//! Error types for pdfstack.
//!
//! All fatal merge failures are variants of [`MergeError`]. A failed page
//! count probe is deliberately not represented here: it is display-only
//! state (`page_count: None` on the row) and never aborts anything.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfstack operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Fatal errors raised while assembling or writing the merged document.
///
/// Any of these aborts the whole merge; no partial output is left behind.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// The row list contained no usable paths at merge time.
    #[error("No PDF files to merge")]
    NoInputFiles,

    /// An input path does not exist or is not a regular file.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path that failed the merge-time existence check.
        path: PathBuf,
    },

    /// An input file exists but could not be parsed as a PDF.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the offending file.
        path: PathBuf,
        /// Parser error rendered as text.
        reason: String,
    },

    /// The output file could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Path where output should have been created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Writing or finalizing the output file failed.
    #[error("Failed to write output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Page-tree manipulation failed while appending pages.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },
}

impl MergeError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }
}
