//! PDF writing and saving operations.
//!
//! Writes are atomic: the document is serialized to a `.tmp` sibling and
//! renamed over the target, so a failure mid-write never leaves a
//! half-written file at the output path. The write handle is flushed and
//! closed before the rename.

use std::io::Write;
use std::path::Path;

use lopdf::Document;

use crate::error::{MergeError, Result};

const WRITE_BUFFER_SIZE: usize = 8192;

/// PDF writer with atomic output.
#[derive(Debug, Default)]
pub struct PdfWriter;

impl PdfWriter {
    /// Create a new PDF writer.
    pub fn new() -> Self {
        Self
    }

    /// Save a PDF document to a file, overwriting any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::FailedToCreateOutput`] when the temp file
    /// cannot be created (missing directory, permissions) and
    /// [`MergeError::FailedToWrite`] when serialization, flush, or the
    /// final rename fails.
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<()> {
        let tmp_path = path.with_extension("tmp");

        let file = std::fs::File::create(&tmp_path).map_err(|e| {
            MergeError::FailedToCreateOutput {
                path: tmp_path.clone(),
                source: e,
            }
        })?;

        let mut writer = std::io::BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

        doc.save_to(&mut writer)
            .map_err(|e| MergeError::FailedToWrite {
                path: tmp_path.clone(),
                source: std::io::Error::other(e),
            })?;

        writer.flush().map_err(|e| MergeError::FailedToWrite {
            path: tmp_path.clone(),
            source: e,
        })?;
        drop(writer);

        std::fs::rename(&tmp_path, path).map_err(|e| MergeError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
