//! PDF reading and loading operations.
//!
//! Two entry points with very different failure contracts:
//!
//! - [`PdfReader::load`] is the merge path: any failure is a hard
//!   [`MergeError`].
//! - [`PdfReader::probe_page_count`] is the display path: it never fails,
//!   returning `None` for anything it cannot read.
//!
//! All loading is synchronous; documents are fully in memory and the file
//! handle is released before the call returns.

use std::path::{Path, PathBuf};

use lopdf::Document;

use crate::error::{MergeError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,
}

/// PDF reader with configurable loading behavior.
#[derive(Debug, Clone)]
pub struct PdfReader {
    /// Whether to reject documents without any pages.
    verify: bool,
}

impl PdfReader {
    /// Create a new PDF reader with default settings.
    pub fn new() -> Self {
        Self { verify: true }
    }

    /// Create a reader that accepts page-less documents.
    pub fn without_verification() -> Self {
        Self { verify: false }
    }

    /// Load a single PDF document for merging.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::FileNotFound`] if `path` is not an existing
    /// regular file, and [`MergeError::FailedToLoadPdf`] if it cannot be
    /// parsed as a PDF (or has no pages, with verification on).
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        if !path.is_file() {
            return Err(MergeError::file_not_found(path.to_path_buf()));
        }

        let document = Document::load(path)
            .map_err(|e| MergeError::failed_to_load_pdf(path.to_path_buf(), e.to_string()))?;

        let page_count = document.get_pages().len();
        if self.verify && page_count == 0 {
            return Err(MergeError::failed_to_load_pdf(
                path.to_path_buf(),
                "PDF has no pages",
            ));
        }

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
        })
    }

    /// Best-effort page count lookup for display purposes.
    ///
    /// Returns `None` on any failure (missing file, invalid PDF); the
    /// failure is logged at `warn` level but never propagated.
    pub fn probe_page_count(&self, path: &Path) -> Option<usize> {
        match Document::load(path) {
            Ok(doc) => Some(doc.get_pages().len()),
            Err(e) => {
                log::warn!("page count probe failed for {}: {e}", path.display());
                None
            }
        }
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}
