//! Core PDF merging implementation.
//!
//! The merge is strictly sequential and in-memory: every input is loaded
//! and appended to the accumulating document before a single byte is
//! written, so an error at any point aborts the whole operation without
//! touching the output path.

use std::path::{Path, PathBuf};

use lopdf::{Document, Object, ObjectId};

use crate::error::{MergeError, Result};
use crate::io::{LoadedPdf, PdfReader, PdfWriter};

/// Result of a successful merge.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Absolute path of the written document.
    pub output_path: PathBuf,

    /// Number of input files merged.
    pub files_merged: usize,

    /// Total number of pages in the merged document.
    pub total_pages: usize,
}

/// PDF merger that concatenates documents in list order.
pub struct Merger {
    reader: PdfReader,
    writer: PdfWriter,
}

impl Merger {
    /// Create a new merger with default settings.
    pub fn new() -> Self {
        Self {
            reader: PdfReader::new(),
            writer: PdfWriter::new(),
        }
    }

    /// Concatenate the documents at `paths`, in order, into `output_path`.
    ///
    /// `output_path` is expected to carry its final extension already (see
    /// [`crate::output::resolve_output_path`]). Any existing file at that
    /// path is overwritten.
    ///
    /// # Errors
    ///
    /// - [`MergeError::NoInputFiles`] when `paths` is empty.
    /// - [`MergeError::FileNotFound`] / [`MergeError::FailedToLoadPdf`]
    ///   when an input is missing or unreadable.
    /// - [`MergeError::FailedToCreateOutput`] / [`MergeError::FailedToWrite`]
    ///   when the output cannot be written.
    ///
    /// On any error nothing is written; the output path is untouched.
    pub fn merge(&self, paths: &[PathBuf], output_path: &Path) -> Result<MergeOutcome> {
        if paths.is_empty() {
            return Err(MergeError::NoInputFiles);
        }

        log::info!("merging {} files into {}", paths.len(), output_path.display());

        let mut loaded = Vec::with_capacity(paths.len());
        for path in paths {
            loaded.push(self.reader.load(path)?);
        }

        let mut document = merge_documents(&loaded)?;
        let total_pages = document.get_pages().len();

        self.writer.save(&mut document, output_path)?;

        let output_path = std::path::absolute(output_path)
            .unwrap_or_else(|_| output_path.to_path_buf());

        log::info!(
            "wrote {} pages from {} files to {}",
            total_pages,
            loaded.len(),
            output_path.display()
        );

        Ok(MergeOutcome {
            output_path,
            files_merged: loaded.len(),
            total_pages,
        })
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenate loaded documents into one, first document as base.
fn merge_documents(loaded: &[LoadedPdf]) -> Result<Document> {
    let Some((first, rest)) = loaded.split_first() else {
        return Err(MergeError::NoInputFiles);
    };

    let mut merged = first.document.clone();
    let mut max_id = merged.max_id;

    for input in rest {
        let mut doc = input.document.clone();

        // Renumber objects to avoid ID conflicts with what is already
        // accumulated.
        doc.renumber_objects_with(max_id + 1);
        max_id = doc.max_id;

        // Page references in the document's internal order.
        let doc_pages: Vec<ObjectId> = doc.get_pages().into_values().collect();

        merged.objects.extend(doc.objects);

        add_pages_to_tree(&mut merged, &doc_pages)?;
    }

    merged.compress();
    merged.renumber_objects();

    Ok(merged)
}

/// Append page references to the merged document's page tree.
fn add_pages_to_tree(merged: &mut Document, page_ids: &[ObjectId]) -> Result<()> {
    let catalog = merged
        .catalog_mut()
        .map_err(|e| MergeError::merge_failed(format!("Failed to get catalog: {e}")))?;

    let pages_id = catalog
        .get(b"Pages")
        .and_then(|p| p.as_reference())
        .map_err(|e| MergeError::merge_failed(format!("Failed to get pages reference: {e}")))?;

    let pages_obj = merged
        .get_object_mut(pages_id)
        .map_err(|e| MergeError::merge_failed(format!("Failed to get pages object: {e}")))?;

    let Object::Dictionary(dict) = pages_obj else {
        return Err(MergeError::merge_failed("Pages object is not a dictionary"));
    };

    let kids = dict
        .get_mut(b"Kids")
        .map_err(|_| MergeError::merge_failed("Pages dictionary missing Kids array"))?;

    let Object::Array(kids_array) = kids else {
        return Err(MergeError::merge_failed("Kids is not an array"));
    };

    for &page_id in page_ids {
        kids_array.push(Object::Reference(page_id));
    }

    let current_count = dict.get(b"Count").and_then(|c| c.as_i64()).unwrap_or(0);
    dict.set("Count", Object::Integer(current_count + page_ids.len() as i64));

    Ok(())
}
