//! Output target resolution.
//!
//! The output target is a user-editable directory plus file name. The name
//! is normalized to carry the `.pdf` extension before use; an empty name
//! falls back to the default.

use std::path::PathBuf;

/// Default output file name used when the name field is left blank.
pub const DEFAULT_OUTPUT_NAME: &str = "merged.pdf";

/// Required extension for the merged document.
const PDF_EXTENSION: &str = ".pdf";

/// Normalize a user-typed output name to end with the `.pdf` suffix.
///
/// A name that already carries the suffix is returned unchanged, so the
/// result never ends with more than one appended instance. Blank input
/// resolves to [`DEFAULT_OUTPUT_NAME`].
pub fn normalize_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_OUTPUT_NAME.to_string();
    }
    if name.ends_with(PDF_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{PDF_EXTENSION}")
    }
}

/// Resolve the output directory and name fields into one path.
pub fn resolve_output_path(dir: &str, name: &str) -> PathBuf {
    PathBuf::from(dir.trim()).join(normalize_name(name))
}
