//! Integration tests for pdfstack.
//!
//! Fixtures are built programmatically: each page carries a distinct
//! MediaBox width so tests can verify the exact page sequence of a merged
//! document, not just its page count.

use lopdf::{dictionary, Document, Object};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build a minimal document with one page per entry in `widths`, each page
/// getting that MediaBox width.
pub fn build_pdf(widths: &[i64]) -> Document {
    let mut doc = Document::with_version("1.4");

    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::new();
    for &width in widths {
        let page_id = doc.new_object_id();
        let page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width.into(), 792.into()],
        };
        doc.objects.insert(page_id, page.into());
        page_ids.push(page_id);
    }

    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids.into_iter().map(Object::from).collect::<Vec<Object>>(),
        "Count" => widths.len() as i64,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.new_object_id();
    let catalog = dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    };
    doc.objects.insert(catalog_id, catalog.into());
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Write a fixture with the given page widths into `dir`.
pub fn write_pdf(dir: &TempDir, name: &str, widths: &[i64]) -> PathBuf {
    let path = dir.path().join(name);
    let mut doc = build_pdf(widths);
    doc.save(&path).unwrap();
    path
}

/// MediaBox widths of a document's pages, in page order.
pub fn page_widths(path: &Path) -> Vec<i64> {
    let doc = Document::load(path).unwrap();
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let Object::Dictionary(page) = doc.get_object(page_id).unwrap() else {
                panic!("page object is not a dictionary");
            };
            let Object::Array(media_box) = page.get(b"MediaBox").unwrap() else {
                panic!("MediaBox is not an array");
            };
            media_box[2].as_i64().unwrap()
        })
        .collect()
}
