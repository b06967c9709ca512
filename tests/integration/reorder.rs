//! Integration tests for the reorder-then-merge flow: the written page
//! sequence must track the row list order at the moment of the merge.

use pdfstack::merge::Merger;
use pdfstack::rows::{MoveDirection, RowList};
use tempfile::TempDir;

use crate::common::{page_widths, write_pdf};

fn row_list(paths: &[&std::path::Path]) -> RowList {
    let mut rows = RowList::new();
    for path in paths {
        rows.add();
        let index = rows.len() - 1;
        rows.get_mut(index).unwrap().path = path.display().to_string();
    }
    rows
}

#[test]
fn test_move_up_changes_merge_order() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[101]);
    let b = write_pdf(&dir, "b.pdf", &[201]);
    let output = dir.path().join("merged.pdf");

    let mut rows = row_list(&[&a, &b]);
    rows.move_by(1, MoveDirection::Up);

    Merger::new().merge(&rows.merge_paths(), &output).unwrap();
    assert_eq!(page_widths(&output), vec![201, 101]);
}

#[test]
fn test_drag_changes_merge_order() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[101]);
    let b = write_pdf(&dir, "b.pdf", &[201]);
    let c = write_pdf(&dir, "c.pdf", &[301]);
    let output = dir.path().join("merged.pdf");

    let mut rows = row_list(&[&a, &b, &c]);
    // Drop "a" below "c" (slot 3, end of list).
    rows.drag_to(0, 3);

    Merger::new().merge(&rows.merge_paths(), &output).unwrap();
    assert_eq!(page_widths(&output), vec![201, 301, 101]);
}

#[test]
fn test_delete_removes_from_merge() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[101]);
    let b = write_pdf(&dir, "b.pdf", &[201]);
    let output = dir.path().join("merged.pdf");

    let mut rows = row_list(&[&a, &b]);
    rows.remove(0);

    Merger::new().merge(&rows.merge_paths(), &output).unwrap();
    assert_eq!(page_widths(&output), vec![201]);
}

#[test]
fn test_blank_rows_are_skipped_but_order_kept() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[101]);
    let b = write_pdf(&dir, "b.pdf", &[201]);
    let output = dir.path().join("merged.pdf");

    let mut rows = row_list(&[&b, &a]);
    rows.add(); // trailing empty row stays out of the merge

    Merger::new().merge(&rows.merge_paths(), &output).unwrap();
    assert_eq!(page_widths(&output), vec![201, 101]);
}

#[test]
fn test_total_pages_matches_probed_counts() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[101, 102]);
    let b = write_pdf(&dir, "b.pdf", &[201, 202, 203]);

    let reader = pdfstack::io::PdfReader::new();
    let mut rows = row_list(&[&a, &b]);
    rows.add();
    rows.get_mut(2).unwrap().path = "/nonexistent/x.pdf".to_string();

    for index in 0..rows.len() {
        rows.get_mut(index).unwrap().refresh_page_count(&reader);
    }

    // Unknown counts contribute zero to the display aggregate.
    assert_eq!(rows.total_pages(), 5);
}
