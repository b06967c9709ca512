//! Integration tests for basic merge operations.

use pdfstack::merge::Merger;
use tempfile::TempDir;

use crate::common::{page_widths, write_pdf};

#[test]
fn test_merge_two_pdfs() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[101, 102]);
    let b = write_pdf(&dir, "b.pdf", &[201]);
    let output = dir.path().join("merged.pdf");

    let outcome = Merger::new().merge(&[a, b], &output).unwrap();

    assert_eq!(outcome.files_merged, 2);
    assert_eq!(outcome.total_pages, 3);
    assert!(output.exists());
}

#[test]
fn test_merged_page_sequence_is_concatenation() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[101, 102]);
    let b = write_pdf(&dir, "b.pdf", &[201, 202, 203]);
    let c = write_pdf(&dir, "c.pdf", &[301]);
    let output = dir.path().join("merged.pdf");

    Merger::new().merge(&[b.clone(), c, a], &output).unwrap();

    assert_eq!(page_widths(&output), vec![201, 202, 203, 301, 101, 102]);
}

#[test]
fn test_merge_single_pdf() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[101]);
    let output = dir.path().join("merged.pdf");

    let outcome = Merger::new().merge(&[a], &output).unwrap();

    assert_eq!(outcome.files_merged, 1);
    assert_eq!(page_widths(&output), vec![101]);
}

#[test]
fn test_merge_same_file_twice() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[101, 102]);
    let output = dir.path().join("merged.pdf");

    let outcome = Merger::new().merge(&[a.clone(), a], &output).unwrap();

    assert_eq!(outcome.total_pages, 4);
    assert_eq!(page_widths(&output), vec![101, 102, 101, 102]);
}

#[test]
fn test_merge_reports_absolute_output_path() {
    let dir = TempDir::new().unwrap();
    let a = write_pdf(&dir, "a.pdf", &[101]);
    let output = dir.path().join("merged.pdf");

    let outcome = Merger::new().merge(&[a], &output).unwrap();

    assert!(outcome.output_path.is_absolute());
    assert!(outcome.output_path.ends_with("merged.pdf"));
}
