//! pdfstack - Reorder and merge PDF files into a single document.
//!
//! This library backs a small desktop utility: the user stacks up PDF
//! references in an ordered list, reorders them by drag or buttons, and
//! merges every page of every file, in list order, into one output
//! document.
//!
//! # Examples
//!
//! ```no_run
//! use pdfstack::merge::Merger;
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let merger = Merger::new();
//! let outcome = merger.merge(
//!     &[PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
//!     Path::new("merged.pdf"),
//! )?;
//! println!("Created {} page document", outcome.total_pages);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod rows;
pub mod ui;

// Re-export commonly used types
pub use error::{MergeError, Result};
pub use rows::{MoveDirection, Row, RowList};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
