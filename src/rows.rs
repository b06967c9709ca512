//! The ordered row list and its reorder operations.
//!
//! A [`RowList`] is the single source of truth for merge order: the output
//! document concatenates pages exactly in this sequence. The list is owned
//! by the app and only ever mutated through the operations here; the UI
//! rebuilds its widgets from it after every change.

use std::path::PathBuf;

use crate::io::PdfReader;

/// Direction for a one-step reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Towards the front of the list.
    Up,
    /// Towards the back of the list.
    Down,
}

impl MoveDirection {
    fn offset(self) -> isize {
        match self {
            Self::Up => -1,
            Self::Down => 1,
        }
    }
}

/// One user-added PDF reference with its display metadata.
///
/// Identity is positional; there is no stable ID beyond the row's index in
/// the list.
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// User-editable file path. May be empty or garbage while the user is
    /// still typing; trimmed before any use.
    pub path: String,

    /// Cached page count, `None` when the file is missing or unreadable.
    pub page_count: Option<usize>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// The path with surrounding whitespace removed.
    pub fn trimmed_path(&self) -> &str {
        self.path.trim()
    }

    /// Re-probe the page count for the current path.
    ///
    /// Best-effort: a missing or invalid file leaves `page_count` at `None`
    /// and never raises.
    pub fn refresh_page_count(&mut self, reader: &PdfReader) {
        let path = self.trimmed_path();
        self.page_count = if path.is_empty() {
            None
        } else {
            reader.probe_page_count(path.as_ref())
        };
    }
}

/// The ordered sequence of rows defining merge order.
#[derive(Debug, Default)]
pub struct RowList {
    rows: Vec<Row>,
}

impl RowList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows, including ones with empty paths.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the list has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in list order.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Mutable access to a single row.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Append an empty row.
    pub fn add(&mut self) {
        self.rows.push(Row::new());
    }

    /// Remove the row at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// Swap the row at `index` with its immediate neighbor.
    ///
    /// No-op when the neighbor does not exist (list boundaries) or the
    /// index is out of range.
    pub fn move_by(&mut self, index: usize, direction: MoveDirection) {
        if index >= self.rows.len() {
            return;
        }
        let Some(neighbor) = index.checked_add_signed(direction.offset()) else {
            return;
        };
        if neighbor < self.rows.len() {
            self.rows.swap(index, neighbor);
        }
    }

    /// Relocate the row at `from` to the drop slot `target`.
    ///
    /// `target` is a slot index in 0..=len, as produced by
    /// [`crate::ui::drop_index`]: slot `i` means "above the row currently
    /// at `i`", slot `len` means "end of list". A target past the source
    /// is decremented by one to compensate for the removal shift, which
    /// gives drop-above/drop-below semantics matching the indicator line.
    pub fn drag_to(&mut self, from: usize, target: usize) {
        if from >= self.rows.len() {
            return;
        }
        let mut target = target.min(self.rows.len());
        if target > from {
            target -= 1;
        }
        if target == from {
            return;
        }
        let row = self.rows.remove(from);
        self.rows.insert(target, row);
    }

    /// Best-effort total page count across all rows, unknown counts
    /// contributing 0. Display aggregate only; never blocks the merge.
    pub fn total_pages(&self) -> usize {
        self.rows.iter().filter_map(|r| r.page_count).sum()
    }

    /// Paths eligible for merging: non-empty after trimming, in list order.
    pub fn merge_paths(&self) -> Vec<PathBuf> {
        self.rows
            .iter()
            .map(Row::trimmed_path)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .collect()
    }
}
