//! Transient state for a row-drag interaction.
//!
//! A [`RowDrag`] lives for exactly one pointer interaction: created on drag
//! start, updated with the hover target every frame, discarded on release.
//! It never outlives the gesture and holds indices only, no row data.

use eframe::egui::Rect;

/// In-flight drag of one row, identified by its index at drag start.
#[derive(Debug, Clone, Copy)]
pub struct RowDrag {
    /// Index of the row being dragged.
    pub source: usize,

    /// Current drop slot under the pointer, when known.
    pub target: Option<usize>,
}

impl RowDrag {
    /// Start a drag for the row at `source`.
    pub fn new(source: usize) -> Self {
        Self {
            source,
            target: None,
        }
    }
}

/// Compute the drop slot for a pointer at `pointer_y` over `row_rects`.
///
/// Scans rows top-to-bottom and picks the first row whose vertical
/// midpoint lies below the pointer; when none qualifies the target is the
/// end of the list (`row_rects.len()`).
pub fn drop_index(pointer_y: f32, row_rects: &[Rect]) -> usize {
    for (index, rect) in row_rects.iter().enumerate() {
        if pointer_y < rect.center().y {
            return index;
        }
    }
    row_rects.len()
}
