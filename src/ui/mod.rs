//! Desktop UI built on `eframe`/`egui`.

pub mod app;
pub mod drag;

pub use app::StackApp;
pub use drag::{RowDrag, drop_index};
