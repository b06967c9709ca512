//! The main application window.
//!
//! Everything runs on the UI thread in response to discrete events; the
//! merge itself is a blocking call. The app owns the [`RowList`]
//! exclusively and all mutation funnels through its operations, so the
//! widget tree can simply be rebuilt from the list every frame.

use eframe::egui;

use crate::io::PdfReader;
use crate::merge::Merger;
use crate::output;
use crate::rows::{MoveDirection, RowList};
use crate::ui::drag::{RowDrag, drop_index};

const INDEX_HANDLE_WIDTH: f32 = 32.0;
const PAGE_LABEL_WIDTH: f32 = 50.0;
const DROP_INDICATOR_COLOR: egui::Color32 = egui::Color32::from_rgb(0x00, 0x78, 0xd7);

/// Row mutation requested by a widget, applied after the row loop so the
/// indices recorded during rendering stay valid.
enum RowAction {
    Move(usize, MoveDirection),
    Delete(usize),
    PathChanged(usize),
}

/// The reorder-and-merge application.
pub struct StackApp {
    rows: RowList,
    reader: PdfReader,
    merger: Merger,
    output_dir: String,
    output_name: String,
    drag: Option<RowDrag>,
}

impl StackApp {
    /// Create the app with one empty row and defaults for the output
    /// target.
    pub fn new() -> Self {
        let output_dir = std::env::current_dir()
            .map(|d| d.display().to_string())
            .unwrap_or_default();

        let mut rows = RowList::new();
        rows.add();

        Self {
            rows,
            reader: PdfReader::new(),
            merger: Merger::new(),
            output_dir,
            output_name: output::DEFAULT_OUTPUT_NAME.to_string(),
            drag: None,
        }
    }

    /// Render one row; returns any deferred mutation it requested.
    fn show_row(
        &mut self,
        ui: &mut egui::Ui,
        index: usize,
        row_rects: &mut Vec<egui::Rect>,
    ) -> Option<RowAction> {
        let mut action = None;

        let inner = ui.horizontal(|ui| {
            let handle = ui.add_sized(
                [INDEX_HANDLE_WIDTH, ui.spacing().interact_size.y],
                egui::Label::new(format!("{}", index + 1)).sense(egui::Sense::drag()),
            );
            if handle.hovered() || handle.dragged() {
                ui.ctx()
                    .output_mut(|o| o.cursor_icon = egui::CursorIcon::Grab);
            }
            if handle.drag_started() && self.drag.is_none() {
                self.drag = Some(RowDrag::new(index));
            }

            // Mutations are deferred, so the index stays valid for the
            // whole loop.
            let Some(row) = self.rows.get_mut(index) else {
                return;
            };

            let path_edit = ui.add(
                egui::TextEdit::singleline(&mut row.path)
                    .hint_text("PDF file path")
                    .desired_width((ui.available_width() - 250.0).max(120.0)),
            );
            if path_edit.lost_focus() {
                action = Some(RowAction::PathChanged(index));
            }

            let page_text = match row.page_count {
                Some(n) => format!("{n} p"),
                None => "– p".to_string(),
            };
            ui.add_sized(
                [PAGE_LABEL_WIDTH, ui.spacing().interact_size.y],
                egui::Label::new(page_text),
            );

            if ui.button("Browse").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("PDF Files", &["pdf"])
                    .pick_file()
                {
                    row.path = path.display().to_string();
                    action = Some(RowAction::PathChanged(index));
                }
            }

            if ui.button("↑").clicked() {
                action = Some(RowAction::Move(index, MoveDirection::Up));
            }
            if ui.button("↓").clicked() {
                action = Some(RowAction::Move(index, MoveDirection::Down));
            }
            if ui.button("Delete").clicked() {
                action = Some(RowAction::Delete(index));
            }
        });

        row_rects.push(inner.response.rect);
        action
    }

    fn apply_action(&mut self, action: RowAction) {
        match action {
            RowAction::Move(index, direction) => self.rows.move_by(index, direction),
            RowAction::Delete(index) => self.rows.remove(index),
            RowAction::PathChanged(index) => {
                if let Some(row) = self.rows.get_mut(index) {
                    row.refresh_page_count(&self.reader);
                }
            }
        }
    }

    /// Track the hover target, draw the drop indicator, and apply the
    /// reorder on release.
    fn handle_drag(&mut self, ctx: &egui::Context, row_rects: &[egui::Rect]) {
        let Some(mut drag) = self.drag else {
            return;
        };

        ctx.output_mut(|o| o.cursor_icon = egui::CursorIcon::Grabbing);

        if let Some(pos) = ctx.input(|i| i.pointer.hover_pos()) {
            drag.target = Some(drop_index(pos.y, row_rects));
        }

        if let (Some(target), false) = (drag.target, row_rects.is_empty()) {
            let y = if target < row_rects.len() {
                row_rects[target].top() - 2.0
            } else {
                row_rects[row_rects.len() - 1].bottom() + 2.0
            };
            let painter = ctx.layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("drop_indicator"),
            ));
            painter.hline(
                row_rects[0].x_range(),
                y,
                egui::Stroke::new(3.0, DROP_INDICATOR_COLOR),
            );
        }

        if ctx.input(|i| i.pointer.any_released()) {
            if let Some(target) = drag.target {
                self.rows.drag_to(drag.source, target);
            }
            self.drag = None;
        } else {
            self.drag = Some(drag);
            ctx.request_repaint();
        }
    }

    fn show_output_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.label(format!(
            "{} files / {} pages",
            self.rows.len(),
            self.rows.total_pages()
        ));

        ui.horizontal(|ui| {
            ui.label("Output folder:");
            ui.add(
                egui::TextEdit::singleline(&mut self.output_dir)
                    .desired_width((ui.available_width() - 80.0).max(120.0)),
            );
            if ui.button("Browse").clicked() {
                if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                    self.output_dir = dir.display().to_string();
                }
            }
        });

        ui.horizontal(|ui| {
            ui.label("Output name:");
            ui.text_edit_singleline(&mut self.output_name);
        });

        if ui.button("Merge PDFs").clicked() {
            self.run_merge();
        }
        ui.add_space(4.0);
    }

    fn run_merge(&mut self) {
        let paths = self.rows.merge_paths();
        let output_path = output::resolve_output_path(&self.output_dir, &self.output_name);

        match self.merger.merge(&paths, &output_path) {
            Ok(outcome) => {
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Info)
                    .set_title("Merge complete")
                    .set_description(format!(
                        "Wrote {} pages from {} files to:\n{}",
                        outcome.total_pages,
                        outcome.files_merged,
                        outcome.output_path.display()
                    ))
                    .show();
            }
            Err(e) => {
                log::error!("merge failed: {e}");
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Error)
                    .set_title("Merge failed")
                    .set_description(e.to_string())
                    .show();
            }
        }
    }
}

impl Default for StackApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for StackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("output_panel").show(ctx, |ui| {
            self.show_output_panel(ui);
        });

        let mut row_rects = Vec::with_capacity(self.rows.len());
        let mut pending = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Add PDFs, then drag the number handle or use the up/down buttons to change the order.");
            ui.add_space(6.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                for index in 0..self.rows.len() {
                    if let Some(action) = self.show_row(ui, index, &mut row_rects) {
                        pending = Some(action);
                    }
                    ui.add_space(4.0);
                }
            });

            if ui.button("+ Add PDF").clicked() {
                self.rows.add();
            }
        });

        if let Some(action) = pending {
            self.apply_action(action);
        }

        self.handle_drag(ctx, &row_rects);
    }
}
