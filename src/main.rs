//! Binary entry point: logger setup and the native window loop.

use pdfstack::ui::StackApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 600.0])
            .with_title("pdfstack"),
        ..Default::default()
    };

    eframe::run_native(
        "pdfstack",
        options,
        Box::new(|_cc| Ok(Box::new(StackApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
