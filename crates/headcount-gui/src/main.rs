//! GUI entry point for Headcount

mod app;
mod counter_panel;
mod history_panel;

use app::HeadcountApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Headcount Tracker",
        options,
        Box::new(|cc| Ok(Box::new(HeadcountApp::new(cc)))),
    )
}
