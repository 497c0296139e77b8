mod app;
mod color;
mod data;
mod reactive;
mod state;
mod ui;
mod views;

use std::sync::Arc;

use app::PenguinApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset loads exactly once, before the UI opens. Failure here is
    // fatal and exits non-zero.
    let dataset = match data::loader::load_default() {
        Ok(dataset) => {
            log::info!(
                "Loaded {} penguins from {}",
                dataset.len(),
                data::loader::default_path().display()
            );
            Arc::new(dataset)
        }
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguin Data Explorer",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render the sidebar logo.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(PenguinApp::new(dataset)))
        }),
    )
}
