use std::sync::Arc;

use eframe::egui;

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot, table};
use crate::views::Artifact;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinApp {
    pub state: AppState,
}

impl PenguinApp {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        PenguinApp {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for PenguinApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: controls editing the draft ----
        egui::SidePanel::left("sidebar")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // Commit this frame's edits in one swap; re-render only stale views.
        self.state.sync();

        // ---- Central panel: the five outputs ----
        egui::CentralPanel::default().show(ctx, |ui| {
            central_panel(ui, &mut self.state);
        });
    }
}

fn central_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let AppState {
        dispatcher,
        colors,
        table_query,
        grid_query,
        ..
    } = state;

    egui::ScrollArea::vertical().show(ui, |ui: &mut egui::Ui| {
        // ---- Row 1: the two tables ----
        ui.columns(2, |cols: &mut [egui::Ui]| {
            cols[0].push_id("penguin_table", |ui| {
                match dispatcher.artifact("penguin_table") {
                    Some(Artifact::Table(spec)) => table::data_table(ui, spec, table_query),
                    other => placeholder(ui, other),
                }
            });
            cols[1].push_id("penguin_grid", |ui| {
                match dispatcher.artifact("penguin_grid") {
                    Some(Artifact::Grid(spec)) => table::data_grid(ui, spec, grid_query),
                    other => placeholder(ui, other),
                }
            });
        });
        ui.separator();

        // ---- Row 2: pie + scatter ----
        ui.columns(2, |cols: &mut [egui::Ui]| {
            cols[0].push_id("species_pie", |ui| {
                match dispatcher.artifact("species_pie") {
                    Some(Artifact::Pie(spec)) => plot::pie_chart(ui, spec, colors),
                    other => placeholder(ui, other),
                }
            });
            cols[1].push_id("mass_scatter", |ui| {
                match dispatcher.artifact("mass_scatter") {
                    Some(Artifact::Scatter(spec)) => plot::scatter_chart(ui, spec, colors),
                    other => placeholder(ui, other),
                }
            });
        });
        ui.separator();

        // ---- Row 3: histogram, full width ----
        match dispatcher.artifact("mass_histogram") {
            Some(Artifact::Histogram(spec)) => plot::histogram_chart(ui, spec, colors),
            other => placeholder(ui, other),
        }
    });
}

/// Failed renders show their message in this output only; everything else
/// keeps drawing its last artifact.
fn placeholder(ui: &mut egui::Ui, artifact: Option<&Artifact>) {
    match artifact {
        Some(Artifact::Failed(message)) => {
            ui.colored_label(egui::Color32::RED, format!("Error: {message}"));
        }
        _ => {
            ui.label("Rendering…");
        }
    }
}
