use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::model::{Attribute, Species};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – the four controls
// ---------------------------------------------------------------------------

/// Render the sidebar. Widgets edit `state.draft`; the commit happens once
/// per frame in [`AppState::sync`].
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    // ---- Logo (centered) ----
    let logo = egui::include_image!("../../assets/logo.png");
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add(
            egui::Image::new(logo)
                .max_width(ui.available_width() * 0.8)
                .max_height(120.0)
                .rounding(4.0),
        );
    });
    ui.add_space(4.0);

    ui.heading("Sidebar");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Attribute selector (not consulted by any view yet) ----
            ui.strong("Choose a column");
            let current = state.draft.selected_attribute;
            egui::ComboBox::from_id_salt("selected_attribute")
                .selected_text(current.column_name())
                .show_ui(ui, |ui: &mut Ui| {
                    for attr in Attribute::ALL {
                        if ui
                            .selectable_label(current == attr, attr.column_name())
                            .clicked()
                        {
                            state.draft.selected_attribute = attr;
                        }
                    }
                });
            ui.separator();

            // ---- Bin counts ----
            ui.strong("Chart Bin Count");
            ui.add(egui::DragValue::new(&mut state.draft.chart_bin_count).range(1..=1000));
            ui.add_space(4.0);

            ui.strong("Histogram Bin Count");
            ui.add(egui::Slider::new(&mut state.draft.hist_bin_count, 1..=100));
            ui.separator();

            // ---- Species checkbox group (inline) ----
            ui.strong("Selected Species");
            ui.horizontal(|ui: &mut Ui| {
                for species in Species::ALL {
                    let mut checked = state.draft.selected_species.contains(&species);
                    let text =
                        RichText::new(species.name()).color(state.colors.color_for(species));
                    if ui.checkbox(&mut checked, text).changed() {
                        if checked {
                            state.draft.selected_species.insert(species);
                        } else {
                            state.draft.selected_species.remove(&species);
                        }
                    }
                }
            });

            ui.separator();
            ui.hyperlink_to(
                "Palmer Penguins dataset",
                "https://github.com/allisonhorst/palmerpenguins",
            );
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the header: title plus a dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Penguin Data Explorer – Interactive Dashboard");
        ui.separator();
        ui.label(format!("{} penguins loaded", state.dataset.len()));
    });
}
