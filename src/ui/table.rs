use eframe::egui::{self, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::views::{GridSpec, TableSpec};

// ---------------------------------------------------------------------------
// Table / grid rendering of the dataset artifacts
// ---------------------------------------------------------------------------

const TABLE_HEIGHT: f32 = 240.0;

/// Case-insensitive substring match against any cell of the row.
fn row_matches(row: &[String], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    row.iter().any(|cell| cell.to_lowercase().contains(&needle))
}

fn filter_box(ui: &mut Ui, query: &mut String) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Filter:");
        ui.add(
            egui::TextEdit::singleline(query)
                .hint_text("any column")
                .desired_width(140.0),
        );
    });
}

/// Paginated-table layout of the full dataset.
pub fn data_table(ui: &mut Ui, spec: &TableSpec, query: &mut String) {
    ui.strong("Penguins (table)");
    filter_box(ui, query);

    let rows: Vec<&Vec<String>> = spec
        .rows
        .iter()
        .filter(|row| row_matches(row, query))
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(TABLE_HEIGHT)
        .columns(TableColumn::auto().at_least(60.0), spec.columns.len())
        .header(20.0, |mut header| {
            for col in &spec.columns {
                header.col(|ui| {
                    ui.strong(*col);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let cells = rows[row.index()];
                for cell in cells.iter() {
                    row.col(|ui| {
                        ui.label(cell.as_str());
                    });
                }
            });
        });
}

/// Dense-grid layout of the same dataset.
pub fn data_grid(ui: &mut Ui, spec: &GridSpec, query: &mut String) {
    ui.strong("Penguins (grid)");
    filter_box(ui, query);

    egui::ScrollArea::both()
        .max_height(TABLE_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("penguin_grid_cells")
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui: &mut Ui| {
                    for col in &spec.columns {
                        ui.strong(*col);
                    }
                    ui.end_row();

                    for row in spec.rows.iter().filter(|row| row_matches(row, query)) {
                        for cell in row {
                            ui.label(cell.as_str());
                        }
                        ui.end_row();
                    }
                });
        });
}
