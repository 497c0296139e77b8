use eframe::egui::{self, Sense, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use crate::color::SpeciesColors;
use crate::views::{HistogramSpec, PieSpec, ScatterSpec};

// ---------------------------------------------------------------------------
// Scatterplot
// ---------------------------------------------------------------------------

pub fn scatter_chart(ui: &mut Ui, spec: &ScatterSpec, colors: &SpeciesColors) {
    ui.strong(spec.title);

    Plot::new("mass_scatter")
        .legend(Legend::default())
        .x_axis_label(spec.x_label)
        .y_axis_label(spec.y_label)
        .height(260.0)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                if series.points.is_empty() {
                    continue;
                }
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(series.species.name())
                        .color(colors.color_for(series.species))
                        .radius(2.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Histogram (overlaid per-species bars, shared bin edges)
// ---------------------------------------------------------------------------

pub fn histogram_chart(ui: &mut Ui, spec: &HistogramSpec, colors: &SpeciesColors) {
    ui.strong(spec.title);

    Plot::new("mass_histogram")
        .legend(Legend::default())
        .x_axis_label(spec.x_label)
        .y_axis_label(spec.y_label)
        .height(240.0)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let color = colors.color_for(series.species);
                let bars: Vec<Bar> = series
                    .counts
                    .iter()
                    .enumerate()
                    .filter(|(_, &count)| count > 0)
                    .map(|(i, &count)| {
                        let center = spec.start + (i as f64 + 0.5) * spec.bin_width;
                        Bar::new(center, count as f64)
                            .width(spec.bin_width)
                            // Translucent fill so layered species stay readable.
                            .fill(color.gamma_multiply(0.55))
                    })
                    .collect();
                if bars.is_empty() {
                    continue;
                }
                plot_ui.bar_chart(BarChart::new(bars).color(color).name(series.species.name()));
            }
        });
}

// ---------------------------------------------------------------------------
// Pie chart (painter-drawn sectors; egui_plot has no pie primitive)
// ---------------------------------------------------------------------------

pub fn pie_chart(ui: &mut Ui, spec: &PieSpec, colors: &SpeciesColors) {
    ui.strong(spec.title);

    let total: usize = spec.slices.iter().map(|s| s.count).sum();
    if total == 0 {
        ui.label("No data.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        let (rect, _response) = ui.allocate_exact_size(egui::vec2(220.0, 220.0), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.48;

        // Sectors as triangle fans: sub-triangles stay convex for any sweep.
        let mut angle = -std::f64::consts::FRAC_PI_2;
        for slice in &spec.slices {
            let sweep = std::f64::consts::TAU * slice.count as f64 / total as f64;
            let color = colors.color_for(slice.species);
            let steps = ((sweep / 0.05).ceil() as usize).max(2);

            let arc_point = |theta: f64| {
                center + radius * egui::vec2(theta.cos() as f32, theta.sin() as f32)
            };
            for step in 0..steps {
                let a = angle + sweep * step as f64 / steps as f64;
                let b = angle + sweep * (step + 1) as f64 / steps as f64;
                painter.add(egui::Shape::convex_polygon(
                    vec![center, arc_point(a), arc_point(b)],
                    color,
                    Stroke::NONE,
                ));
            }
            angle += sweep;
        }

        // Legend with slice values.
        ui.vertical(|ui: &mut Ui| {
            for slice in &spec.slices {
                let color = colors.color_for(slice.species);
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(egui::RichText::new("⏺").color(color));
                    ui.label(format!("{} ({})", slice.species, slice.count));
                });
            }
        });
    });
}
