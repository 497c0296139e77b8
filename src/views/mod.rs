/// View bindings: pure functions from (Dataset, ControlState) to plain-data
/// artifacts. The toolkit never appears here; `ui` translates artifacts into
/// widgets, so "this output did not change" is testable as plain equality.

pub mod charts;
pub mod tables;

use crate::data::model::Species;
use crate::reactive::ViewBinding;

// ---------------------------------------------------------------------------
// Artifacts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    /// Not rendered yet (before the first refresh).
    Pending,
    Table(TableSpec),
    Grid(GridSpec),
    Pie(PieSpec),
    Scatter(ScatterSpec),
    Histogram(HistogramSpec),
    /// Render failed; the message is shown as a placeholder in this output
    /// only.
    Failed(String),
}

/// Full dataset in paginated-table layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Full dataset in dense-grid layout. Same data as [`TableSpec`], kept as a
/// distinct artifact kind.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub title: &'static str,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub species: Species,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub species: Species,
    pub points: Vec<[f64; 2]>,
}

/// Overlaid per-species histogram with shared bin edges: bin `i` spans
/// `[start + i*bin_width, start + (i+1)*bin_width)`, the last bin closed.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bin_count: u32,
    pub start: f64,
    pub bin_width: f64,
    pub series: Vec<HistogramSeries>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub species: Species,
    pub counts: Vec<usize>,
}

// ---------------------------------------------------------------------------
// The dashboard's bindings
// ---------------------------------------------------------------------------

pub fn standard_bindings() -> Vec<Box<dyn ViewBinding>> {
    vec![
        Box::new(tables::DataTableView),
        Box::new(tables::DataGridView),
        Box::new(charts::PieChartView),
        Box::new(charts::ScatterplotView),
        Box::new(charts::HistogramView),
    ]
}
