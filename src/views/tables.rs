use crate::data::model::{Column, Dataset};
use crate::reactive::{Control, ControlState, RenderError, ViewBinding};

use super::{Artifact, GridSpec, TableSpec};

fn header_row() -> Vec<&'static str> {
    Column::ALL.iter().map(|c| c.header()).collect()
}

fn all_rows(dataset: &Dataset) -> Vec<Vec<String>> {
    dataset
        .records()
        .iter()
        .map(|rec| Column::ALL.iter().map(|&col| rec.cell(col)).collect())
        .collect()
}

/// Full dataset, all columns and rows, paginated-table layout.
pub struct DataTableView;

impl ViewBinding for DataTableView {
    fn name(&self) -> &'static str {
        "penguin_table"
    }

    fn dependencies(&self) -> &'static [Control] {
        &[]
    }

    fn render(
        &self,
        dataset: &Dataset,
        _controls: &ControlState,
    ) -> Result<Artifact, RenderError> {
        Ok(Artifact::Table(TableSpec {
            columns: header_row(),
            rows: all_rows(dataset),
        }))
    }
}

/// Same data, dense-grid layout: deliberately a distinct artifact kind.
pub struct DataGridView;

impl ViewBinding for DataGridView {
    fn name(&self) -> &'static str {
        "penguin_grid"
    }

    fn dependencies(&self) -> &'static [Control] {
        &[]
    }

    fn render(
        &self,
        dataset: &Dataset,
        _controls: &ControlState,
    ) -> Result<Artifact, RenderError> {
        Ok(Artifact::Grid(GridSpec {
            columns: header_row(),
            rows: all_rows(dataset),
        }))
    }
}
