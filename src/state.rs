use std::sync::Arc;

use crate::color::SpeciesColors;
use crate::data::model::Dataset;
use crate::reactive::{ControlState, Dispatcher};
use crate::views;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The process-wide dataset, loaded once in `main`, read-only.
    pub dataset: Arc<Dataset>,

    /// Sidebar widgets edit this copy during the frame; [`AppState::sync`]
    /// commits it to the dispatcher at the end of the sidebar pass.
    pub draft: ControlState,

    /// Committed control state, dirty tracking, cached artifacts.
    pub dispatcher: Dispatcher,

    /// One colour per species, shared by every chart and legend.
    pub colors: SpeciesColors,

    /// Quick-filter text for the table / grid views. Presentational: narrows
    /// displayed rows at draw time, never touches artifacts.
    pub table_query: String,
    pub grid_query: String,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let dispatcher = Dispatcher::new(views::standard_bindings());
        AppState {
            dataset,
            draft: dispatcher.controls().clone(),
            dispatcher,
            colors: SpeciesColors::default(),
            table_query: String::new(),
            grid_query: String::new(),
        }
    }

    /// Commit this frame's control edits (a single atomic swap) and
    /// re-render whatever became stale. All edits made in one frame land in
    /// one commit, so a multi-field user action never tears.
    pub fn sync(&mut self) {
        self.draft.clamp();
        self.dispatcher.commit(self.draft.clone());
        self.dispatcher.refresh(&self.dataset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::Artifact;

    #[test]
    fn first_sync_produces_every_initial_artifact() {
        let mut state = AppState::new(Arc::new(Dataset::from_records(Vec::new())));
        state.sync();
        for name in [
            "penguin_table",
            "penguin_grid",
            "species_pie",
            "mass_scatter",
            "mass_histogram",
        ] {
            let artifact = state.dispatcher.artifact(name);
            assert!(
                !matches!(artifact, Some(Artifact::Pending) | None),
                "{name} not rendered"
            );
        }
    }

    #[test]
    fn sync_clamps_out_of_range_draft_edits() {
        let mut state = AppState::new(Arc::new(Dataset::from_records(Vec::new())));
        state.draft.hist_bin_count = 0;
        state.sync();
        assert_eq!(state.dispatcher.controls().hist_bin_count, 1);
    }
}
