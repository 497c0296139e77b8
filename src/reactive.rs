use std::collections::BTreeSet;

use thiserror::Error;

use crate::data::model::{Attribute, Dataset, Species};
use crate::views::Artifact;

// ---------------------------------------------------------------------------
// ControlState – the committed sidebar values
// ---------------------------------------------------------------------------

/// One field of [`ControlState`]. Bindings declare which of these they read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    SelectedAttribute,
    ChartBinCount,
    HistBinCount,
    SelectedSpecies,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    /// "Choose a column" selector. Currently consulted by no view.
    pub selected_attribute: Attribute,
    /// Numeric bin input (≥ 1). Currently consulted by no view.
    pub chart_bin_count: u32,
    /// Histogram bin slider, 1..=100.
    pub hist_bin_count: u32,
    /// Species checkbox group; always a subset of [`Species::ALL`].
    pub selected_species: BTreeSet<Species>,
}

impl Default for ControlState {
    fn default() -> Self {
        ControlState {
            selected_attribute: Attribute::BillLengthMm,
            chart_bin_count: 10,
            hist_bin_count: 5,
            selected_species: Species::ALL.into_iter().collect(),
        }
    }
}

impl ControlState {
    /// Re-impose the documented ranges after free-form widget edits.
    pub fn clamp(&mut self) {
        self.chart_bin_count = self.chart_bin_count.max(1);
        self.hist_bin_count = self.hist_bin_count.clamp(1, 100);
    }

    fn changed_fields(&self, next: &ControlState) -> Vec<Control> {
        let mut changed = Vec::new();
        if self.selected_attribute != next.selected_attribute {
            changed.push(Control::SelectedAttribute);
        }
        if self.chart_bin_count != next.chart_bin_count {
            changed.push(Control::ChartBinCount);
        }
        if self.hist_bin_count != next.hist_bin_count {
            changed.push(Control::HistBinCount);
        }
        if self.selected_species != next.selected_species {
            changed.push(Control::SelectedSpecies);
        }
        changed
    }
}

// ---------------------------------------------------------------------------
// View bindings
// ---------------------------------------------------------------------------

/// A single view's render call failed. Isolated to that output; the session
/// keeps running.
#[derive(Debug, Clone, Error)]
#[error("{binding}: {message}")]
pub struct RenderError {
    pub binding: &'static str,
    pub message: String,
}

impl RenderError {
    pub fn new(binding: &'static str, message: impl Into<String>) -> Self {
        RenderError {
            binding,
            message: message.into(),
        }
    }
}

/// One visible output: a declared dependency set plus a pure function from
/// (Dataset, ControlState) to a renderable artifact.
pub trait ViewBinding {
    fn name(&self) -> &'static str;

    /// ControlState fields this view reads. A change to any other field must
    /// leave its artifact untouched.
    fn dependencies(&self) -> &'static [Control];

    fn render(&self, dataset: &Dataset, controls: &ControlState)
        -> Result<Artifact, RenderError>;
}

// ---------------------------------------------------------------------------
// Dispatcher – dirty tracking over the bindings
// ---------------------------------------------------------------------------

struct Slot {
    binding: Box<dyn ViewBinding>,
    artifact: Artifact,
    dirty: bool,
    renders: u64,
}

/// Owns the committed [`ControlState`] and one cached artifact per binding.
/// On commit, exactly the bindings whose declared dependencies intersect the
/// changed fields are marked stale; refresh re-renders those and no others.
pub struct Dispatcher {
    controls: ControlState,
    slots: Vec<Slot>,
}

impl Dispatcher {
    /// All slots start dirty, so the first refresh produces every initial
    /// render.
    pub fn new(bindings: Vec<Box<dyn ViewBinding>>) -> Self {
        Dispatcher {
            controls: ControlState::default(),
            slots: bindings
                .into_iter()
                .map(|binding| Slot {
                    binding,
                    artifact: Artifact::Pending,
                    dirty: true,
                    renders: 0,
                })
                .collect(),
        }
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    /// Commit an edited control state. The swap is a single assignment, so a
    /// later render observes either the state before the edit or after it,
    /// never a mix of the two.
    pub fn commit(&mut self, next: ControlState) {
        let changed = self.controls.changed_fields(&next);
        if changed.is_empty() {
            return;
        }
        for slot in &mut self.slots {
            if slot
                .binding
                .dependencies()
                .iter()
                .any(|dep| changed.contains(dep))
            {
                slot.dirty = true;
            }
        }
        self.controls = next;
    }

    /// Re-render exactly the dirty bindings. A failing render is confined to
    /// its own slot: that output shows a placeholder, the rest keep their
    /// artifacts.
    pub fn refresh(&mut self, dataset: &Dataset) {
        for slot in &mut self.slots {
            if !slot.dirty {
                continue;
            }
            slot.artifact = match slot.binding.render(dataset, &self.controls) {
                Ok(artifact) => artifact,
                Err(err) => {
                    log::error!("render failed: {err}");
                    Artifact::Failed(err.to_string())
                }
            };
            slot.renders += 1;
            slot.dirty = false;
        }
    }

    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.slots
            .iter()
            .find(|slot| slot.binding.name() == name)
            .map(|slot| &slot.artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;
    use crate::views::{self, Artifact};

    fn dataset(adelie: usize, gentoo: usize, chinstrap: usize) -> Dataset {
        let mut records = Vec::new();
        let mut push = |species: Species, n: usize| {
            for i in 0..n {
                records.push(Record {
                    species,
                    island: "Dream".to_string(),
                    bill_length_mm: Some(40.0 + i as f64),
                    bill_depth_mm: Some(18.0),
                    flipper_length_mm: Some(190.0 + i as f64),
                    body_mass_g: Some(3500.0 + 10.0 * i as f64),
                    sex: None,
                    year: 2008,
                });
            }
        };
        push(Species::Adelie, adelie);
        push(Species::Gentoo, gentoo);
        push(Species::Chinstrap, chinstrap);
        Dataset::from_records(records)
    }

    fn standard_dispatcher() -> Dispatcher {
        Dispatcher::new(views::standard_bindings())
    }

    fn renders(dispatcher: &Dispatcher) -> Vec<(&'static str, u64)> {
        dispatcher
            .slots
            .iter()
            .map(|slot| (slot.binding.name(), slot.renders))
            .collect()
    }

    #[test]
    fn first_refresh_renders_every_binding_once() {
        let data = dataset(2, 2, 1);
        let mut dispatcher = standard_dispatcher();
        dispatcher.refresh(&data);
        assert!(renders(&dispatcher).iter().all(|&(_, n)| n == 1));
        assert!(!matches!(
            dispatcher.artifact("penguin_table"),
            Some(Artifact::Pending) | None
        ));
    }

    #[test]
    fn hist_bin_change_re_renders_only_the_histogram() {
        let data = dataset(3, 2, 2);
        let mut dispatcher = standard_dispatcher();
        dispatcher.refresh(&data);

        let pie_before = dispatcher.artifact("species_pie").cloned();
        let scatter_before = dispatcher.artifact("mass_scatter").cloned();

        let mut next = dispatcher.controls().clone();
        next.hist_bin_count = 20;
        dispatcher.commit(next);
        dispatcher.refresh(&data);

        for (name, n) in renders(&dispatcher) {
            let expected = if name == "mass_histogram" { 2 } else { 1 };
            assert_eq!(n, expected, "{name}");
        }

        // Untouched outputs keep artifacts equal to the prior render.
        assert_eq!(dispatcher.artifact("species_pie").cloned(), pie_before);
        assert_eq!(dispatcher.artifact("mass_scatter").cloned(), scatter_before);

        match dispatcher.artifact("mass_histogram") {
            Some(Artifact::Histogram(spec)) => assert_eq!(spec.bin_count, 20),
            other => panic!("expected histogram artifact, got {other:?}"),
        }
    }

    // Regression pin: the species checkbox group is a dead input today.
    // Wiring it up must flip this test intentionally.
    #[test]
    fn species_selection_change_triggers_no_re_render() {
        let data = dataset(2, 2, 2);
        let mut dispatcher = standard_dispatcher();
        dispatcher.refresh(&data);

        let mut next = dispatcher.controls().clone();
        next.selected_species.remove(&Species::Gentoo);
        dispatcher.commit(next);
        dispatcher.refresh(&data);

        assert!(renders(&dispatcher).iter().all(|&(_, n)| n == 1));
    }

    // Same pin for the other two dead inputs.
    #[test]
    fn attribute_and_chart_bin_changes_trigger_no_re_render() {
        let data = dataset(2, 1, 1);
        let mut dispatcher = standard_dispatcher();
        dispatcher.refresh(&data);

        let mut next = dispatcher.controls().clone();
        next.selected_attribute = Attribute::BodyMassG;
        next.chart_bin_count = 25;
        dispatcher.commit(next);
        dispatcher.refresh(&data);

        assert!(renders(&dispatcher).iter().all(|&(_, n)| n == 1));
    }

    #[test]
    fn multi_field_commit_renders_each_affected_binding_once() {
        let data = dataset(2, 2, 2);
        let mut dispatcher = standard_dispatcher();
        dispatcher.refresh(&data);

        // One user action editing two fields lands as a single commit.
        let mut next = dispatcher.controls().clone();
        next.hist_bin_count = 42;
        next.selected_species.remove(&Species::Adelie);
        dispatcher.commit(next);
        dispatcher.refresh(&data);

        for (name, n) in renders(&dispatcher) {
            let expected = if name == "mass_histogram" { 2 } else { 1 };
            assert_eq!(n, expected, "{name}");
        }
    }

    #[test]
    fn commit_of_identical_state_marks_nothing_dirty() {
        let data = dataset(1, 1, 1);
        let mut dispatcher = standard_dispatcher();
        dispatcher.refresh(&data);

        let same = dispatcher.controls().clone();
        dispatcher.commit(same);
        dispatcher.refresh(&data);
        assert!(renders(&dispatcher).iter().all(|&(_, n)| n == 1));
    }

    #[test]
    fn failing_render_is_isolated_to_its_slot() {
        struct Failing;
        impl ViewBinding for Failing {
            fn name(&self) -> &'static str {
                "failing"
            }
            fn dependencies(&self) -> &'static [Control] {
                &[]
            }
            fn render(
                &self,
                _dataset: &Dataset,
                _controls: &ControlState,
            ) -> Result<Artifact, RenderError> {
                Err(RenderError::new("failing", "boom"))
            }
        }

        let data = dataset(1, 0, 0);
        let mut bindings = views::standard_bindings();
        bindings.push(Box::new(Failing));
        let mut dispatcher = Dispatcher::new(bindings);
        dispatcher.refresh(&data);

        assert!(matches!(
            dispatcher.artifact("failing"),
            Some(Artifact::Failed(_))
        ));
        assert!(matches!(
            dispatcher.artifact("species_pie"),
            Some(Artifact::Pie(_))
        ));
    }

    #[test]
    fn clamp_enforces_documented_ranges() {
        let mut controls = ControlState {
            chart_bin_count: 0,
            hist_bin_count: 500,
            ..ControlState::default()
        };
        controls.clamp();
        assert_eq!(controls.chart_bin_count, 1);
        assert_eq!(controls.hist_bin_count, 100);
    }
}
