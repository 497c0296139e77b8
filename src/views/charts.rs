use crate::data::filter::{drop_incomplete, species_counts};
use crate::data::model::{Column, Dataset, Record, Species};
use crate::reactive::{Control, ControlState, RenderError, ViewBinding};

use super::{
    Artifact, HistogramSeries, HistogramSpec, PieSlice, PieSpec, ScatterSeries, ScatterSpec,
};

// ---------------------------------------------------------------------------
// Pie chart: species distribution over the full dataset
// ---------------------------------------------------------------------------

pub struct PieChartView;

impl ViewBinding for PieChartView {
    fn name(&self) -> &'static str {
        "species_pie"
    }

    fn dependencies(&self) -> &'static [Control] {
        &[]
    }

    fn render(
        &self,
        dataset: &Dataset,
        _controls: &ControlState,
    ) -> Result<Artifact, RenderError> {
        // Deliberately unfiltered: the slice set is the whole dataset.
        let slices = species_counts(dataset.records())
            .into_iter()
            .map(|(species, count)| PieSlice { species, count })
            .collect();

        Ok(Artifact::Pie(PieSpec {
            title: "Distribution of Penguin Species",
            slices,
        }))
    }
}

// ---------------------------------------------------------------------------
// Scatterplot: flipper length vs body mass, coloured by species
// ---------------------------------------------------------------------------

pub struct ScatterplotView;

impl ViewBinding for ScatterplotView {
    fn name(&self) -> &'static str {
        "mass_scatter"
    }

    fn dependencies(&self) -> &'static [Control] {
        &[]
    }

    fn render(
        &self,
        dataset: &Dataset,
        _controls: &ControlState,
    ) -> Result<Artifact, RenderError> {
        let kept = drop_incomplete(
            dataset.records(),
            &[Column::FlipperLengthMm, Column::BodyMassG],
        );

        let series = Species::ALL
            .iter()
            .map(|&species| ScatterSeries {
                species,
                points: kept
                    .iter()
                    .filter(|rec| rec.species == species)
                    .map(|rec| {
                        // Both present after drop_incomplete.
                        [
                            rec.flipper_length_mm.unwrap_or(f64::NAN),
                            rec.body_mass_g.unwrap_or(f64::NAN),
                        ]
                    })
                    .collect(),
            })
            .collect();

        Ok(Artifact::Scatter(ScatterSpec {
            title: "Flipper Length vs Body Mass",
            x_label: "flipper_length_mm",
            y_label: "body_mass_g",
            series,
        }))
    }
}

// ---------------------------------------------------------------------------
// Histogram: body mass, overlaid per species, shared bin edges
// ---------------------------------------------------------------------------

pub struct HistogramView;

impl ViewBinding for HistogramView {
    fn name(&self) -> &'static str {
        "mass_histogram"
    }

    fn dependencies(&self) -> &'static [Control] {
        &[Control::HistBinCount]
    }

    fn render(
        &self,
        dataset: &Dataset,
        controls: &ControlState,
    ) -> Result<Artifact, RenderError> {
        let bin_count = controls.hist_bin_count.max(1);
        let kept = drop_incomplete(dataset.records(), &[Column::BodyMassG]);

        let mut spec = HistogramSpec {
            title: "Body Mass by Species",
            x_label: "Body Mass (g)",
            y_label: "Count",
            bin_count,
            start: 0.0,
            bin_width: 0.0,
            series: Vec::new(),
        };

        if kept.is_empty() {
            return Ok(Artifact::Histogram(spec));
        }

        let masses = |rec: &&Record| rec.body_mass_g.unwrap_or(f64::NAN);
        let min = kept.iter().map(masses).fold(f64::INFINITY, f64::min);
        let max = kept.iter().map(masses).fold(f64::NEG_INFINITY, f64::max);

        spec.start = min;
        // Degenerate range (all values equal): one unit-wide bin holds all.
        spec.bin_width = if max > min {
            (max - min) / bin_count as f64
        } else {
            1.0
        };

        spec.series = Species::ALL
            .iter()
            .map(|&species| {
                let mut counts = vec![0usize; bin_count as usize];
                for rec in kept.iter().filter(|rec| rec.species == species) {
                    let mass = rec.body_mass_g.unwrap_or(f64::NAN);
                    let bin = ((mass - spec.start) / spec.bin_width) as usize;
                    counts[bin.min(bin_count as usize - 1)] += 1;
                }
                HistogramSeries { species, counts }
            })
            .collect();

        Ok(Artifact::Histogram(spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(species: Species, flipper: Option<f64>, mass: Option<f64>) -> Record {
        Record {
            species,
            island: "Dream".to_string(),
            bill_length_mm: Some(44.0),
            bill_depth_mm: Some(17.5),
            flipper_length_mm: flipper,
            body_mass_g: mass,
            sex: None,
            year: 2009,
        }
    }

    fn counted_dataset(adelie: usize, gentoo: usize, chinstrap: usize) -> Dataset {
        let mut records = Vec::new();
        for (species, n) in [
            (Species::Adelie, adelie),
            (Species::Gentoo, gentoo),
            (Species::Chinstrap, chinstrap),
        ] {
            for i in 0..n {
                records.push(rec(species, Some(190.0), Some(3000.0 + i as f64)));
            }
        }
        Dataset::from_records(records)
    }

    #[test]
    fn pie_has_one_slice_per_species_summing_to_total() {
        let data = counted_dataset(50, 30, 20);
        let artifact = PieChartView
            .render(&data, &ControlState::default())
            .unwrap();
        let Artifact::Pie(spec) = artifact else {
            panic!("expected pie artifact");
        };
        assert_eq!(spec.slices.len(), 3);
        let total: usize = spec.slices.iter().map(|s| s.count).sum();
        assert_eq!(total, 100);
        // First-seen order of the input.
        assert_eq!(spec.slices[0].species, Species::Adelie);
        assert_eq!(spec.slices[0].count, 50);
    }

    #[test]
    fn pie_ignores_the_species_selection() {
        let data = counted_dataset(5, 4, 3);
        let mut controls = ControlState::default();
        controls.selected_species.clear();
        let Artifact::Pie(spec) = PieChartView.render(&data, &controls).unwrap() else {
            panic!("expected pie artifact");
        };
        assert_eq!(spec.slices.len(), 3);
    }

    #[test]
    fn scatter_drops_rows_missing_either_axis() {
        let data = Dataset::from_records(vec![
            rec(Species::Adelie, Some(181.0), Some(3750.0)),
            rec(Species::Adelie, None, Some(3800.0)),
            rec(Species::Gentoo, Some(217.0), None),
            rec(Species::Gentoo, Some(215.0), Some(5100.0)),
        ]);
        let Artifact::Scatter(spec) = ScatterplotView
            .render(&data, &ControlState::default())
            .unwrap()
        else {
            panic!("expected scatter artifact");
        };

        let points: usize = spec.series.iter().map(|s| s.points.len()).sum();
        assert_eq!(points, 2);

        let adelie = &spec.series[0];
        assert_eq!(adelie.species, Species::Adelie);
        assert_eq!(adelie.points, vec![[181.0, 3750.0]]);
    }

    #[test]
    fn scatter_of_empty_dataset_is_empty_not_an_error() {
        let Artifact::Scatter(spec) = ScatterplotView
            .render(&Dataset::from_records(Vec::new()), &ControlState::default())
            .unwrap()
        else {
            panic!("expected scatter artifact");
        };
        assert!(spec.series.iter().all(|s| s.points.is_empty()));
    }

    #[test]
    fn histogram_uses_the_committed_bin_count_and_shared_edges() {
        let data = Dataset::from_records(vec![
            rec(Species::Adelie, Some(181.0), Some(3000.0)),
            rec(Species::Adelie, Some(185.0), Some(3400.0)),
            rec(Species::Gentoo, Some(217.0), Some(5000.0)),
            rec(Species::Gentoo, Some(220.0), None), // excluded
        ]);
        let controls = ControlState {
            hist_bin_count: 4,
            ..ControlState::default()
        };
        let Artifact::Histogram(spec) = HistogramView.render(&data, &controls).unwrap() else {
            panic!("expected histogram artifact");
        };

        assert_eq!(spec.bin_count, 4);
        assert_eq!(spec.start, 3000.0);
        assert_eq!(spec.bin_width, 500.0);
        assert_eq!(spec.series.len(), 3);

        // Every series spans the same bins; totals only count complete rows.
        assert!(spec.series.iter().all(|s| s.counts.len() == 4));
        let total: usize = spec
            .series
            .iter()
            .flat_map(|s| s.counts.iter())
            .sum();
        assert_eq!(total, 3);

        // The shared-domain maximum lands in the last (closed) bin.
        let gentoo = spec
            .series
            .iter()
            .find(|s| s.species == Species::Gentoo)
            .unwrap();
        assert_eq!(gentoo.counts, vec![0, 0, 0, 1]);
    }

    #[test]
    fn histogram_with_identical_values_collapses_into_one_bin() {
        let data = Dataset::from_records(vec![
            rec(Species::Chinstrap, None, Some(3700.0)),
            rec(Species::Chinstrap, None, Some(3700.0)),
        ]);
        let Artifact::Histogram(spec) = HistogramView
            .render(&data, &ControlState::default())
            .unwrap()
        else {
            panic!("expected histogram artifact");
        };
        let chinstrap = spec
            .series
            .iter()
            .find(|s| s.species == Species::Chinstrap)
            .unwrap();
        assert_eq!(chinstrap.counts.iter().sum::<usize>(), 2);
        assert_eq!(chinstrap.counts[0], 2);
    }

    #[test]
    fn histogram_of_empty_dataset_is_empty_not_an_error() {
        let Artifact::Histogram(spec) = HistogramView
            .render(&Dataset::from_records(Vec::new()), &ControlState::default())
            .unwrap()
        else {
            panic!("expected histogram artifact");
        };
        assert!(spec.series.is_empty());
        assert_eq!(spec.bin_width, 0.0);
    }
}
