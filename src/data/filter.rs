use std::collections::BTreeSet;

use super::model::{Column, Record, Species};

// ---------------------------------------------------------------------------
// Derivation engine: pure functions from records to the subsets and
// aggregates the views need. No state, no failure modes – empty input
// yields empty output.
// ---------------------------------------------------------------------------

/// Keep records whose species is in `selected`, preserving original order.
pub fn filter_by_species<'a>(
    records: &'a [Record],
    selected: &BTreeSet<Species>,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|rec| selected.contains(&rec.species))
        .collect()
}

/// Count records grouped by species. Groups appear in first-seen order,
/// so the result is stable for a fixed input ordering.
pub fn species_counts<'a, I>(records: I) -> Vec<(Species, usize)>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts: Vec<(Species, usize)> = Vec::new();
    for rec in records {
        match counts.iter_mut().find(|(sp, _)| *sp == rec.species) {
            Some((_, n)) => *n += 1,
            None => counts.push((rec.species, 1)),
        }
    }
    counts
}

/// Remove records missing any of the named columns. Never substitutes a
/// default for a missing value. Idempotent.
pub fn drop_incomplete<'a, I>(records: I, required: &[Column]) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|rec| required.iter().all(|&col| rec.has(col)))
        .collect()
}
