//! Species count aggregation for the top-species chart.

use std::collections::HashMap;

use ofw_core::occurrence::WhaleOccurrence;
use serde::Serialize;

/// Maximum entries shown by the top-species chart.
pub const TOP_SPECIES_LIMIT: usize = 10;

/// One bar of the top-species chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesCount {
    pub species: String,
    pub count: usize,
}

/// Count occurrences per canonical species, sorted by count descending
/// (species name ascending on ties, so the order is deterministic) and
/// truncated to [`TOP_SPECIES_LIMIT`] entries.
pub fn top_species(occurrences: &[WhaleOccurrence]) -> Vec<SpeciesCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for occurrence in occurrences {
        *counts.entry(occurrence.species.as_str()).or_insert(0) += 1;
    }

    let mut table: Vec<SpeciesCount> = counts
        .into_iter()
        .map(|(species, count)| SpeciesCount {
            species: species.to_string(),
            count,
        })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count).then(a.species.cmp(&b.species)));
    table.truncate(TOP_SPECIES_LIMIT);
    table
}
