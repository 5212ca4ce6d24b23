//! Regional occurrence lists for the whale-presence map.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One sighting in a regional extract. All fields are present in these
/// files (the preprocessing drops incomplete records).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionOccurrence {
    #[serde(rename = "scientificName")]
    pub scientific_name: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub lon: f64,
    pub lat: f64,
}

/// Occurrences grouped into the two shipped regions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegionData {
    #[serde(default, rename = "Europe")]
    pub europe: Vec<RegionOccurrence>,
    #[serde(default, rename = "North_Atlantic")]
    pub north_atlantic: Vec<RegionOccurrence>,
}

/// Display names offered by the region selector.
pub const REGION_NAMES: [&str; 2] = ["Europe", "North Atlantic"];

impl RegionData {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid region JSON")
    }

    /// Occurrences for a region display name ("Europe" / "North Atlantic").
    pub fn by_name(&self, name: &str) -> &[RegionOccurrence] {
        match name {
            "North Atlantic" => &self.north_atlantic,
            "Europe" => &self.europe,
            _ => &[],
        }
    }

    /// Per-species occurrence counts for a region, keyed by species name
    /// (sorted, so iteration order matches the dropdown).
    pub fn species_counts(&self, region: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for occurrence in self.by_name(region) {
            *counts.entry(occurrence.scientific_name.clone()).or_insert(0) += 1;
        }
        counts
    }
}
