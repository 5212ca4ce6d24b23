//! Pre-computed per-species monthly aggregates for the detail view.
//!
//! The source JSON maps species name -> lowercase month name -> stats.
//! Missing environmental means appear either as JSON `null` or as the
//! literal string `"null"` (an artifact of the preprocessing pipeline);
//! both deserialize to `None`.

use std::collections::HashMap;

use anyhow::Context;
use serde::{Deserialize, Deserializer};

use crate::month_index::MONTH_NAMES;

/// A plain lon/lat pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

/// Mean of an environmental variable over the month's sighting locations.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MeanStat {
    pub mean: f64,
    #[serde(default)]
    pub points_processed: u32,
    #[serde(default)]
    pub total_points: u32,
}

fn mean_or_null<'de, D>(deserializer: D) -> Result<Option<MeanStat>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Object(_) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

/// Aggregates for one species in one month.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthStats {
    #[serde(default)]
    pub centroid: Option<GeoPoint>,
    /// Sighting locations; key spelling mirrors the source files.
    #[serde(default, rename = "occurences")]
    pub occurrences: Vec<GeoPoint>,
    #[serde(default, deserialize_with = "mean_or_null")]
    pub mean_temperature: Option<MeanStat>,
    #[serde(default, deserialize_with = "mean_or_null")]
    pub mean_salinity: Option<MeanStat>,
}

/// All per-species monthly aggregates, keyed by scientific name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeciesStats(pub HashMap<String, HashMap<String, MonthStats>>);

impl SpeciesStats {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid species stats JSON")
    }

    /// Stats for `species` in month `month0` (0-based, January = 0).
    pub fn month(&self, species: &str, month0: usize) -> Option<&MonthStats> {
        let month_name = MONTH_NAMES.get(month0)?;
        self.0.get(species)?.get(*month_name)
    }

    /// Twelve monthly mean temperatures for a species; missing months are 0.
    pub fn monthly_temperatures(&self, species: &str) -> [f64; 12] {
        self.monthly_means(species, |m| m.mean_temperature)
    }

    /// Twelve monthly mean salinities for a species; missing months are 0.
    pub fn monthly_salinities(&self, species: &str) -> [f64; 12] {
        self.monthly_means(species, |m| m.mean_salinity)
    }

    fn monthly_means(
        &self,
        species: &str,
        pick: impl Fn(&MonthStats) -> Option<MeanStat>,
    ) -> [f64; 12] {
        let mut means = [0.0; 12];
        for (i, mean) in means.iter_mut().enumerate() {
            if let Some(stat) = self.month(species, i).and_then(&pick) {
                *mean = stat.mean;
            }
        }
        means
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS_JSON: &str = r#"{
        "Balaenoptera physalus": {
            "january": {
                "centroid": { "lon": -8.5, "lat": 44.0 },
                "occurences": [{ "lon": -8.0, "lat": 44.0 }, { "lon": -9.0, "lat": 44.1 }],
                "mean_temperature": { "mean": 12.4, "points_processed": 80, "total_points": 100 },
                "mean_salinity": "null"
            },
            "february": {
                "centroid": null,
                "occurences": [],
                "mean_temperature": null,
                "mean_salinity": { "mean": 35.1, "points_processed": 60, "total_points": 60 }
            }
        }
    }"#;

    #[test]
    fn parse_handles_null_and_string_null_means() {
        let stats = SpeciesStats::parse(STATS_JSON).unwrap();
        let january = stats.month("Balaenoptera physalus", 0).unwrap();
        assert_eq!(january.mean_temperature.unwrap().mean, 12.4);
        assert!(january.mean_salinity.is_none());
        assert_eq!(january.occurrences.len(), 2);

        let february = stats.month("Balaenoptera physalus", 1).unwrap();
        assert!(february.centroid.is_none());
        assert!(february.mean_temperature.is_none());
        assert_eq!(february.mean_salinity.unwrap().mean, 35.1);
    }

    #[test]
    fn monthly_means_default_missing_months_to_zero() {
        let stats = SpeciesStats::parse(STATS_JSON).unwrap();
        let temps = stats.monthly_temperatures("Balaenoptera physalus");
        assert_eq!(temps[0], 12.4);
        assert_eq!(temps[1], 0.0);
        assert_eq!(temps[11], 0.0);

        let sals = stats.monthly_salinities("Balaenoptera physalus");
        assert_eq!(sals[0], 0.0);
        assert_eq!(sals[1], 35.1);
    }

    #[test]
    fn unknown_species_has_no_months() {
        let stats = SpeciesStats::parse(STATS_JSON).unwrap();
        assert!(stats.month("Orcinus orca", 0).is_none());
    }
}
