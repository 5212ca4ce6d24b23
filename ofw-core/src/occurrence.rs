//! Whale occurrence records and GeoJSON ingestion.
//!
//! The pre-computed OBIS extracts were written by several pipeline versions
//! and spell the species field differently (`species`, `species_name`,
//! `spec`, `scientificName`, `commonName`). Normalization happens once at
//! parse time: every record gets a canonical `species` string, so no
//! downstream consumer has to repeat the fallback chain.

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// Canonical species value for records missing every species-like key.
pub const UNKNOWN_SPECIES: &str = "Unknown";

/// Alternate property names checked for the species, in precedence order.
const SPECIES_KEYS: [&str; 5] = [
    "species",
    "species_name",
    "spec",
    "scientificName",
    "commonName",
];

/// A single whale sighting, normalized from a GeoJSON point feature.
#[derive(Debug, Clone, PartialEq)]
pub struct WhaleOccurrence {
    /// Canonical species name (first non-empty alternate key, else "Unknown").
    pub species: String,
    pub scientific_name: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub event_date: Option<NaiveDate>,
    pub lon: f64,
    pub lat: f64,
}

impl WhaleOccurrence {
    /// Month index of this sighting if both year and month are present.
    pub fn month_index(&self) -> Option<i32> {
        match (self.year, self.month) {
            (Some(y), Some(m)) => Some(crate::month_index::month_index(y, m)),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawFeatureCollection {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: Option<serde_json::Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Vec<f64>,
}

fn string_prop(props: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    props
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn int_prop(props: &serde_json::Map<String, Value>, key: &str) -> Option<i64> {
    match props.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}

/// First non-empty alternate species key, else "Unknown".
pub fn canonical_species(props: &serde_json::Map<String, Value>) -> String {
    SPECIES_KEYS
        .iter()
        .find_map(|key| string_prop(props, key))
        .unwrap_or_else(|| UNKNOWN_SPECIES.to_string())
}

impl RawFeature {
    fn normalize(self) -> Option<WhaleOccurrence> {
        let geometry = self.geometry?;
        if geometry.kind != "Point" || geometry.coordinates.len() < 2 {
            return None;
        }
        let props = self.properties.unwrap_or_default();

        let event_date = string_prop(&props, "eventDate").and_then(|s| {
            // May carry a time suffix; only the date part matters.
            NaiveDate::parse_from_str(s.get(..10).unwrap_or(&s), "%Y-%m-%d").ok()
        });

        Some(WhaleOccurrence {
            species: canonical_species(&props),
            scientific_name: string_prop(&props, "scientificName"),
            year: int_prop(&props, "year").map(|y| y as i32),
            month: int_prop(&props, "month").map(|m| m as u32),
            day: int_prop(&props, "day").map(|d| d as u32),
            event_date,
            lon: geometry.coordinates[0],
            lat: geometry.coordinates[1],
        })
    }
}

/// Parse a GeoJSON FeatureCollection into normalized occurrences.
/// Non-point features and features without geometry are dropped.
pub fn parse_geojson(text: &str) -> anyhow::Result<Vec<WhaleOccurrence>> {
    let collection: RawFeatureCollection =
        serde_json::from_str(text).context("invalid occurrence GeoJSON")?;
    Ok(collection
        .features
        .into_iter()
        .filter_map(RawFeature::normalize)
        .collect())
}

/// Sorted, de-duplicated species names for the species dropdown.
/// Records that fell back to "Unknown" are not offered as an option.
pub fn species_options(occurrences: &[WhaleOccurrence]) -> Vec<String> {
    let mut names: Vec<String> = occurrences
        .iter()
        .filter(|o| o.species != UNKNOWN_SPECIES)
        .map(|o| o.species.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}
