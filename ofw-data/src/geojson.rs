//! GeoJSON construction for map layer sources.
//!
//! The map bridge takes whole FeatureCollections as JSON; these builders
//! write the canonical `species` property so paint expressions never need
//! the alternate-key fallback chain.

use ofw_core::currents::CurrentSample;
use ofw_core::occurrence::WhaleOccurrence;
use ofw_core::regions::RegionOccurrence;
use ofw_core::species_stats::GeoPoint;
use ofw_core::subset::SubsetGrid;
use serde_json::{json, Value};

fn feature_collection(features: Vec<Value>) -> Value {
    json!({ "type": "FeatureCollection", "features": features })
}

fn point_feature(lon: f64, lat: f64, properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": { "type": "Point", "coordinates": [lon, lat] },
        "properties": properties,
    })
}

/// An empty FeatureCollection, used to clear a source.
pub fn empty_collection() -> Value {
    feature_collection(Vec::new())
}

/// Whale sightings as map features carrying species and date properties.
pub fn occurrences_to_geojson(occurrences: &[WhaleOccurrence]) -> Value {
    let features = occurrences
        .iter()
        .map(|o| {
            point_feature(
                o.lon,
                o.lat,
                json!({
                    "species": o.species,
                    "scientificName": o.scientific_name,
                    "year": o.year,
                    "month": o.month,
                    "day": o.day,
                }),
            )
        })
        .collect();
    feature_collection(features)
}

/// Regional sightings for the presence map (click popups read these keys).
pub fn region_to_geojson(occurrences: &[RegionOccurrence]) -> Value {
    let features = occurrences
        .iter()
        .map(|o| {
            point_feature(
                o.lon,
                o.lat,
                json!({
                    "species": o.scientific_name,
                    "year": o.year,
                    "month": o.month,
                    "day": o.day,
                }),
            )
        })
        .collect();
    feature_collection(features)
}

/// Current samples as features carrying the vertical velocity `w`.
pub fn currents_to_geojson(samples: &[CurrentSample]) -> Value {
    let features = samples
        .iter()
        .map(|s| point_feature(s.lon, s.lat, json!({ "w": s.w })))
        .collect();
    feature_collection(features)
}

/// Detail-view sighting locations (no properties needed).
pub fn points_to_geojson(points: &[GeoPoint]) -> Value {
    let features = points
        .iter()
        .map(|p| point_feature(p.lon, p.lat, json!({})))
        .collect();
    feature_collection(features)
}

/// Grid cells with a usable value as point features carrying `value`.
/// Null and non-finite cells are skipped; so are cells whose indices run
/// past the coordinate arrays (truncated responses).
pub fn grid_to_geojson(grid: &SubsetGrid) -> Value {
    let lats = &grid.coords.latitude;
    let lons = &grid.coords.longitude;

    let mut features = Vec::new();
    for (i, row) in grid.data.iter().enumerate() {
        let Some(&lat) = lats.get(i) else { break };
        for (j, cell) in row.iter().enumerate() {
            let Some(&lon) = lons.get(j) else { break };
            if let Some(value) = (*cell).filter(|v| v.is_finite()) {
                features.push(point_feature(lon, lat, json!({ "value": value })));
            }
        }
    }
    feature_collection(features)
}

/// (min, max) over the grid's usable cells; `None` for an empty grid.
pub fn grid_min_max(grid: &SubsetGrid) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;
    for value in grid
        .data
        .iter()
        .flatten()
        .filter_map(|cell| (*cell).filter(|v| v.is_finite()))
    {
        extent = Some(match extent {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }
    extent
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occurrences_carry_canonical_species() {
        let occurrences = vec![WhaleOccurrence {
            species: "Fin Whale".into(),
            scientific_name: Some("Balaenoptera physalus".into()),
            year: Some(2011),
            month: Some(3),
            day: Some(14),
            event_date: None,
            lon: -5.2,
            lat: 44.8,
        }];
        let geojson = occurrences_to_geojson(&occurrences);
        let feature = &geojson["features"][0];
        assert_eq!(feature["geometry"]["coordinates"][0], -5.2);
        assert_eq!(feature["properties"]["species"], "Fin Whale");
        assert_eq!(feature["properties"]["year"], 2011);
    }

    #[test]
    fn empty_collection_has_no_features() {
        assert_eq!(empty_collection()["features"].as_array().unwrap().len(), 0);
    }

    fn grid() -> SubsetGrid {
        SubsetGrid::parse(
            r#"{
                "coords": { "latitude": [50.0, 51.0], "longitude": [-5.0, -4.0] },
                "data": [[null, 9.5], [10.5, null]]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn grid_features_skip_null_cells() {
        let geojson = grid_to_geojson(&grid());
        let features = geojson["features"].as_array().unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0]["properties"]["value"], 9.5);
        assert_eq!(features[0]["geometry"]["coordinates"][0], -4.0);
        assert_eq!(features[1]["geometry"]["coordinates"][1], 51.0);
    }

    #[test]
    fn grid_min_max_ignores_nulls() {
        assert_eq!(grid_min_max(&grid()), Some((9.5, 10.5)));
        assert_eq!(grid_min_max(&SubsetGrid::default()), None);
    }

    #[test]
    fn currents_carry_w() {
        let geojson = currents_to_geojson(&[CurrentSample {
            lat: 45.0,
            lon: -5.0,
            w: 0.012,
        }]);
        assert_eq!(geojson["features"][0]["properties"]["w"], 0.012);
    }
}
