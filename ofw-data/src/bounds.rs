//! Bounding-box resolution for the environmental overlay and map fitting.

use ofw_core::regions::RegionOccurrence;
use ofw_core::species_stats::GeoPoint;
use ofw_core::subset::BoundingBox;

/// Degrees of longitude added on each side of a monthly centroid.
pub const CENTROID_LON_BUFFER: f64 = 20.0;
/// Degrees of latitude added on each side of a monthly centroid.
pub const CENTROID_LAT_BUFFER: f64 = 15.0;

/// Last-resort request box over the North-East Atlantic.
pub const FALLBACK_BOUNDS: BoundingBox = BoundingBox {
    min_lon: -30.0,
    max_lon: 10.0,
    min_lat: 50.0,
    max_lat: 70.0,
};

/// Pick the overlay request box: the current map viewport when known,
/// else a buffered box around the species' monthly centroid, else the
/// hard-coded fallback. The result is always clamped to world bounds.
pub fn resolve_overlay_bounds(
    viewport: Option<BoundingBox>,
    centroid: Option<GeoPoint>,
) -> BoundingBox {
    if let Some(viewport) = viewport {
        return viewport.clamped();
    }
    if let Some(centroid) = centroid {
        return BoundingBox {
            min_lon: centroid.lon - CENTROID_LON_BUFFER,
            max_lon: centroid.lon + CENTROID_LON_BUFFER,
            min_lat: centroid.lat - CENTROID_LAT_BUFFER,
            max_lat: centroid.lat + CENTROID_LAT_BUFFER,
        }
        .clamped();
    }
    FALLBACK_BOUNDS
}

/// Tight box around a set of points, for `fitBounds` after a selection
/// change. `None` when there are no points.
pub fn fit_bounds(occurrences: &[RegionOccurrence]) -> Option<BoundingBox> {
    let first = occurrences.first()?;
    let mut bounds = BoundingBox {
        min_lon: first.lon,
        max_lon: first.lon,
        min_lat: first.lat,
        max_lat: first.lat,
    };
    for occurrence in &occurrences[1..] {
        bounds.min_lon = bounds.min_lon.min(occurrence.lon);
        bounds.max_lon = bounds.max_lon.max(occurrence.lon);
        bounds.min_lat = bounds.min_lat.min(occurrence.lat);
        bounds.max_lat = bounds.max_lat.max(occurrence.lat);
    }
    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_wins_over_centroid() {
        let viewport = BoundingBox {
            min_lon: -10.0,
            max_lon: 5.0,
            min_lat: 40.0,
            max_lat: 55.0,
        };
        let resolved =
            resolve_overlay_bounds(Some(viewport), Some(GeoPoint { lon: 100.0, lat: 0.0 }));
        assert_eq!(resolved, viewport);
    }

    #[test]
    fn centroid_is_buffered_and_clamped() {
        let resolved = resolve_overlay_bounds(None, Some(GeoPoint { lon: -170.0, lat: 80.0 }));
        assert_eq!(resolved.min_lon, -180.0); // -190 clamped
        assert_eq!(resolved.max_lon, -150.0);
        assert_eq!(resolved.min_lat, 65.0);
        assert_eq!(resolved.max_lat, 90.0); // 95 clamped
    }

    #[test]
    fn fallback_applies_when_nothing_is_known() {
        assert_eq!(resolve_overlay_bounds(None, None), FALLBACK_BOUNDS);
    }

    #[test]
    fn fit_bounds_covers_all_points() {
        let occurrence = |lon: f64, lat: f64| RegionOccurrence {
            scientific_name: "X".into(),
            year: 2011,
            month: 1,
            day: 1,
            lon,
            lat,
        };
        let points = vec![
            occurrence(-5.0, 44.0),
            occurrence(3.0, 56.0),
            occurrence(-20.0, 64.0),
        ];
        let bounds = fit_bounds(&points).unwrap();
        assert_eq!(bounds.min_lon, -20.0);
        assert_eq!(bounds.max_lon, 3.0);
        assert_eq!(bounds.min_lat, 44.0);
        assert_eq!(bounds.max_lat, 64.0);

        assert!(fit_bounds(&[]).is_none());
    }
}
