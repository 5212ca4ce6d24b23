//! Typed client surface for the ECCO reanalysis subset API.
//!
//! Parameter validation happens synchronously, before any network call;
//! an invalid request never leaves the process. The native HTTP client
//! lives behind the `api` feature (reqwest does not build for wasm32 the
//! way we deploy); browser builds go through the fetch wrapper in
//! `ofw-chart-ui` and share these types.

use std::fmt;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[cfg(feature = "api")]
pub mod client;

/// Production endpoint of the subset service.
pub const DEFAULT_BASE_URL: &str = "https://ioi-project-api.svarog.top";

/// Maximum accepted spatial decimation factor.
pub const MAX_STRIDE: u32 = 50;

/// Environmental variable to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    /// Salinity (PSU).
    So,
    /// Potential temperature (°C).
    Thetao,
}

impl Variable {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variable::So => "so",
            Variable::Thetao => "thetao",
        }
    }
}

/// Response encoding requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Netcdf,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Netcdf => "netcdf",
            OutputFormat::Json => "json",
        }
    }
}

/// A lon/lat box in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Clamp to the world extent ([-180, 180] x [-90, 90]).
    pub fn clamped(&self) -> Self {
        Self {
            min_lon: self.min_lon.clamp(-180.0, 180.0),
            max_lon: self.max_lon.clamp(-180.0, 180.0),
            min_lat: self.min_lat.clamp(-90.0, 90.0),
            max_lat: self.max_lat.clamp(-90.0, 90.0),
        }
    }
}

/// Errors from building or executing a subset request.
#[derive(Debug)]
pub enum SubsetError {
    /// Rejected locally before any network call.
    InvalidParams(String),
    /// Non-2xx response from the service.
    Http { status: u16, text: String },
    /// Transport failure or an undecodable body.
    Decode(String),
}

impl fmt::Display for SubsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubsetError::InvalidParams(msg) => write!(f, "invalid subset parameters: {msg}"),
            SubsetError::Http { status, text } => {
                write!(f, "subset request failed: {status} {text}")
            }
            SubsetError::Decode(msg) => write!(f, "subset response unusable: {msg}"),
        }
    }
}

impl std::error::Error for SubsetError {}

/// Query parameters for `GET /subset`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetParams {
    /// Dataset key; the service defaults to "reanalysis".
    pub dataset: Option<String>,
    pub variable: Variable,
    pub bounds: BoundingBox,
    /// ISO timestamp or "YYYY-MM"; the service picks the nearest match.
    pub time: Option<String>,
    /// Depth in meters; nearest level is used.
    pub depth: Option<f64>,
    /// Spatial decimation (1 = full resolution). Defaults to 1 server-side.
    pub stride: Option<u32>,
    /// Defaults to netcdf server-side.
    pub fmt: Option<OutputFormat>,
}

impl SubsetParams {
    pub fn new(variable: Variable, bounds: BoundingBox) -> Self {
        Self {
            dataset: None,
            variable,
            bounds,
            time: None,
            depth: None,
            stride: None,
            fmt: None,
        }
    }

    /// A temperature grid request as the overlay issues it.
    pub fn temperature(bounds: BoundingBox) -> Self {
        Self::new(Variable::Thetao, bounds)
    }

    /// A salinity grid request as the overlay issues it.
    pub fn salinity(bounds: BoundingBox) -> Self {
        Self::new(Variable::So, bounds)
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_stride(mut self, stride: u32) -> Self {
        self.stride = Some(stride);
        self
    }

    pub fn with_fmt(mut self, fmt: OutputFormat) -> Self {
        self.fmt = Some(fmt);
        self
    }

    /// Reject out-of-range bounds and stride before any network call.
    pub fn validate(&self) -> Result<(), SubsetError> {
        let b = &self.bounds;
        let lon_ok = |v: f64| (-180.0..=180.0).contains(&v);
        let lat_ok = |v: f64| (-90.0..=90.0).contains(&v);

        if !lon_ok(b.min_lon) || !lon_ok(b.max_lon) {
            return Err(SubsetError::InvalidParams(format!(
                "longitude must be between -180 and 180 (got {} .. {})",
                b.min_lon, b.max_lon
            )));
        }
        if !lat_ok(b.min_lat) || !lat_ok(b.max_lat) {
            return Err(SubsetError::InvalidParams(format!(
                "latitude must be between -90 and 90 (got {} .. {})",
                b.min_lat, b.max_lat
            )));
        }
        if let Some(stride) = self.stride {
            if stride < 1 || stride > MAX_STRIDE {
                return Err(SubsetError::InvalidParams(format!(
                    "stride must be between 1 and {MAX_STRIDE} (got {stride})"
                )));
            }
        }
        Ok(())
    }

    /// Build the query string. Required parameters come first in a fixed
    /// order; optional ones are appended only when set.
    pub fn to_query_string(&self) -> String {
        let b = &self.bounds;
        let mut query = format!(
            "dataset={}&variable={}&min_lon={}&max_lon={}&min_lat={}&max_lat={}",
            self.dataset.as_deref().unwrap_or("reanalysis"),
            self.variable.as_str(),
            b.min_lon,
            b.max_lon,
            b.min_lat,
            b.max_lat,
        );
        if let Some(time) = &self.time {
            // Times are "YYYY-MM" or ISO stamps; the latter may carry a
            // space separator or a "+HH:MM" offset, and a bare '+' in a
            // query decodes as a space.
            let escaped = time.replace('+', "%2B").replace(' ', "%20");
            query.push_str(&format!("&time={escaped}"));
        }
        if let Some(depth) = self.depth {
            query.push_str(&format!("&depth={depth}"));
        }
        if let Some(stride) = self.stride {
            query.push_str(&format!("&stride={stride}"));
        }
        if let Some(fmt) = self.fmt {
            query.push_str(&format!("&fmt={}", fmt.as_str()));
        }
        query
    }

    /// Full request URL against `base_url` (validated).
    pub fn to_url(&self, base_url: &str) -> Result<String, SubsetError> {
        self.validate()?;
        Ok(format!(
            "{}/subset?{}",
            base_url.trim_end_matches('/'),
            self.to_query_string()
        ))
    }
}

/// Grid coordinates of a JSON subset response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridCoords {
    #[serde(default)]
    pub latitude: Vec<f64>,
    #[serde(default)]
    pub longitude: Vec<f64>,
}

/// A JSON subset response: `data[i][j]` is the value at
/// `(coords.latitude[i], coords.longitude[j])`; null marks land/no data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubsetGrid {
    #[serde(default)]
    pub coords: GridCoords,
    #[serde(default)]
    pub data: Vec<Vec<Option<f64>>>,
}

impl SubsetGrid {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid subset grid JSON")
    }

    /// True when the grid holds no usable (non-null, finite) cell.
    pub fn is_empty(&self) -> bool {
        !self
            .data
            .iter()
            .flatten()
            .any(|cell| cell.map(f64::is_finite).unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_bounds() -> BoundingBox {
        BoundingBox {
            min_lon: -30.0,
            max_lon: 10.0,
            min_lat: 50.0,
            max_lat: 70.0,
        }
    }

    #[test]
    fn out_of_range_longitude_fails_before_network() {
        let params = SubsetParams::temperature(BoundingBox {
            min_lon: -200.0,
            ..valid_bounds()
        });
        assert!(matches!(
            params.validate(),
            Err(SubsetError::InvalidParams(_))
        ));
        assert!(params.to_url(DEFAULT_BASE_URL).is_err());
    }

    #[test]
    fn out_of_range_latitude_fails() {
        let params = SubsetParams::salinity(BoundingBox {
            max_lat: 95.0,
            ..valid_bounds()
        });
        assert!(params.validate().is_err());
    }

    #[test]
    fn stride_bounds_are_inclusive() {
        let base = SubsetParams::temperature(valid_bounds());
        assert!(base.clone().with_stride(50).validate().is_ok());
        assert!(base.clone().with_stride(51).validate().is_err());
        assert!(base.clone().with_stride(0).validate().is_err());
        assert!(base.with_stride(1).validate().is_ok());
    }

    #[test]
    fn query_string_orders_and_defaults() {
        let params = SubsetParams::temperature(valid_bounds())
            .with_time("2011-03")
            .with_depth(0.0)
            .with_stride(3)
            .with_fmt(OutputFormat::Json);
        assert_eq!(
            params.to_query_string(),
            "dataset=reanalysis&variable=thetao&min_lon=-30&max_lon=10&min_lat=50&max_lat=70&time=2011-03&depth=0&stride=3&fmt=json"
        );

        let bare = SubsetParams::salinity(valid_bounds());
        assert_eq!(
            bare.to_query_string(),
            "dataset=reanalysis&variable=so&min_lon=-30&max_lon=10&min_lat=50&max_lat=70"
        );
    }

    #[test]
    fn iso_time_offsets_survive_query_encoding() {
        let params =
            SubsetParams::temperature(valid_bounds()).with_time("2011-03-01 00:00:00+00:00");
        let query = params.to_query_string();
        assert!(query.ends_with("&time=2011-03-01%2000:00:00%2B00:00"));
        assert!(!query.contains('+'));
        assert!(!query.contains(' '));
    }

    #[test]
    fn url_includes_base_and_path() {
        let params = SubsetParams::temperature(valid_bounds());
        let url = params.to_url("https://example.test/").unwrap();
        assert!(url.starts_with("https://example.test/subset?dataset="));
    }

    #[test]
    fn bounding_box_clamps_to_world() {
        let clamped = BoundingBox {
            min_lon: -200.0,
            max_lon: 200.0,
            min_lat: -95.0,
            max_lat: 95.0,
        }
        .clamped();
        assert_eq!(clamped.min_lon, -180.0);
        assert_eq!(clamped.max_lon, 180.0);
        assert_eq!(clamped.min_lat, -90.0);
        assert_eq!(clamped.max_lat, 90.0);
    }

    #[test]
    fn grid_parse_keeps_nulls_and_reports_emptiness() {
        let grid = SubsetGrid::parse(
            r#"{ "coords": { "latitude": [50.0], "longitude": [-5.0, -4.0] },
                 "data": [[null, 9.5]] }"#,
        )
        .unwrap();
        assert_eq!(grid.data[0][0], None);
        assert_eq!(grid.data[0][1], Some(9.5));
        assert!(!grid.is_empty());

        let empty = SubsetGrid::parse(r#"{ "coords": {}, "data": [[null, null]] }"#).unwrap();
        assert!(empty.is_empty());
    }
}
