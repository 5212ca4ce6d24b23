//! ECCO vertical-flow (w) samples at the surface, one step per month.

use anyhow::Context;
use serde::Deserialize;

/// One sampled grid point. `w` is the vertical velocity in m/s;
/// w > 0 indicates upwelling, w < 0 downwelling.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CurrentSample {
    pub lat: f64,
    pub lon: f64,
    pub w: f64,
}

/// Time-indexed current samples loaded once from the flow JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentsData {
    #[serde(default)]
    pub steps: Vec<Vec<CurrentSample>>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl CurrentsData {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid currents JSON")
    }

    /// Samples for a timeline position, clamped to the available steps.
    /// Returns an empty slice when no steps are loaded.
    pub fn step_at(&self, time_index: usize) -> &[CurrentSample] {
        if self.steps.is_empty() {
            return &[];
        }
        let idx = time_index.min(self.steps.len() - 1);
        &self.steps[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOW_JSON: &str = r#"{
        "labels": ["2011-01", "2011-02"],
        "steps": [
            [{ "lat": 45.0, "lon": -5.0, "w": 0.012 }],
            [{ "lat": 45.0, "lon": -5.0, "w": -0.03 }, { "lat": 56.0, "lon": 3.0, "w": 0.0 }]
        ]
    }"#;

    #[test]
    fn parse_reads_steps_and_labels() {
        let currents = CurrentsData::parse(FLOW_JSON).unwrap();
        assert_eq!(currents.steps.len(), 2);
        assert_eq!(currents.labels, vec!["2011-01", "2011-02"]);
        assert_eq!(currents.steps[0][0].w, 0.012);
    }

    #[test]
    fn step_at_clamps_to_last_step() {
        let currents = CurrentsData::parse(FLOW_JSON).unwrap();
        assert_eq!(currents.step_at(0).len(), 1);
        assert_eq!(currents.step_at(1).len(), 2);
        assert_eq!(currents.step_at(23).len(), 2);
    }

    #[test]
    fn step_at_on_empty_data_is_empty() {
        let currents = CurrentsData::default();
        assert!(currents.step_at(0).is_empty());
    }
}
