//! Shared view state driving every visualization.
//!
//! The state itself is a plain struct; reactivity comes from wrapping it in
//! a Dioxus `Signal` owned by the root component (see `ofw-chart-ui`). All
//! mutation goes through [`ViewState::apply`], which merges a partial patch
//! in one step so observers never see a half-applied update.

use crate::date_range::DateRange;
use crate::month_index::MONTH_COUNT;

/// Species filter: everything, or one canonical species name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpeciesFilter {
    #[default]
    All,
    One(String),
}

impl SpeciesFilter {
    /// Parse a `<select>` value ("All" is the sentinel option).
    pub fn parse(value: &str) -> Self {
        if value == "All" {
            SpeciesFilter::All
        } else {
            SpeciesFilter::One(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SpeciesFilter::All)
    }

    /// True if the filter admits `species`.
    pub fn matches(&self, species: &str) -> bool {
        match self {
            SpeciesFilter::All => true,
            SpeciesFilter::One(s) => s == species,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SpeciesFilter::All => "All",
            SpeciesFilter::One(s) => s,
        }
    }
}

/// Current filter/time selections for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Selected timeline position (0 = 2011-01).
    pub time_index: usize,
    pub species: SpeciesFilter,
    pub range: DateRange,
    pub show_whales: bool,
    pub show_currents: bool,
    /// Whether the timeline animation is running.
    pub playing: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            time_index: 0,
            species: SpeciesFilter::All,
            range: DateRange::default(),
            show_whales: true,
            show_currents: true,
            playing: false,
        }
    }
}

/// Partial update to [`ViewState`]; `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ViewStatePatch {
    pub time_index: Option<usize>,
    pub species: Option<SpeciesFilter>,
    pub range: Option<DateRange>,
    pub show_whales: Option<bool>,
    pub show_currents: Option<bool>,
    pub playing: Option<bool>,
}

impl ViewState {
    /// Merge `patch` over the current state in one step.
    pub fn apply(&mut self, patch: ViewStatePatch) {
        if let Some(v) = patch.time_index {
            self.time_index = v;
        }
        if let Some(v) = patch.species {
            self.species = v;
        }
        if let Some(v) = patch.range {
            self.range = v;
        }
        if let Some(v) = patch.show_whales {
            self.show_whales = v;
        }
        if let Some(v) = patch.show_currents {
            self.show_currents = v;
        }
        if let Some(v) = patch.playing {
            self.playing = v;
        }
    }

    /// Advance the timeline one month, wrapping at the end of the data.
    pub fn next_time_index(&self) -> usize {
        (self.time_index + 1) % MONTH_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_merges_fully_before_observation() {
        let mut state = ViewState::default();
        state.apply(ViewStatePatch {
            time_index: Some(5),
            species: Some(SpeciesFilter::One("Balaenoptera physalus".into())),
            show_currents: Some(false),
            ..Default::default()
        });

        // An observer called after apply() sees every patched field at once.
        let observed = state.clone();
        assert_eq!(observed.time_index, 5);
        assert_eq!(
            observed.species,
            SpeciesFilter::One("Balaenoptera physalus".into())
        );
        assert!(!observed.show_currents);
        // Untouched fields keep their previous values.
        assert!(observed.show_whales);
        assert_eq!(observed.range, DateRange::Y2011_2012);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut state = ViewState::default();
        let before = state.clone();
        state.apply(ViewStatePatch::default());
        assert_eq!(state, before);
    }

    #[test]
    fn time_index_wraps() {
        let mut state = ViewState {
            time_index: MONTH_COUNT - 1,
            ..Default::default()
        };
        assert_eq!(state.next_time_index(), 0);
        state.time_index = 3;
        assert_eq!(state.next_time_index(), 4);
    }

    #[test]
    fn species_filter_matches() {
        assert!(SpeciesFilter::All.matches("anything"));
        let one = SpeciesFilter::parse("Megaptera novaeangliae");
        assert!(one.matches("Megaptera novaeangliae"));
        assert!(!one.matches("Balaenoptera physalus"));
        assert!(SpeciesFilter::parse("All").is_all());
    }
}
