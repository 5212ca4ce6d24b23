//! Occurrence filtering against the current view state.

use ofw_core::occurrence::WhaleOccurrence;
use ofw_core::state::ViewState;

/// How far (in months, inclusive) a sighting may sit from the selected
/// timeline position and still be shown.
pub const MONTH_WINDOW: i32 = 1;

/// True if `occurrence` passes all three predicates for `state`:
/// year inside the selected range, species admitted by the filter, and
/// month index within [`MONTH_WINDOW`] of the timeline position. Records
/// missing year fail the range check; records missing year or month pass
/// the temporal check.
pub fn matches(occurrence: &WhaleOccurrence, state: &ViewState) -> bool {
    let in_range = occurrence
        .year
        .map(|y| state.range.contains_year(y))
        .unwrap_or(false);

    let species_ok = state.species.matches(&occurrence.species);

    let month_ok = match occurrence.month_index() {
        Some(idx) => (idx - state.time_index as i32).abs() <= MONTH_WINDOW,
        None => true,
    };

    in_range && species_ok && month_ok
}

/// Subset of `occurrences` passing [`matches`] for `state`.
pub fn filter_occurrences(
    occurrences: &[WhaleOccurrence],
    state: &ViewState,
) -> Vec<WhaleOccurrence> {
    occurrences
        .iter()
        .filter(|o| matches(o, state))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ofw_core::date_range::DateRange;
    use ofw_core::state::SpeciesFilter;

    fn occurrence(species: &str, year: i32, month: u32) -> WhaleOccurrence {
        WhaleOccurrence {
            species: species.to_string(),
            scientific_name: None,
            year: Some(year),
            month: Some(month),
            day: None,
            event_date: None,
            lon: 0.0,
            lat: 50.0,
        }
    }

    #[test]
    fn month_window_boundary_is_inclusive() {
        // Two January-2011 "A" records and one February-2011 "B" record,
        // range 2011-2012, species All, time index 0: all three pass
        // (February sits at distance 1, which is inside the window).
        let data = vec![
            occurrence("A", 2011, 1),
            occurrence("A", 2011, 1),
            occurrence("B", 2011, 2),
        ];
        let state = ViewState::default();
        let filtered = filter_occurrences(&data, &state);
        assert_eq!(filtered.len(), 3);

        // March-2011 sits at distance 2 and is excluded.
        let far = occurrence("C", 2011, 3);
        assert!(!matches(&far, &state));
    }

    #[test]
    fn filtering_is_idempotent() {
        let data = vec![
            occurrence("A", 2011, 1),
            occurrence("B", 2011, 2),
            occurrence("C", 2012, 6),
            occurrence("A", 2013, 1),
        ];
        let state = ViewState {
            time_index: 1,
            ..Default::default()
        };
        let once = filter_occurrences(&data, &state);
        let twice = filter_occurrences(&once, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn year_outside_range_is_excluded() {
        let state = ViewState::default();
        assert!(!matches(&occurrence("A", 2010, 1), &state));
        assert!(!matches(&occurrence("A", 2013, 1), &state));

        let wide = ViewState {
            range: DateRange::Y2010_2013,
            time_index: 12, // keep 2010/2013 records outside the month window moot
            ..Default::default()
        };
        // 2010-12 has month index -1, distance 13: fails only the window.
        let wintry = occurrence("A", 2010, 12);
        assert!(!matches(&wintry, &wide));
        let near = ViewState {
            range: DateRange::Y2010_2013,
            time_index: 0,
            ..Default::default()
        };
        assert!(matches(&wintry, &near));
    }

    #[test]
    fn missing_year_fails_range_but_missing_month_passes_window() {
        let state = ViewState::default();

        let no_year = WhaleOccurrence {
            year: None,
            ..occurrence("A", 2011, 1)
        };
        assert!(!matches(&no_year, &state));

        let no_month = WhaleOccurrence {
            month: None,
            ..occurrence("A", 2011, 1)
        };
        // Year passes the range, and the temporal predicate defaults to pass.
        assert!(matches(&no_month, &state));
    }

    #[test]
    fn species_filter_applies() {
        let state = ViewState {
            species: SpeciesFilter::One("A".into()),
            ..Default::default()
        };
        assert!(matches(&occurrence("A", 2011, 1), &state));
        assert!(!matches(&occurrence("B", 2011, 1), &state));
    }
}
