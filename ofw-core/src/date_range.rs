use serde::{Deserialize, Serialize};

/// Which pre-computed occurrence file is active. The narrow range matches
/// the ECCO currents coverage; the wide range adds a year on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[default]
    Y2011_2012,
    Y2010_2013,
}

impl DateRange {
    /// Inclusive year bounds for the range filter.
    pub fn year_bounds(&self) -> (i32, i32) {
        match self {
            DateRange::Y2011_2012 => (2011, 2012),
            DateRange::Y2010_2013 => (2010, 2013),
        }
    }

    /// True if `year` falls inside the inclusive bounds.
    pub fn contains_year(&self, year: i32) -> bool {
        let (lo, hi) = self.year_bounds();
        (lo..=hi).contains(&year)
    }

    /// Value used by the range `<select>` control.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Y2011_2012 => "2011_2012",
            DateRange::Y2010_2013 => "2010_2013",
        }
    }

    /// Parse a `<select>` value; anything unrecognized falls back to the default.
    pub fn parse(value: &str) -> Self {
        match value {
            "2010_2013" => DateRange::Y2010_2013,
            _ => DateRange::Y2011_2012,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DateRange;

    #[test]
    fn year_bounds_are_inclusive() {
        assert!(DateRange::Y2011_2012.contains_year(2011));
        assert!(DateRange::Y2011_2012.contains_year(2012));
        assert!(!DateRange::Y2011_2012.contains_year(2010));
        assert!(DateRange::Y2010_2013.contains_year(2010));
        assert!(DateRange::Y2010_2013.contains_year(2013));
        assert!(!DateRange::Y2010_2013.contains_year(2014));
    }

    #[test]
    fn parse_round_trips() {
        assert_eq!(DateRange::parse("2010_2013"), DateRange::Y2010_2013);
        assert_eq!(DateRange::parse("2011_2012"), DateRange::Y2011_2012);
        assert_eq!(DateRange::parse("garbage"), DateRange::Y2011_2012);
    }
}
