//! Month-index arithmetic shared by the timeline slider, the currents
//! animation, and the seasonality chart.
//!
//! Months are encoded as a single integer relative to January 2011
//! (2011-01 = 0, 2011-12 = 11, 2012-01 = 12, ...) so that positions in
//! different datasets can be compared directly.

/// Epoch year for the month index (index 0 = January of this year).
pub const EPOCH_YEAR: i32 = 2011;

/// Number of animation steps covered by the ECCO currents data (2011-2012).
pub const MONTH_COUNT: usize = 24;

/// Short month labels for chart axes.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Lowercase month names as used by the per-species aggregate JSON keys.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Encode (year, month) as an index relative to the epoch.
/// `month` is 1-based (January = 1).
pub fn month_index(year: i32, month: u32) -> i32 {
    (year - EPOCH_YEAR) * 12 + (month as i32 - 1)
}

/// Format a month index as "YYYY-MM" (zero-padded).
pub fn format_month(idx: i32) -> String {
    let year = EPOCH_YEAR + idx.div_euclid(12);
    let month = idx.rem_euclid(12) + 1;
    format!("{year}-{month:02}")
}

/// "YYYY-MM" time string for a subset-API request in the epoch year.
/// `month0` is 0-based (January = 0).
pub fn subset_time_string(month0: usize) -> String {
    format!("{EPOCH_YEAR}-{:02}", month0 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_monotonic_within_a_year() {
        for m in 1..12 {
            assert_eq!(month_index(2011, m + 1), month_index(2011, m) + 1);
        }
    }

    #[test]
    fn index_rolls_over_december_to_january() {
        assert_eq!(month_index(2011, 12) + 1, month_index(2012, 1));
        assert_eq!(month_index(2012, 1), 12);
    }

    #[test]
    fn index_before_epoch_is_negative() {
        assert_eq!(month_index(2010, 12), -1);
    }

    #[test]
    fn format_month_pads_and_carries() {
        assert_eq!(format_month(0), "2011-01");
        assert_eq!(format_month(11), "2011-12");
        assert_eq!(format_month(12), "2012-01");
        assert_eq!(format_month(23), "2012-12");
    }

    #[test]
    fn subset_time_string_is_one_based() {
        assert_eq!(subset_time_string(0), "2011-01");
        assert_eq!(subset_time_string(11), "2011-12");
    }
}
