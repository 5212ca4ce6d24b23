//! Monthly presence counts for the seasonality chart.

use serde::Serialize;

use crate::month_index::{format_month, month_index};

/// One month of total sighting counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalityPoint {
    /// "YYYY-MM" axis label.
    pub label: String,
    pub month_index: i32,
    pub count: u32,
}

/// Parse the `year,month,count` CSV into points sorted by month index.
/// Rows that fail to parse are skipped.
pub fn parse_monthly_counts(csv_data: &str) -> Vec<SeasonalityPoint> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let mut points = Vec::new();
    for record in rdr.records().flatten() {
        let year = record.get(0).and_then(|s| s.trim().parse::<i32>().ok());
        let month = record.get(1).and_then(|s| s.trim().parse::<u32>().ok());
        let count = record.get(2).and_then(|s| s.trim().parse::<u32>().ok());
        if let (Some(year), Some(month), Some(count)) = (year, month, count) {
            let idx = month_index(year, month);
            points.push(SeasonalityPoint {
                label: format_month(idx),
                month_index: idx,
                count,
            });
        }
    }
    points.sort_by_key(|p| p.month_index);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "year,month,count\n2011,2,14\n2011,1,9\n2012,1,22\nbad,row,here\n";

    #[test]
    fn parse_sorts_by_month_index_and_skips_bad_rows() {
        let points = parse_monthly_counts(CSV);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].month_index, 0);
        assert_eq!(points[0].label, "2011-01");
        assert_eq!(points[0].count, 9);
        assert_eq!(points[1].month_index, 1);
        assert_eq!(points[2].month_index, 12);
        assert_eq!(points[2].label, "2012-01");
    }

    #[test]
    fn empty_input_yields_no_points() {
        assert!(parse_monthly_counts("").is_empty());
        assert!(parse_monthly_counts("year,month,count\n").is_empty());
    }
}
