//! Month / weekday filtering over a loaded [`TripTable`].

use bikeshare_core::models::{FilterSpec, MonthFilter, TripTable, WeekdayFilter};
use tracing::debug;

/// Keep the records whose derived month and weekday pass both filters.
///
/// Source order is preserved and `table` is left untouched. With both
/// filters set to `All` the result equals the input. Out-of-range values such
/// as `MonthFilter::Month(13)` match no records.
pub fn filter(table: &TripTable, month: MonthFilter, weekday: WeekdayFilter) -> TripTable {
    if month == MonthFilter::All && weekday == WeekdayFilter::All {
        return table.clone();
    }

    let records = table
        .iter()
        .filter(|r| month.matches(r.time.month) && weekday.matches(r.time.weekday))
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        "Filter month={} weekday={}: kept {} of {} trips",
        month,
        weekday,
        records.len(),
        table.len()
    );

    TripTable::new(table.schema(), records)
}

/// Apply the month and weekday of `spec` to `table`.
pub fn apply(table: &TripTable, spec: &FilterSpec) -> TripTable {
    filter(table, spec.month, spec.weekday)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::{City, DatasetSchema, TripRecord};
    use chrono::NaiveDateTime;

    fn make_record(ts: &str, station: &str) -> TripRecord {
        let start = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap();
        TripRecord::new(start, station, "End", 100.0)
    }

    /// Jan 2 2017 is a Monday; Jan 6 a Friday; Mar 3 a Friday; Mar 6 a Monday.
    fn sample_table() -> TripTable {
        TripTable::new(
            DatasetSchema::default(),
            vec![
                make_record("2017-01-02 08:00:00", "a"),
                make_record("2017-01-06 09:00:00", "b"),
                make_record("2017-03-03 10:00:00", "c"),
                make_record("2017-03-06 11:00:00", "d"),
                make_record("2017-01-02 12:00:00", "e"),
            ],
        )
    }

    fn stations(table: &TripTable) -> Vec<&str> {
        table.iter().map(|r| r.start_station.as_str()).collect()
    }

    #[test]
    fn test_all_all_is_identity() {
        let table = sample_table();
        let out = filter(&table, MonthFilter::All, WeekdayFilter::All);
        assert_eq!(out, table);
    }

    #[test]
    fn test_month_only() {
        let table = sample_table();
        let out = filter(&table, MonthFilter::Month(1), WeekdayFilter::All);
        assert_eq!(stations(&out), vec!["a", "b", "e"]);
        assert!(out.iter().all(|r| r.time.month == 1));
    }

    #[test]
    fn test_weekday_only() {
        let table = sample_table();
        let out = filter(&table, MonthFilter::All, WeekdayFilter::Weekday(4));
        assert_eq!(stations(&out), vec!["b", "c"]);
        assert!(out.iter().all(|r| r.time.weekday == 4));
    }

    #[test]
    fn test_month_and_weekday_conjunction() {
        let table = sample_table();
        let out = filter(&table, MonthFilter::Month(3), WeekdayFilter::Weekday(0));
        assert_eq!(stations(&out), vec!["d"]);
    }

    #[test]
    fn test_no_matches_yields_empty_table() {
        let table = sample_table();
        let out = filter(&table, MonthFilter::Month(2), WeekdayFilter::All);
        assert!(out.is_empty());
        assert_eq!(out.schema(), table.schema());
    }

    #[test]
    fn test_out_of_range_values_match_nothing() {
        let table = sample_table();
        assert!(filter(&table, MonthFilter::Month(13), WeekdayFilter::All).is_empty());
        assert!(filter(&table, MonthFilter::All, WeekdayFilter::Weekday(7)).is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let table = sample_table();
        let before = table.clone();
        let _ = filter(&table, MonthFilter::Month(1), WeekdayFilter::Weekday(0));
        assert_eq!(table, before);
    }

    #[test]
    fn test_apply_uses_spec() {
        let table = sample_table();
        let spec = FilterSpec {
            city: City::Chicago,
            month: MonthFilter::Month(1),
            weekday: WeekdayFilter::Weekday(0),
        };
        assert_eq!(stations(&apply(&table, &spec)), vec!["a", "e"]);
    }
}
