//! Fixed-size windows over the raw rows of a trip table.

use bikeshare_core::models::{TripRecord, TripTable};

/// Rows shown per "show more" request.
pub const PAGE_SIZE: usize = 5;

/// One window of rows and whether any rows follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// Index of the first row in `rows`.
    pub start: usize,
    pub rows: &'a [TripRecord],
    pub has_more: bool,
}

impl Page<'_> {
    /// Cursor for the window after this one.
    pub fn next_start(&self) -> usize {
        self.start + PAGE_SIZE
    }
}

/// Return up to [`PAGE_SIZE`] rows of `table` beginning at `start`.
///
/// The final window runs to the last row inclusive, so concatenating every
/// page reproduces the table. A `start` past the end yields an empty page.
pub fn page(table: &TripTable, start: usize) -> Page<'_> {
    let records = table.records();
    let len = records.len();

    if start >= len {
        return Page {
            start,
            rows: &[],
            has_more: false,
        };
    }

    let end = start.saturating_add(PAGE_SIZE).min(len);
    Page {
        start,
        rows: &records[start..end],
        has_more: end < len,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::models::DatasetSchema;
    use chrono::NaiveDate;

    fn table_of(n: usize) -> TripTable {
        let start = NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let records = (0..n)
            .map(|i| TripRecord::new(start, format!("S{}", i), "E", i as f64))
            .collect();
        TripTable::new(DatasetSchema::default(), records)
    }

    fn names(page: &Page<'_>) -> Vec<String> {
        page.rows.iter().map(|r| r.start_station.clone()).collect()
    }

    #[test]
    fn test_seven_rows_two_pages() {
        let table = table_of(7);

        let first = page(&table, 0);
        assert_eq!(first.rows.len(), 5);
        assert!(first.has_more);

        let second = page(&table, first.next_start());
        assert_eq!(names(&second), vec!["S5", "S6"]);
        assert!(!second.has_more);
    }

    #[test]
    fn test_exact_multiple_has_no_more_on_last_page() {
        let table = table_of(10);
        assert!(page(&table, 0).has_more);
        let last = page(&table, 5);
        assert_eq!(last.rows.len(), 5);
        assert!(!last.has_more);
    }

    #[test]
    fn test_start_past_end_is_empty() {
        let table = table_of(3);
        let p = page(&table, 3);
        assert!(p.rows.is_empty());
        assert!(!p.has_more);
        assert!(page(&table, 100).rows.is_empty());
    }

    #[test]
    fn test_empty_table() {
        let table = table_of(0);
        let p = page(&table, 0);
        assert!(p.rows.is_empty());
        assert!(!p.has_more);
    }

    #[test]
    fn test_pages_reconstruct_table() {
        for n in [0, 1, 4, 5, 6, 12, 23] {
            let table = table_of(n);
            let mut collected: Vec<TripRecord> = Vec::new();
            let mut cursor = 0;
            loop {
                let p = page(&table, cursor);
                collected.extend_from_slice(p.rows);
                if !p.has_more {
                    break;
                }
                cursor = p.next_start();
            }
            assert_eq!(collected.as_slice(), table.records(), "n = {}", n);
        }
    }
}
