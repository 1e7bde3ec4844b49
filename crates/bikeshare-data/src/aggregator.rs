//! Descriptive statistics over a filtered trip table.
//!
//! Four independent reports: popular travel times, popular stations, trip
//! durations and rider demographics. Every report is well defined on an
//! empty table; undefined values come back as `None`.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use bikeshare_core::models::{is_blank, TripTable};

// ── Result types ──────────────────────────────────────────────────────────────

/// The most frequent value of a column and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode<T> {
    pub value: T,
    pub count: usize,
}

/// Number of records holding one distinct value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Most frequent month (1–12), weekday (0 = Monday) and start hour.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeStats {
    pub most_common_month: Option<Mode<u32>>,
    pub most_common_weekday: Option<Mode<u32>>,
    pub most_common_hour: Option<Mode<u32>>,
}

/// Most used start station, end station and start/end combination.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationStats {
    pub most_common_start: Option<Mode<String>>,
    pub most_common_end: Option<Mode<String>>,
    /// Keyed as `"{start} to {end}"`.
    pub most_common_trip: Option<Mode<String>>,
}

/// Total and mean trip length in seconds.
///
/// The total is accumulated as `f64`: durations are fractional in some
/// datasets and the sum of a full city stays far below `f64`'s exact-integer
/// range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DurationStats {
    pub trip_count: usize,
    pub total_seconds: f64,
    /// `None` when there are no trips.
    pub mean_seconds: Option<f64>,
}

/// Earliest, latest and most common rider birth year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub latest: i32,
    pub most_common: Mode<i32>,
}

/// Birth year outcome, distinguishing a dataset without the column from a
/// selection that simply has no values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthYearReport {
    NotInDataset,
    NoData,
    Stats(BirthYearStats),
}

/// Rider breakdown by user type, gender and birth year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    /// Ordered by descending count, ties in first-seen order.
    pub user_types: Vec<ValueCount>,
    /// `None` when the dataset has no gender column.
    pub genders: Option<Vec<ValueCount>>,
    pub birth_years: BirthYearReport,
}

// ── TripAggregator ────────────────────────────────────────────────────────────

/// Stateless helper computing the four trip reports.
pub struct TripAggregator;

impl TripAggregator {
    /// Most common month, weekday and start hour.
    pub fn time_stats(table: &TripTable) -> TimeStats {
        TimeStats {
            most_common_month: mode(table.iter().map(|r| r.time.month)),
            most_common_weekday: mode(table.iter().map(|r| r.time.weekday)),
            most_common_hour: mode(table.iter().map(|r| r.time.hour)),
        }
    }

    /// Most used start and end stations and the most frequent trip.
    /// Blank station cells are skipped.
    pub fn station_stats(table: &TripTable) -> StationStats {
        let trip_keys: Vec<String> = table.iter().filter_map(|r| r.trip_key()).collect();
        let starts = table.iter().map(|r| r.start_station.as_str());
        let ends = table.iter().map(|r| r.end_station.as_str());

        StationStats {
            most_common_start: mode_owned(starts.filter(|s| !is_blank(s))),
            most_common_end: mode_owned(ends.filter(|s| !is_blank(s))),
            most_common_trip: mode_owned(trip_keys.iter().map(String::as_str)),
        }
    }

    /// Sum and mean of `Trip Duration`.
    pub fn duration_stats(table: &TripTable) -> DurationStats {
        let trip_count = table.len();
        let total_seconds: f64 = table.iter().map(|r| r.trip_duration).sum();
        let mean_seconds = if trip_count == 0 {
            None
        } else {
            Some(total_seconds / trip_count as f64)
        };

        DurationStats {
            trip_count,
            total_seconds,
            mean_seconds,
        }
    }

    /// User type counts plus gender and birth year when the dataset has them.
    pub fn user_stats(table: &TripTable) -> UserStats {
        let schema = table.schema();

        let user_types = value_counts(table.iter().filter_map(|r| r.user_type.as_deref()));

        let genders = schema
            .has_gender
            .then(|| value_counts(table.iter().filter_map(|r| r.gender.as_deref())));

        let birth_years = if schema.has_birth_year {
            birth_year_stats(table)
        } else {
            BirthYearReport::NotInDataset
        };

        UserStats {
            user_types,
            genders,
            birth_years,
        }
    }
}

// ── Private ───────────────────────────────────────────────────────────────────

fn birth_year_stats(table: &TripTable) -> BirthYearReport {
    let years: Vec<i32> = table.iter().filter_map(|r| r.birth_year).collect();

    let (Some(&earliest), Some(&latest), Some(most_common)) = (
        years.iter().min(),
        years.iter().max(),
        mode(years.iter().copied()),
    ) else {
        return BirthYearReport::NoData;
    };

    BirthYearReport::Stats(BirthYearStats {
        earliest,
        latest,
        most_common,
    })
}

/// Most frequent value; ties resolve to the smallest value.
///
/// `BTreeMap` iterates in ascending key order and only a strictly larger
/// count replaces the current best, so the first (smallest) tied key wins.
fn mode<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<Mode<T>> {
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut best: Option<Mode<T>> = None;
    for (value, count) in counts {
        if best.as_ref().map_or(true, |b| count > b.count) {
            best = Some(Mode { value, count });
        }
    }
    best
}

fn mode_owned<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<Mode<String>> {
    mode(values).map(|m| Mode {
        value: m.value.to_string(),
        count: m.count,
    })
}

/// Count distinct values, ordered by descending count with ties kept in
/// first-seen order.
fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<ValueCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<ValueCount> = Vec::new();

    for v in values {
        match index.get(v) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(v, counts.len());
                counts.push(ValueCount {
                    value: v.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by_key(|c| Reverse(c.count));
    counts
}

// ── Tests ─────────────────────────────────────────────────────────────────────
