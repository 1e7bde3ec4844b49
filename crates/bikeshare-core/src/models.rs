use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month, NaiveDateTime, Timelike, Weekday};

use crate::error::BikeshareError;

/// Full weekday names indexed by days-from-Monday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// ── City ──────────────────────────────────────────────────────────────────────

/// One of the three cities with a bundled trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// CSV file name of this city's dataset inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        f.write_str(label)
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" | "new_york_city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            _ => Err(BikeshareError::InvalidSelection {
                kind: "city",
                value: s.to_string(),
            }),
        }
    }
}

// ── Filters ───────────────────────────────────────────────────────────────────

/// Month selection: a calendar month number (1–12) or no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Month(u32),
}

impl MonthFilter {
    /// Returns `true` when a record in `month` passes this filter.
    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(m) => *m == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    /// Accepts `"all"` or an English month name (full or three-letter),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        trimmed
            .parse::<Month>()
            .map(|m| MonthFilter::Month(m.number_from_month()))
            .map_err(|_| BikeshareError::InvalidSelection {
                kind: "month",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => f.write_str(month_name(*m).unwrap_or("unknown")),
        }
    }
}

/// Weekday selection: days from Monday (0–6) or no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayFilter {
    #[default]
    All,
    Weekday(u32),
}

impl WeekdayFilter {
    /// Returns `true` when a record on `weekday` passes this filter.
    pub fn matches(&self, weekday: u32) -> bool {
        match self {
            WeekdayFilter::All => true,
            WeekdayFilter::Weekday(d) => *d == weekday,
        }
    }
}

impl FromStr for WeekdayFilter {
    type Err = BikeshareError;

    /// Accepts `"all"` or an English weekday name (full or three-letter),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(WeekdayFilter::All);
        }
        trimmed
            .parse::<Weekday>()
            .map(|d| WeekdayFilter::Weekday(d.num_days_from_monday()))
            .map_err(|_| BikeshareError::InvalidSelection {
                kind: "weekday",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for WeekdayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekdayFilter::All => f.write_str("all"),
            WeekdayFilter::Weekday(d) => f.write_str(weekday_name(*d).unwrap_or("unknown")),
        }
    }
}

/// A validated city plus month/weekday selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub city: City,
    pub month: MonthFilter,
    pub weekday: WeekdayFilter,
}

/// Calendar name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
}

/// Weekday name for a days-from-Monday index.
pub fn weekday_name(weekday: u32) -> Option<&'static str> {
    WEEKDAY_NAMES.get(weekday as usize).copied()
}

// ── Trip records ──────────────────────────────────────────────────────────────

/// Calendar fields derived from a trip's start timestamp at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFields {
    /// Month of year, 1–12.
    pub month: u32,
    /// Days from Monday, 0–6.
    pub weekday: u32,
    /// Hour of day, 0–23.
    pub hour: u32,
}

impl From<&NaiveDateTime> for TimeFields {
    fn from(ts: &NaiveDateTime) -> Self {
        Self {
            month: ts.month(),
            weekday: ts.weekday().num_days_from_monday(),
            hour: ts.hour(),
        }
    }
}

/// One bikeshare ride read from a city dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    /// Leading unnamed id column, when the file carries one.
    pub row_id: Option<u64>,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// Trip length in seconds.
    pub trip_duration: f64,
    /// Empty when the source cell is blank.
    pub start_station: String,
    /// Empty when the source cell is blank.
    pub end_station: String,
    /// `None` for a blank cell.
    pub user_type: Option<String>,
    /// `None` for a blank cell or when the dataset has no gender column.
    pub gender: Option<String>,
    /// `None` for a blank cell or when the dataset has no birth year column.
    pub birth_year: Option<i32>,
    /// Derived from `start_time`.
    pub time: TimeFields,
}

impl TripRecord {
    /// Build a record with derived time fields and all optional data unset.
    pub fn new(
        start_time: NaiveDateTime,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        trip_duration: f64,
    ) -> Self {
        Self {
            row_id: None,
            time: TimeFields::from(&start_time),
            start_time,
            end_time: None,
            trip_duration,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: None,
            gender: None,
            birth_year: None,
        }
    }

    /// Composite `"{start} to {end}"` key used for trip popularity.
    /// `None` when either station cell is blank.
    pub fn trip_key(&self) -> Option<String> {
        if is_blank(&self.start_station) || is_blank(&self.end_station) {
            return None;
        }
        Some(format!("{} to {}", self.start_station, self.end_station))
    }
}

/// True for an empty or whitespace-only cell.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Which optional columns a loaded dataset carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatasetSchema {
    pub has_row_id: bool,
    pub has_end_time: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// An ordered, immutable set of trip records sharing one schema.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTable {
    schema: DatasetSchema,
    records: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(schema: DatasetSchema, records: Vec<TripRecord>) -> Self {
        Self { schema, records }
    }

    pub fn schema(&self) -> DatasetSchema {
        self.schema
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
