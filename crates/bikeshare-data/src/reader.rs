//! CSV loading for the city trip datasets.
//!
//! Reads one city's file into a [`TripTable`], deriving the calendar fields
//! from `Start Time` and recording which optional columns the header carries.

use std::path::{Path, PathBuf};

use bikeshare_core::models::{City, DatasetSchema, TripRecord, TripTable};
use bikeshare_core::timestamps::parse_timestamp;
use bikeshare_core::{BikeshareError, Result};
use serde::Deserialize;
use tracing::{debug, info};

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Columns every city dataset must carry.
pub const REQUIRED_COLUMNS: [&str; 5] =
    [START_TIME, START_STATION, END_STATION, TRIP_DURATION, USER_TYPE];

/// One CSV row as written in the source file. Numbers and timestamps stay as
/// text so that parse failures can report the offending line.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: Option<String>,
    #[serde(rename = "Gender")]
    gender: Option<String>,
    #[serde(rename = "Birth Year")]
    birth_year: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Path of `city`'s dataset inside `data_dir`.
pub fn city_path(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.file_name())
}

/// Load the dataset for `city` from `data_dir`.
pub fn load_city(data_dir: &Path, city: City) -> Result<TripTable> {
    let path = city_path(data_dir, city);
    info!("Loading {} trips from {}", city, path.display());
    load_table(&path)
}

/// Load a trip dataset from an arbitrary CSV file.
///
/// Fails when the file cannot be opened, a required column is missing, or a
/// row holds an unparseable `Start Time` or `Trip Duration`. Blank cells in
/// `User Type`, `Gender` and `Birth Year` load as `None`.
pub fn load_table(path: &Path) -> Result<TripTable> {
    let file = std::fs::File::open(path).map_err(|source| BikeshareError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .clone();

    let schema = detect_schema(path, &headers)?;
    debug!("Schema for {}: {:?}", path.display(), schema);

    let mut records: Vec<TripRecord> = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|source| csv_error(path, source))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let raw: RawTrip = row
            .deserialize(Some(&headers))
            .map_err(|source| csv_error(path, source))?;

        let mut record = map_to_trip_record(raw, line)?;
        if schema.has_row_id {
            record.row_id = row.get(0).and_then(|v| v.trim().parse().ok());
        }
        records.push(record);
    }

    info!("Loaded {} trips from {}", records.len(), path.display());
    Ok(TripTable::new(schema, records))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn csv_error(path: &Path, source: csv::Error) -> BikeshareError {
    BikeshareError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

/// Check required columns and record which optional ones are present.
fn detect_schema(path: &Path, headers: &csv::StringRecord) -> Result<DatasetSchema> {
    let has = |name: &str| headers.iter().any(|h| h == name);

    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|&c| !has(c)) {
        return Err(BikeshareError::MissingColumn {
            path: path.to_path_buf(),
            column: missing.to_string(),
        });
    }

    Ok(DatasetSchema {
        has_row_id: headers.get(0).is_some_and(|h| h.is_empty()),
        has_end_time: has(END_TIME),
        has_gender: has(GENDER),
        has_birth_year: has(BIRTH_YEAR),
    })
}

fn map_to_trip_record(raw: RawTrip, line: u64) -> Result<TripRecord> {
    let start_time =
        parse_timestamp(&raw.start_time).ok_or_else(|| BikeshareError::TimestampParse {
            line,
            value: raw.start_time.clone(),
        })?;

    let trip_duration = parse_number(&raw.trip_duration, TRIP_DURATION, line)?;

    let birth_year = match non_blank(raw.birth_year) {
        Some(v) => Some(parse_number(&v, BIRTH_YEAR, line)? as i32),
        None => None,
    };

    let mut record = TripRecord::new(
        start_time,
        raw.start_station,
        raw.end_station,
        trip_duration,
    );
    record.end_time = non_blank(raw.end_time).and_then(|s| parse_timestamp(&s));
    record.user_type = non_blank(raw.user_type);
    record.gender = non_blank(raw.gender);
    record.birth_year = birth_year;
    Ok(record)
}

fn parse_number(value: &str, column: &str, line: u64) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| BikeshareError::InvalidNumber {
            line,
            column: column.to_string(),
            value: value.to_string(),
        })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
