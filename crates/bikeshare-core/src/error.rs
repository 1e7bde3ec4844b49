use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the bikeshare explorer.
#[derive(Error, Debug)]
pub enum BikeshareError {
    /// A dataset file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be decoded.
    #[error("Failed to parse CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the dataset header.
    #[error("Missing required column \"{column}\" in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A timestamp string did not match any recognised format.
    #[error("Invalid timestamp on line {line}: {value}")]
    TimestampParse { line: u64, value: String },

    /// A numeric column held a value that is not a number.
    #[error("Invalid number in column \"{column}\" on line {line}: {value}")]
    InvalidNumber {
        line: u64,
        column: String,
        value: String,
    },

    /// The data directory does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// A city, month or weekday selection was not recognised.
    #[error("Invalid {kind}: {value}")]
    InvalidSelection { kind: &'static str, value: String },
}

/// Convenience alias used throughout the bikeshare crates.
pub type Result<T> = std::result::Result<T, BikeshareError>;
