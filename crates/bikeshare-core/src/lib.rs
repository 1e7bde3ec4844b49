//! Core types for the bikeshare explorer.
//!
//! Holds the trip data model, filter selections, CLI settings, timestamp
//! parsing, console number formatting and the shared error type.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod timestamps;

pub use error::{BikeshareError, Result};
