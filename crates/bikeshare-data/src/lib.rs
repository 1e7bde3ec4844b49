//! Data layer for the bikeshare explorer.
//!
//! Loads city trip datasets from CSV, filters them by month and weekday,
//! computes the descriptive statistics reports and pages through raw rows.

pub mod aggregator;
pub mod filter;
pub mod pager;
pub mod reader;

pub use bikeshare_core as core;
