//! Console presentation layer for the bikeshare explorer.
//!
//! Renders the statistics reports as plain text and raw trip rows as
//! bordered tables built with [`comfy_table`].

pub mod report;
pub mod table_view;

pub use bikeshare_core as core;
