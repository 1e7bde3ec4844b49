use clap::Parser;
use std::path::PathBuf;

use crate::models::{City, MonthFilter, WeekdayFilter};

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Explore US bikeshare trip data interactively
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare",
    about = "Explore US bikeshare trip data interactively",
    version
)]
pub struct Settings {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// City to analyse in the first session (skips the city prompt)
    #[arg(long)]
    pub city: Option<City>,

    /// Month filter for the first session, e.g. "march" or "all"
    #[arg(long)]
    pub month: Option<MonthFilter>,

    /// Weekday filter for the first session, e.g. "friday" or "all"
    #[arg(long)]
    pub day: Option<WeekdayFilter>,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply `--debug`.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list,
    /// enabling unit-testing without spawning subprocesses.
    pub fn try_load_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Settings::try_parse_from(args).map(Self::resolve)
    }

    fn resolve(mut settings: Settings) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::try_load_from(["bikeshare"]).unwrap();
        assert!(s.data_dir.is_none());
        assert!(s.city.is_none());
        assert!(s.month.is_none());
        assert!(s.day.is_none());
        assert_eq!(s.log_level, "WARNING");
        assert!(!s.debug);
    }

    #[test]
    fn test_preselected_filters() {
        let s = Settings::try_load_from([
            "bikeshare",
            "--city",
            "new york city",
            "--month",
            "March",
            "--day",
            "all",
        ])
        .unwrap();
        assert_eq!(s.city, Some(City::NewYorkCity));
        assert_eq!(s.month, Some(MonthFilter::Month(3)));
        assert_eq!(s.day, Some(WeekdayFilter::All));
    }

    #[test]
    fn test_invalid_city_rejected() {
        assert!(Settings::try_load_from(["bikeshare", "--city", "boston"]).is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(Settings::try_load_from(["bikeshare", "--log-level", "LOUD"]).is_err());
    }

    #[test]
    fn test_debug_overrides_log_level() {
        let s = Settings::try_load_from(["bikeshare", "--log-level", "ERROR", "--debug"]).unwrap();
        assert_eq!(s.log_level, "DEBUG");
    }

    #[test]
    fn test_data_dir_and_log_file() {
        let s = Settings::try_load_from([
            "bikeshare",
            "--data-dir",
            "/srv/bikeshare",
            "--log-file",
            "/tmp/bikeshare.log",
        ])
        .unwrap();
        assert_eq!(s.data_dir, Some(PathBuf::from("/srv/bikeshare")));
        assert_eq!(s.log_file, Some(PathBuf::from("/tmp/bikeshare.log")));
    }
}
