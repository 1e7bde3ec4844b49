use std::path::{Path, PathBuf};
use std::sync::Mutex;

use bikeshare_core::models::City;
use bikeshare_core::BikeshareError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a `--log-level` name to a tracing filter directive.
///
/// Unknown strings are passed through unchanged so that full `EnvFilter`
/// directives such as `"bikeshare_data=debug"` keep working.
pub fn level_directive(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_string(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Logs go to stderr so they never interleave with the report on stdout.
/// When `log_file` is set, the same events are appended to that file without
/// ANSI colouring.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level_directive(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

// ── Data-path discovery ────────────────────────────────────────────────────────

/// Candidate data directories checked when `--data-dir` is not given.
///
/// 1. the current directory
/// 2. `~/.bikeshare/data/`
fn candidate_dirs() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(".")];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".bikeshare").join("data"));
    }
    candidates
}

/// Returns `true` when `dir` holds at least one city dataset.
fn has_any_dataset(dir: &Path) -> bool {
    City::ALL.iter().any(|c| dir.join(c.file_name()).is_file())
}

/// Resolve the directory the city CSV files are read from.
///
/// An explicit directory must exist. Otherwise the first candidate holding a
/// dataset wins, falling back to the current directory so that the missing
/// file is reported with its full path when a city is loaded.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf, BikeshareError> {
    if let Some(dir) = explicit {
        if !dir.is_dir() {
            return Err(BikeshareError::DataPathNotFound(dir.to_path_buf()));
        }
        return Ok(dir.to_path_buf());
    }

    Ok(candidate_dirs()
        .into_iter()
        .find(|dir| has_any_dataset(dir))
        .unwrap_or_else(|| PathBuf::from(".")))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
