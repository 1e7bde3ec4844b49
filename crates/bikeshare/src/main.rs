mod bootstrap;
mod shell;

use anyhow::Result;
use bikeshare_core::settings::Settings;
use shell::{Preset, Shell};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Bikeshare explorer v{} starting", env!("CARGO_PKG_VERSION"));

    let data_dir = bootstrap::resolve_data_dir(settings.data_dir.as_deref())?;
    tracing::info!("Reading city datasets from {}", data_dir.display());

    let preset = Preset {
        city: settings.city,
        month: settings.month,
        weekday: settings.day,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), data_dir);

    if let Err(e) = shell.run(preset) {
        tracing::error!("Session aborted: {:#}", e);
        return Err(e);
    }

    tracing::info!("Session finished");
    Ok(())
}
