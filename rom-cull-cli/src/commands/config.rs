use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_cull_lib::Settings;
use rom_cull_lib::settings::settings_path;

use crate::error::CliError;

/// Show the settings file location and the effective values.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let settings = Settings::load()?;

    log::info!(
        "{}",
        "rom-cull Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    for line in settings.to_toml_string()?.lines() {
        log::info!("  {line}");
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
