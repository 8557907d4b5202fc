use std::fs;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_cull_lib::Settings;
use rom_cull_lib::scanner::{invalidate_cache, read_file_list};
use rom_cull_lib::util::format_bytes_approx;

use crate::error::CliError;

/// Show where the cached file list lives and what it holds.
pub(crate) fn run_cache_show(cache_file: Option<PathBuf>) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let path = super::cache_path(cache_file, &settings);

    if !path.exists() {
        log::info!(
            "  File list: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("The next clean or tags run will walk the collection.");
        return Ok(());
    }

    let paths = read_file_list(&path)?;
    let size = fs::metadata(&path)?.len();
    log::info!(
        "  File list: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        "(exists)".if_supports_color(Stdout, |t| t.green()),
    );
    log::info!("  Paths:     {}", paths.len());
    log::info!("  Size:      {}", format_bytes_approx(size));
    Ok(())
}

/// Remove the cached file list.
pub(crate) fn run_cache_clear(cache_file: Option<PathBuf>) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let path = super::cache_path(cache_file, &settings);

    if invalidate_cache(&path)? {
        log::info!(
            "{} {}",
            "Removed".if_supports_color(Stdout, |t| t.green()),
            path.display(),
        );
    } else {
        log::info!(
            "{}",
            "No cached file list to remove.".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
