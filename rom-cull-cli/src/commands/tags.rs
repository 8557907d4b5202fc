use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_cull_lib::Settings;

use crate::cli_types::ScanArgs;
use crate::error::CliError;

/// Print every distinct tag seen across the collection with its frequency.
pub(crate) fn run_tags(root: Option<PathBuf>, scan: ScanArgs, quiet: bool) -> Result<(), CliError> {
    let settings = Settings::load()?;
    let root_path = settings.resolve_root(root);

    let (entries, collector) = super::load_collection(&root_path, &scan, &settings, quiet)?;

    if collector.is_empty() {
        log::info!(
            "{}",
            "No tags found.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }

    for (tag, count) in collector.iter() {
        log::info!(
            "{:>6}  {}",
            count.if_supports_color(Stdout, |t| t.dimmed()),
            tag
        );
    }
    log::info!("");
    log::info!(
        "{} distinct tags across {} files",
        collector.len().if_supports_color(Stdout, |t| t.bold()),
        entries.len(),
    );
    Ok(())
}
