pub(crate) mod cache;
pub(crate) mod clean;
pub(crate) mod config;
pub(crate) mod tags;

use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_cull_lib::util::trim_list;
use rom_cull_lib::{Entry, FileList, ListSource, Settings, TagCollector, load_entries};

use crate::cli_types::ScanArgs;
use crate::error::CliError;
use crate::spinner::Spinner;

/// Resolve the cached file-list location: CLI flag, then settings.
pub(crate) fn cache_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    cli_override.unwrap_or_else(|| settings.cull.cache_file.clone())
}

/// Build the file list and parse every entry of the collection.
///
/// Any malformed filename or unreadable file aborts before a single cull
/// decision is made.
pub(crate) fn load_collection(
    root: &Path,
    scan: &ScanArgs,
    settings: &Settings,
    quiet: bool,
) -> Result<(Vec<Entry>, TagCollector), CliError> {
    let ignore_dirs = trim_list(
        &scan
            .ignore_dirs
            .clone()
            .unwrap_or_else(|| settings.cull.ignore_dirs.clone()),
    );

    let spinner = Spinner::new(quiet);
    let list = if scan.no_cache {
        FileList::scan(root, &ignore_dirs, &|p| spinner.update(p))
    } else {
        let cache = cache_path(scan.cache_file.clone(), settings);
        FileList::load_or_scan(root, &ignore_dirs, &cache, &|p| spinner.update(p))
    };
    spinner.clear();
    let list = list?;

    match list.source() {
        ListSource::Cache => log::info!(
            "{}",
            format!("Using cached file list ({} files)", list.len())
                .if_supports_color(Stdout, |t| t.dimmed()),
        ),
        ListSource::Walk => log::debug!("Walked {} files under {}", list.len(), root.display()),
    }

    let spinner = Spinner::new(quiet);
    let mut collector = TagCollector::new();
    let entries = load_entries(list.files(), &mut collector, &|p| spinner.update(p));
    spinner.clear();
    let entries = entries?;

    Ok((entries, collector))
}
