use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use rom_cull_lib::util::{bytes_to_mb, format_mb, trim_list};
use rom_cull_lib::{
    CullPlan, CullSummary, Decision, RegionTable, Settings, TitleGroup,
    execute_removals_and_invalidate,
};

use crate::cli_types::ScanArgs;
use crate::error::CliError;
use crate::spinner::Spinner;

pub(crate) fn run_clean(
    root: Option<PathBuf>,
    regions: Option<Vec<String>>,
    delete: bool,
    scan: ScanArgs,
    quiet: bool,
) -> Result<(), CliError> {
    let settings = Settings::load()?;

    // Validate preferences before touching the collection
    let regions = trim_list(&regions.unwrap_or_else(|| settings.cull.regions.clone()));
    let table = RegionTable::new(&regions)?;
    for (region, rank) in table.ordered() {
        log::debug!("  region {:<4} rank {rank}", region.code());
    }

    let root_path = settings.resolve_root(root);
    log::info!(
        "Scanning ROMs in: {}",
        root_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!(
        "{}",
        format!("Region preference: {}", regions.join(", "))
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    if !delete {
        log::info!(
            "{}",
            "Dry run: no files will be deleted".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    let (entries, _) = super::load_collection(&root_path, &scan, &settings, quiet)?;
    let plan = CullPlan::build(entries, &table);

    print_plan(&plan);
    print_summary(&plan.summary());

    if !delete {
        return Ok(());
    }

    log::info!("");
    log::info!("{}", "Deleting...".if_supports_color(Stdout, |t| t.bold()));
    // Dropped even with --no-cache: an older snapshot would list deleted files
    let cache = super::cache_path(scan.cache_file.clone(), &settings);
    let spinner = Spinner::new(quiet);
    let result = execute_removals_and_invalidate(&plan, &cache, &|p| spinner.update(p));
    spinner.clear();
    let deleted = result?;

    log::info!(
        "{} {} files ({})",
        "Deleted".if_supports_color(Stdout, |t| t.green()),
        deleted.deleted,
        format_mb(deleted.bytes_freed),
    );
    Ok(())
}

fn print_plan(plan: &CullPlan) {
    for group in plan.duplicate_groups() {
        print_group(group);
    }
}

fn print_group(group: &TitleGroup) {
    log::info!(
        "{}",
        group
            .title_key
            .if_supports_color(Stdout, |t| t.black().on_bright_white().to_string()),
    );
    for candidate in &group.candidates {
        let action = if candidate.decision.is_kept() {
            "OK".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "KO".if_supports_color(Stdout, |t| t.red()).to_string()
        };
        let note = if candidate.decision == Decision::KeepSibling {
            format!(" {}", "(disc set)".if_supports_color(Stdout, |t| t.dimmed()))
        } else {
            String::new()
        };
        log::info!(
            "\t:{}:{:.2}MB:{}{}",
            action,
            bytes_to_mb(candidate.entry.size_bytes()),
            candidate.entry.file_name(),
            note,
        );
        if candidate.decision == Decision::Remove {
            log::debug!("\t  {}", candidate.entry.path().display());
        }
    }
}

fn print_summary(summary: &CullSummary) {
    log::info!("");
    log::info!(
        "total unique titles: {} ({})",
        summary.unique_titles,
        format_mb(summary.unique_bytes),
    );
    log::info!(
        "total roms         : {} ({})",
        summary.total_files,
        format_mb(summary.total_bytes),
    );
    if summary.kept_siblings > 0 {
        log::info!(
            "{}",
            format!("extra discs kept   : {}", summary.kept_siblings)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!(
        "marked for removal : {} ({})",
        summary
            .removable_files
            .if_supports_color(Stdout, |t| t.red()),
        format_mb(summary.removable_bytes),
    );
}
