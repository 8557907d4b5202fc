//! Deleting the files a cull plan marked for removal.

use std::fs;
use std::path::Path;

use crate::cull::CullPlan;
use crate::error::CullError;
use crate::progress::CullProgress;
use crate::scanner::invalidate_cache;
use crate::util::format_mb;

/// Outcome of a deleting run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteSummary {
    pub deleted: usize,
    pub bytes_freed: u64,
    /// Whether a cached file list was removed afterwards
    pub cache_invalidated: bool,
}

/// Delete every file the plan marked for removal, in report order.
///
/// The first failure aborts the run: files deleted before it stay deleted,
/// nothing after it is touched.
pub fn execute_removals(
    plan: &CullPlan,
    progress: &dyn Fn(CullProgress),
) -> Result<DeleteSummary, CullError> {
    let mut summary = DeleteSummary::default();

    for entry in plan.removals() {
        progress(CullProgress::deleting(entry.file_name()));
        fs::remove_file(entry.path()).map_err(|e| CullError::file_access(entry.path(), e))?;
        log::debug!(
            "Deleted {} ({})",
            entry.path().display(),
            format_mb(entry.size_bytes())
        );
        summary.deleted += 1;
        summary.bytes_freed += entry.size_bytes();
    }

    progress(CullProgress::Done);
    Ok(summary)
}

/// Run [`execute_removals`] and then remove the cached file list at
/// `cache_path`.
///
/// The snapshot is removed even when a deletion fails partway, since any
/// deletion makes it stale. A deletion error takes precedence over a cache
/// error.
pub fn execute_removals_and_invalidate(
    plan: &CullPlan,
    cache_path: &Path,
    progress: &dyn Fn(CullProgress),
) -> Result<DeleteSummary, CullError> {
    let result = execute_removals(plan, progress);
    let invalidated = invalidate_cache(cache_path);
    if invalidated.as_ref().is_ok_and(|removed| *removed) {
        log::debug!("Removed cached file list {}", cache_path.display());
    }

    let mut summary = result?;
    summary.cache_invalidated = invalidated?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crate::progress::no_progress;
    use rom_cull_core::RegionTable;

    fn write_rom(dir: &std::path::Path, name: &str, size: usize) -> Entry {
        let path = dir.join(name);
        fs::write(&path, vec![0u8; size]).unwrap();
        Entry::from_path(path).unwrap()
    }

    #[test]
    fn test_execute_removes_only_losers() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![
            write_rom(dir.path(), "Game (USA) (Disc 1).bin", 10),
            write_rom(dir.path(), "Game (USA) (Disc 2).bin", 10),
            write_rom(dir.path(), "Game (Japan) (Disc 1).bin", 7),
            write_rom(dir.path(), "Other (Europe).bin", 5),
        ];
        let table = RegionTable::new(&["U", "E"]).unwrap();
        let plan = CullPlan::build(entries, &table);

        let summary = execute_removals(&plan, &no_progress).unwrap();
        assert_eq!(summary.deleted, 1);
        assert_eq!(summary.bytes_freed, 7);
        assert!(dir.path().join("Game (USA) (Disc 1).bin").exists());
        assert!(dir.path().join("Game (USA) (Disc 2).bin").exists());
        assert!(dir.path().join("Other (Europe).bin").exists());
        assert!(!dir.path().join("Game (Japan) (Disc 1).bin").exists());
    }

    #[test]
    fn test_execute_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let keep = write_rom(dir.path(), "Game (USA).bin", 1);
        let gone = write_rom(dir.path(), "Game (Japan).bin", 1);
        fs::remove_file(gone.path()).unwrap();

        let table = RegionTable::new(&["U"]).unwrap();
        let plan = CullPlan::build(vec![keep, gone], &table);

        let err = execute_removals(&plan, &no_progress).unwrap_err();
        assert!(matches!(err, CullError::FileAccess { .. }));
    }

    #[test]
    fn test_cache_is_dropped_after_successful_delete() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("roms.txt");
        let keep = write_rom(dir.path(), "Game (USA).bin", 1);
        let lose = write_rom(dir.path(), "Game (Japan).bin", 1);
        fs::write(&cache, "listed\n").unwrap();

        let table = RegionTable::new(&["U"]).unwrap();
        let plan = CullPlan::build(vec![keep, lose], &table);

        let summary = execute_removals_and_invalidate(&plan, &cache, &no_progress).unwrap();
        assert_eq!(summary.deleted, 1);
        assert!(summary.cache_invalidated);
        assert!(!cache.exists());
    }

    #[test]
    fn test_cache_is_dropped_when_delete_fails_partway() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("roms.txt");
        let entries = vec![
            write_rom(dir.path(), "A (USA).bin", 1),
            write_rom(dir.path(), "A (Japan).bin", 1),
            write_rom(dir.path(), "B (USA).bin", 1),
            write_rom(dir.path(), "B (Japan).bin", 1),
        ];
        fs::remove_file(dir.path().join("B (Japan).bin")).unwrap();
        fs::write(&cache, "listed\n").unwrap();

        let table = RegionTable::new(&["U"]).unwrap();
        let plan = CullPlan::build(entries, &table);

        let err = execute_removals_and_invalidate(&plan, &cache, &no_progress).unwrap_err();
        assert!(matches!(err, CullError::FileAccess { .. }));
        assert!(!dir.path().join("A (Japan).bin").exists());
        assert!(!cache.exists());
    }

    #[test]
    fn test_missing_cache_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let plan = CullPlan::default();
        let summary =
            execute_removals_and_invalidate(&plan, &dir.path().join("roms.txt"), &no_progress)
                .unwrap();
        assert_eq!(summary, DeleteSummary::default());
    }
}
