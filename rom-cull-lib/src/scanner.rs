//! Collection traversal and the cached file list.
//!
//! A full walk of a large network share is slow, so the list of discovered
//! files is saved as a newline-delimited snapshot and reused on later runs
//! until it is invalidated (after any deleting run).

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::CullError;
use crate::progress::CullProgress;

/// Where a file list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSource {
    /// Read back from the cached snapshot
    Cache,
    /// Freshly walked from disk
    Walk,
}

/// Recursively list every file under `root`, skipping directories whose name
/// is in `ignore_dirs` at any depth.
///
/// Directory entries are visited in file-name order so the result is stable.
pub fn walk_roms(
    root: &Path,
    ignore_dirs: &[String],
    progress: &dyn Fn(CullProgress),
) -> Result<Vec<PathBuf>, CullError> {
    let ignored: HashSet<&str> = ignore_dirs.iter().map(String::as_str).collect();
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !e
                    .file_name()
                    .to_str()
                    .map(|n| ignored.contains(n))
                    .unwrap_or(false)
        });

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
            progress(CullProgress::Scanning { found: files.len() });
        }
    }

    progress(CullProgress::Done);
    Ok(files)
}

/// Read a cached snapshot: one path per line, blank lines skipped.
pub fn read_file_list(cache_path: &Path) -> Result<Vec<PathBuf>, CullError> {
    let contents =
        fs::read_to_string(cache_path).map_err(|e| CullError::file_access(cache_path, e))?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Write a snapshot atomically (temp file + rename).
///
/// Every path must be valid UTF-8 so it reads back unchanged; otherwise
/// nothing is written.
pub fn write_file_list(cache_path: &Path, files: &[PathBuf]) -> Result<(), CullError> {
    let lines = files
        .iter()
        .map(|f| f.to_str().ok_or_else(|| CullError::non_utf8_name(f)))
        .collect::<Result<Vec<&str>, CullError>>()?;

    let tmp = cache_path.with_extension("tmp");
    let write = || -> std::io::Result<()> {
        if let Some(parent) = cache_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut out = std::io::BufWriter::new(fs::File::create(&tmp)?);
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        drop(out);
        fs::rename(&tmp, cache_path)
    };
    write().map_err(|e| CullError::file_access(cache_path, e))
}

/// Remove the snapshot so the next run walks the disk again.
///
/// Returns whether a snapshot existed.
pub fn invalidate_cache(cache_path: &Path) -> Result<bool, CullError> {
    match fs::remove_file(cache_path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(CullError::file_access(cache_path, e)),
    }
}

/// The list of files a run operates on.
#[derive(Debug, Clone)]
pub struct FileList {
    files: Vec<PathBuf>,
    source: ListSource,
}

impl FileList {
    /// Walk `root` without touching any snapshot.
    pub fn scan(
        root: &Path,
        ignore_dirs: &[String],
        progress: &dyn Fn(CullProgress),
    ) -> Result<Self, CullError> {
        Ok(Self {
            files: walk_roms(root, ignore_dirs, progress)?,
            source: ListSource::Walk,
        })
    }

    /// Use the snapshot at `cache_path` if present, otherwise walk `root`
    /// and save the result there.
    pub fn load_or_scan(
        root: &Path,
        ignore_dirs: &[String],
        cache_path: &Path,
        progress: &dyn Fn(CullProgress),
    ) -> Result<Self, CullError> {
        if cache_path.is_file() {
            log::debug!("Using cached file list from {}", cache_path.display());
            return Ok(Self {
                files: read_file_list(cache_path)?,
                source: ListSource::Cache,
            });
        }

        let list = Self::scan(root, ignore_dirs, progress)?;
        write_file_list(cache_path, &list.files)?;
        log::debug!(
            "Saved {} paths to {}",
            list.files.len(),
            cache_path.display()
        );
        Ok(list)
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn source(&self) -> ListSource {
        self.source
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
