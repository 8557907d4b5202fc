//! One file of the collection, with its filename already interpreted.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rom_cull_core::disc::{self, Volume};
use rom_cull_core::timestamp::{self, Timestamp};
use rom_cull_core::{BuildRank, RegionTable, TagCollector, parse_filename};

use crate::error::CullError;
use crate::progress::CullProgress;
use crate::util::utf8_file_name;

/// A ROM file with its grouping key and tags.
///
/// Built once per discovered file and never modified afterwards.
#[derive(Debug, Clone)]
pub struct Entry {
    path: PathBuf,
    file_name: String,
    size_bytes: u64,
    title_key: String,
    tags: BTreeSet<String>,
    volume: Option<Volume>,
}

impl Entry {
    /// Interpret the filename of `path` with an already known size.
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64) -> Result<Self, CullError> {
        let path = path.into();
        let file_name = utf8_file_name(&path)?.to_string();

        let parsed = parse_filename(&file_name).map_err(|e| CullError::parse(&path, e))?;
        let volume = Volume::from_tags(&parsed.tags).map_err(|e| CullError::parse(&path, e))?;

        Ok(Self {
            path,
            file_name,
            size_bytes,
            title_key: parsed.title_key,
            tags: parsed.tags,
            volume,
        })
    }

    /// Interpret the filename of `path`, querying its size from the filesystem.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, CullError> {
        let path = path.into();
        let size = std::fs::metadata(&path)
            .map_err(|e| CullError::file_access(&path, e))?
            .len();
        Self::new(path, size)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bare filename, as shown in reports.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Filename with all bracketed tags removed; equal keys mean the same game.
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn build_rank(&self) -> BuildRank {
        BuildRank::from_tags(&self.tags)
    }

    pub fn region_rank(&self, table: &RegionTable) -> i32 {
        table.score(&self.tags)
    }

    pub fn timestamp_rank(&self) -> Timestamp {
        timestamp::timestamp_rank(&self.tags)
    }

    /// Volume number, or -1 for single-part releases.
    pub fn disc_number(&self) -> i64 {
        disc::disc_number(self.volume)
    }

    /// Whether this entry is another disc/part of `main`.
    pub fn is_sibling_of(&self, main: &Entry) -> bool {
        disc::is_sibling(&self.tags, self.volume, &main.tags, main.volume)
    }
}

/// Build entries for every path, stopping at the first failure.
///
/// Every tag seen is counted into `collector`. A malformed filename or a
/// failed size query aborts the whole load so no cull decision is ever made
/// on a partial collection.
pub fn load_entries(
    paths: &[PathBuf],
    collector: &mut TagCollector,
    progress: &dyn Fn(CullProgress),
) -> Result<Vec<Entry>, CullError> {
    let total = paths.len();
    let mut entries = Vec::with_capacity(total);

    for (index, path) in paths.iter().enumerate() {
        let entry = Entry::from_path(path)?;
        progress(CullProgress::loading(entry.file_name(), index, total));
        collector.record(entry.tags());
        entries.push(entry);
    }

    progress(CullProgress::Done);
    log::debug!("Loaded {} entries", entries.len());
    Ok(entries)
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
