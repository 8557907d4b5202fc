//! Duplicate grouping and selection.
//!
//! Entries sharing a title key are ranked against each other; the best one is
//! kept, along with any other discs of the same release, and the rest are
//! marked for removal.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use rom_cull_core::timestamp::Timestamp;
use rom_cull_core::{BuildRank, RegionTable};

use crate::entry::Entry;
use crate::report::CullSummary;

/// What happens to one candidate of a title group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Best-ranked entry of its group (or the only one)
    Keep,
    /// Another disc/part of the kept entry
    KeepSibling,
    /// Duplicate to delete
    Remove,
}

impl Decision {
    pub fn is_kept(&self) -> bool {
        !matches!(self, Self::Remove)
    }
}

/// One entry together with the decision made about it.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub entry: Entry,
    pub decision: Decision,
}

/// All entries of one logical title, best-ranked first.
#[derive(Debug, Clone)]
pub struct TitleGroup {
    pub title_key: String,
    pub candidates: Vec<Candidate>,
}

impl TitleGroup {
    /// Whether more than one file claims this title.
    pub fn has_duplicates(&self) -> bool {
        self.candidates.len() > 1
    }

    /// The kept entry with the best rank.
    pub fn winner(&self) -> &Entry {
        &self.candidates[0].entry
    }

    pub fn removals(&self) -> impl Iterator<Item = &Entry> {
        self.candidates
            .iter()
            .filter(|c| c.decision == Decision::Remove)
            .map(|c| &c.entry)
    }
}

/// Sort key of one candidate; larger is better.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct RankKey {
    build: BuildRank,
    region: i32,
    timestamp: Timestamp,
    disc: Reverse<i64>,
}

impl RankKey {
    fn of(entry: &Entry, regions: &RegionTable) -> Self {
        Self {
            build: entry.build_rank(),
            region: entry.region_rank(regions),
            timestamp: entry.timestamp_rank(),
            disc: Reverse(entry.disc_number()),
        }
    }
}

/// Rank a group's entries and decide keep/remove for each.
///
/// Entries are ordered by build rank, region rank, timestamp and then lowest
/// disc number first. Ties keep their input order.
pub fn select(entries: Vec<Entry>, regions: &RegionTable) -> Vec<Candidate> {
    if entries.len() == 1 {
        return entries
            .into_iter()
            .map(|entry| Candidate {
                entry,
                decision: Decision::Keep,
            })
            .collect();
    }

    let mut ranked: Vec<(RankKey, Entry)> = entries
        .into_iter()
        .map(|e| (RankKey::of(&e, regions), e))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    let mut candidates: Vec<Candidate> = Vec::with_capacity(ranked.len());
    for (_, entry) in ranked {
        let decision = match candidates.first() {
            None => Decision::Keep,
            Some(main) if entry.is_sibling_of(&main.entry) => Decision::KeepSibling,
            Some(_) => Decision::Remove,
        };
        candidates.push(Candidate { entry, decision });
    }
    candidates
}

/// Keep/remove decisions for a whole collection, grouped by title.
#[derive(Debug, Clone, Default)]
pub struct CullPlan {
    groups: Vec<TitleGroup>,
}

impl CullPlan {
    /// Group entries by title key and select within each group.
    pub fn build(entries: Vec<Entry>, regions: &RegionTable) -> Self {
        let mut by_title: BTreeMap<String, Vec<Entry>> = BTreeMap::new();
        for entry in entries {
            by_title
                .entry(entry.title_key().to_string())
                .or_default()
                .push(entry);
        }

        let groups = by_title
            .into_iter()
            .map(|(title_key, entries)| TitleGroup {
                title_key,
                candidates: select(entries, regions),
            })
            .collect();

        Self { groups }
    }

    /// All title groups in title order.
    pub fn groups(&self) -> &[TitleGroup] {
        &self.groups
    }

    /// Groups with more than one candidate.
    pub fn duplicate_groups(&self) -> impl Iterator<Item = &TitleGroup> {
        self.groups.iter().filter(|g| g.has_duplicates())
    }

    /// Every entry marked for removal, in report order.
    pub fn removals(&self) -> impl Iterator<Item = &Entry> {
        self.groups.iter().flat_map(|g| g.removals())
    }

    pub fn summary(&self) -> CullSummary {
        CullSummary::from_plan(self)
    }
}

#[cfg(test)]
#[path = "tests/cull_tests.rs"]
mod tests;
