//! Disc/volume tag utilities.
//!
//! Functions for recognizing "(Disc N)", "(Side B)", "(Volume 2)" tags and
//! deciding whether two releases are parts of the same multi-disc set.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

static VOLUME_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(disk|disc|side|volume)\s+(\w+)").expect("static pattern")
});

/// Kind of part a volume tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartType {
    Disk,
    Disc,
    Side,
    Volume,
}

impl PartType {
    fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "disk" => Some(Self::Disk),
            "disc" => Some(Self::Disc),
            "side" => Some(Self::Side),
            "volume" => Some(Self::Volume),
            _ => None,
        }
    }
}

/// A parsed disc/volume tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Volume {
    pub part_type: PartType,
    /// Sequence number; letters map to their alphabet position (A → 1)
    pub number: u32,
}

impl Volume {
    /// Parse a single tag as a volume tag.
    ///
    /// - `"Disc 2"` → `Some(Disc, 2)`
    /// - `"Side B"` → `Some(Side, 2)`
    /// - `"USA"` → `None`
    /// - `"Disc X1"` → `Err(UnknownDiscSequence)`
    pub fn from_tag(tag: &str) -> Result<Option<Self>, ParseError> {
        let Some(caps) = VOLUME_TAG.captures(tag) else {
            return Ok(None);
        };
        let part_type = match PartType::from_word(&caps[1]) {
            Some(p) => p,
            None => return Ok(None),
        };
        let value = &caps[2];

        let number = if value.chars().all(|c| c.is_ascii_digit()) {
            value
                .parse()
                .map_err(|_| ParseError::unknown_disc_sequence(tag))?
        } else {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => {
                    u32::from(c.to_ascii_lowercase()) - u32::from('a') + 1
                }
                _ => return Err(ParseError::unknown_disc_sequence(tag)),
            }
        };

        Ok(Some(Self { part_type, number }))
    }

    /// First volume tag among a tag set (sorted order).
    ///
    /// Every tag is validated, so an unparseable sequence anywhere in the set
    /// is reported even when an earlier tag already matched.
    pub fn from_tags(tags: &BTreeSet<String>) -> Result<Option<Self>, ParseError> {
        let mut first = None;
        for tag in tags {
            if let Some(volume) = Self::from_tag(tag)? {
                first.get_or_insert(volume);
            }
        }
        Ok(first)
    }
}

/// Whether a tag names a disc/volume (and parses cleanly).
pub fn is_volume_tag(tag: &str) -> bool {
    matches!(Volume::from_tag(tag), Ok(Some(_)))
}

/// Disc number used for ordering: the volume number, or -1 without one.
pub fn disc_number(volume: Option<Volume>) -> i64 {
    volume.map(|v| i64::from(v.number)).unwrap_or(-1)
}

/// Whether `candidate` is another part of the same release as `main`.
///
/// True only when both carry a volume tag, the numbers differ, and every tag
/// present in one set but not the other is itself a volume tag.
pub fn is_sibling(
    candidate_tags: &BTreeSet<String>,
    candidate_volume: Option<Volume>,
    main_tags: &BTreeSet<String>,
    main_volume: Option<Volume>,
) -> bool {
    let (Some(candidate), Some(main)) = (candidate_volume, main_volume) else {
        return false;
    };
    if candidate.number == main.number {
        return false;
    }
    candidate_tags
        .symmetric_difference(main_tags)
        .all(|tag| is_volume_tag(tag))
}

#[cfg(test)]
#[path = "tests/disc_tests.rs"]
mod tests;
