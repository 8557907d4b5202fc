//! Release/build quality ranking.
//!
//! Dump groups mark build quality with short tags: `[!]` for a verified dump,
//! `(Rev 1)` / `(v1.1)` for revisions, `(Beta)`, `(Proto)`, `[b1]` for a bad
//! dump, and so on. This module turns such a tag into a comparable rank.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static VERSION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)").expect("static pattern"));

/// Build/release markers, from most to least preferred.
///
/// An untagged release ranks between [`Version`](Self::Version) and
/// [`Alternate`](Self::Alternate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildKeyword {
    /// `!` verified good dump
    Verified,
    /// `Rev N`
    Revision,
    /// `vN.N`
    Version,
    Alternate,
    Alt,
    /// `oN` overdump
    Overdump,
    Beta,
    Proto,
    Alpha,
    Promo,
    Pirate,
    Demo,
    Sample,
    Bootleg,
    /// `bN` bad dump
    BadDump,
}

impl BuildKeyword {
    /// All keywords in preference order.
    pub const ALL: [BuildKeyword; 15] = [
        Self::Verified,
        Self::Revision,
        Self::Version,
        Self::Alternate,
        Self::Alt,
        Self::Overdump,
        Self::Beta,
        Self::Proto,
        Self::Alpha,
        Self::Promo,
        Self::Pirate,
        Self::Demo,
        Self::Sample,
        Self::Bootleg,
        Self::BadDump,
    ];

    /// Keywords that rank above an untagged release.
    const ABOVE_PLAIN: usize = 3;

    /// The lowercase tag prefix for this keyword.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Verified => "!",
            Self::Revision => "rev",
            Self::Version => "v",
            Self::Alternate => "alternate",
            Self::Alt => "alt",
            Self::Overdump => "o",
            Self::Beta => "beta",
            Self::Proto => "proto",
            Self::Alpha => "alpha",
            Self::Promo => "promo",
            Self::Pirate => "pirate",
            Self::Demo => "demo",
            Self::Sample => "sample",
            Self::Bootleg => "bootleg",
            Self::BadDump => "b",
        }
    }

    /// Numeric score; higher is better.
    pub fn score(&self) -> i32 {
        let pos = Self::ALL.iter().position(|k| k == self).unwrap_or(0);
        let slot = if pos < Self::ABOVE_PLAIN { pos } else { pos + 1 };
        Self::ALL.len() as i32 - slot as i32
    }

    /// Match the start of a tag against the keyword table (case-insensitive).
    ///
    /// Longer prefixes are tried first so `alternate` wins over `alt` and
    /// `beta` over `b`. After the keyword and an optional version number the
    /// tag must end or continue with a non-alphanumeric character, so
    /// `Brazil` is not a bad dump and `Revenge` is not a revision.
    /// Returns the keyword and the rest of the tag after it.
    pub fn match_tag(tag: &str) -> Option<(BuildKeyword, String)> {
        let lower = tag.to_lowercase();
        let mut keywords = Self::ALL;
        keywords.sort_by_key(|k| std::cmp::Reverse(k.prefix().len()));

        keywords.into_iter().find_map(|keyword| {
            let rest = lower.strip_prefix(keyword.prefix())?;
            let tail = VERSION_NUMBER
                .find(rest)
                .map_or(rest, |m| &rest[m.end()..]);
            let bounded = tail.chars().next().is_none_or(|c| !c.is_alphanumeric());
            bounded.then(|| (keyword, rest.to_string()))
        })
    }
}

/// Score given to releases without any recognized build tag.
pub const PLAIN_SCORE: i32 = (BuildKeyword::ALL.len() - BuildKeyword::ABOVE_PLAIN) as i32;

/// Comparable build quality of a release: keyword score, then version.
#[derive(Debug, Clone, Copy)]
pub struct BuildRank {
    /// Keyword score (see [`BuildKeyword::score`]), or [`PLAIN_SCORE`]
    pub score: i32,
    /// Version number following the keyword; infinity when absent
    pub version: f64,
    /// The keyword that produced the score, if any
    pub keyword: Option<BuildKeyword>,
}

impl BuildRank {
    /// Rank an untagged release.
    pub fn plain() -> Self {
        Self {
            score: PLAIN_SCORE,
            version: f64::INFINITY,
            keyword: None,
        }
    }

    /// Rank from the first tag (in sorted order) that carries a build keyword.
    pub fn from_tags(tags: &BTreeSet<String>) -> Self {
        tags.iter()
            .find_map(|tag| BuildKeyword::match_tag(tag))
            .map(|(keyword, rest)| Self {
                score: keyword.score(),
                version: parse_version(&rest).unwrap_or(f64::INFINITY),
                keyword: Some(keyword),
            })
            .unwrap_or_else(Self::plain)
    }
}

/// Leading number of a tag remainder: `"1.1"` → 1.1, `" 02"` → 2.0.
pub fn parse_version(rest: &str) -> Option<f64> {
    let caps = VERSION_NUMBER.captures(rest)?;
    caps.get(1)?.as_str().parse().ok()
}

impl PartialEq for BuildRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BuildRank {}

impl PartialOrd for BuildRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BuildRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| self.version.total_cmp(&other.version))
    }
}

#[cfg(test)]
#[path = "tests/build_tests.rs"]
mod tests;
