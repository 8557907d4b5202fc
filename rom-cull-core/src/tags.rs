//! Filename tag extraction.
//!
//! ROM sets encode region, revision and dump quality in bracketed segments:
//! `"Sonic the Hedgehog (USA, Europe) (Rev 1) [!].md"`. This module splits such
//! a filename into the grouping key (`"Sonic the Hedgehog.md"`) and the set of
//! tags (`{"!", "Europe", "Rev 1", "USA"}`).

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ParseError;

static TAG_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[(].*?[\])]").expect("static pattern"));
static SPACE_BEFORE_DOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+\.").expect("static pattern"));
static PAREN_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^()]+)\)").expect("static pattern"));
static SQUARE_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]]+)\]").expect("static pattern"));

/// A filename split into its grouping key and its bracketed tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Filename with every bracketed segment removed
    pub title_key: String,
    /// Trimmed, deduplicated tags in sorted order
    pub tags: BTreeSet<String>,
}

/// Check that every `(` and `[` is closed by its own kind, in order.
pub fn has_balanced_brackets(filename: &str) -> bool {
    let mut stack = Vec::new();
    for c in filename.chars() {
        match c {
            '(' | '[' => stack.push(c),
            ')' | ']' => {
                let open = if c == ')' { '(' } else { '[' };
                if stack.pop() != Some(open) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// Remove bracketed segments and the whitespace they leave before the extension.
///
/// - `"Game (USA) (Rev 1).bin"` → `"Game.bin"`
/// - `"Game [!].nes"` → `"Game.nes"`
pub fn title_key(filename: &str) -> String {
    let stripped = TAG_SPAN.replace_all(filename, "");
    SPACE_BEFORE_DOT
        .replace_all(stripped.trim(), ".")
        .into_owned()
}

/// Collect the comma-separated tags from every `(...)` and `[...]` segment.
pub fn extract_tags(filename: &str) -> BTreeSet<String> {
    PAREN_CONTENT
        .captures_iter(filename)
        .chain(SQUARE_CONTENT.captures_iter(filename))
        .flat_map(|cap| {
            cap.get(1)
                .map(|m| m.as_str())
                .unwrap_or("")
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Parse a bare filename (no directory) into title key and tags.
///
/// Fails with [`ParseError::MalformedFilename`] when brackets are unbalanced,
/// since the tag set of such a name cannot be trusted.
pub fn parse_filename(filename: &str) -> Result<ParsedName, ParseError> {
    if !has_balanced_brackets(filename) {
        return Err(ParseError::malformed(filename));
    }
    Ok(ParsedName {
        title_key: title_key(filename),
        tags: extract_tags(filename),
    })
}

/// Running tally of every tag seen during an extraction pass.
///
/// Purely diagnostic: nothing in the ranking engine reads it.
#[derive(Debug, Clone, Default)]
pub struct TagCollector {
    counts: BTreeMap<String, usize>,
}

impl TagCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count each tag of one filename.
    pub fn record<'a>(&mut self, tags: impl IntoIterator<Item = &'a String>) {
        for tag in tags {
            *self.counts.entry(tag.clone()).or_default() += 1;
        }
    }

    /// Distinct tags in sorted order with the number of files carrying each.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, &n)| (t.as_str(), n))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/tags_tests.rs"]
mod tests;
