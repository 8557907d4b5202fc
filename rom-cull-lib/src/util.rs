use std::path::Path;

use crate::error::CullError;

// Re-export core utilities so frontends only need this crate.
pub use rom_cull_core::util::*;

/// Bare filename of a path as UTF-8.
///
/// Lossy conversion could merge two distinct files into one title group, so
/// a name that is not valid UTF-8 is an error.
pub fn utf8_file_name(path: &Path) -> Result<&str, CullError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CullError::non_utf8_name(path))
}

/// Trim each item of a comma-split list and drop the empty ones.
///
/// `["U", " E", ""]` → `["U", "E"]`
pub fn trim_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
