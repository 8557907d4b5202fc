//! Application settings (config file location and cull defaults).
//!
//! The settings file is `~/.config/rom-cull/settings.toml`:
//!
//! ```toml
//! [cull]
//! root = "/mnt/roms"
//! regions = ["U", "E"]
//! ignore_dirs = ["images", "videos", "manuals"]
//! cache_file = "roms.txt"
//! ```
//!
//! Every field is optional; CLI flags override whatever is set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CullError;

/// Canonical path to the settings file: `~/.config/rom-cull/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("rom-cull").join("settings.toml")
}

/// Defaults for the `clean` workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CullSettings {
    /// Collection root; the current directory when unset
    pub root: Option<PathBuf>,
    /// Region preference order, most preferred first
    pub regions: Vec<String>,
    /// Directory names skipped at any depth
    pub ignore_dirs: Vec<String>,
    /// Cached file-list snapshot (relative paths resolve against the working directory)
    pub cache_file: PathBuf,
}

impl Default for CullSettings {
    fn default() -> Self {
        Self {
            root: None,
            regions: vec!["U".into(), "E".into()],
            ignore_dirs: vec!["images".into(), "videos".into(), "manuals".into()],
            cache_file: PathBuf::from("roms.txt"),
        }
    }
}

/// Contents of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub cull: CullSettings,
}

impl Settings {
    /// Load from the canonical location; a missing file yields defaults.
    pub fn load() -> Result<Self, CullError> {
        Self::load_from(&settings_path())
    }

    /// Load from a specific file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, CullError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(CullError::file_access(path, e)),
        };
        Self::parse(&contents).map_err(|e| CullError::settings(format!("{}: {e}", path.display())))
    }

    /// Parse settings from TOML text.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Pretty-printed TOML of the effective settings, for display.
    pub fn to_toml_string(&self) -> Result<String, CullError> {
        toml::to_string_pretty(self).map_err(|e| CullError::settings(e.to_string()))
    }

    /// Resolve the collection root using a priority chain:
    ///
    /// 1. CLI override (if `Some`)
    /// 2. `cull.root` in `settings.toml`
    /// 3. Current working directory
    pub fn resolve_root(&self, cli_override: Option<PathBuf>) -> PathBuf {
        cli_override
            .or_else(|| self.cull.root.clone())
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.cull.regions, vec!["U", "E"]);
        assert_eq!(settings.cull.ignore_dirs, vec!["images", "videos", "manuals"]);
        assert_eq!(settings.cull.cache_file, PathBuf::from("roms.txt"));
        assert_eq!(settings.cull.root, None);
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let settings = Settings::parse("[cull]\nregions = [\"J\", \"U\"]\n").unwrap();
        assert_eq!(settings.cull.regions, vec!["J", "U"]);
        assert_eq!(settings.cull.ignore_dirs, vec!["images", "videos", "manuals"]);
    }

    #[test]
    fn test_parse_empty_file() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        assert!(Settings::parse("[cull]\nregions = 3\n").is_err());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_invalid_file_is_settings_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[cull\n").unwrap();
        assert!(matches!(
            Settings::load_from(&path),
            Err(CullError::Settings(_))
        ));
    }

    #[test]
    fn test_resolve_root_priority() {
        let mut settings = Settings::default();
        settings.cull.root = Some(PathBuf::from("/from/settings"));
        assert_eq!(
            settings.resolve_root(Some(PathBuf::from("/from/cli"))),
            PathBuf::from("/from/cli")
        );
        assert_eq!(settings.resolve_root(None), PathBuf::from("/from/settings"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut settings = Settings::default();
        settings.cull.root = Some(PathBuf::from("/roms"));
        let text = settings.to_toml_string().unwrap();
        assert_eq!(Settings::parse(&text).unwrap(), settings);
    }
}
