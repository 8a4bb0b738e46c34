//! Saved settings (source paths, config file location).
//!
//! The settings file is `~/.config/switch-titledb/settings.toml`:
//!
//! ```toml
//! [sources]
//! titles = "/data/titledb/titles.json"
//! versions = "/data/titledb/versions.json"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use crate::cli_types::SourceArgs;

const TITLES_KEY: &str = "titles";
const VERSIONS_KEY: &str = "versions";
const DEFAULT_TITLES: &str = "titles.json";
const DEFAULT_VERSIONS: &str = "versions.json";

/// Canonical path to the settings file.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("switch-titledb").join("settings.toml")
}

/// Resolved input paths for a catalog build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourcePaths {
    pub titles: PathBuf,
    pub versions: PathBuf,
}

/// Resolve both input paths using a priority chain:
///
/// 1. CLI flag (if given)
/// 2. Saved `sources.<key>` in `settings.toml`
/// 3. `titles.json` / `versions.json` in the current directory
pub(crate) fn resolve_sources(args: &SourceArgs) -> SourcePaths {
    resolve_sources_in(&settings_path(), args)
}

fn resolve_sources_in(settings: &Path, args: &SourceArgs) -> SourcePaths {
    let titles = args
        .titles
        .clone()
        .or_else(|| load_source_path(settings, TITLES_KEY))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TITLES));
    let versions = args
        .versions
        .clone()
        .or_else(|| load_source_path(settings, VERSIONS_KEY))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_VERSIONS));
    SourcePaths { titles, versions }
}

/// Read `sources.<key>` from the settings file, if set.
fn load_source_path(settings: &Path, key: &str) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("sources")?.get(key)?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save source paths. `None` leaves an existing value untouched.
pub(crate) fn save_sources(titles: Option<&Path>, versions: Option<&Path>) -> io::Result<()> {
    update_sources(&settings_path(), |sources| {
        for (key, path) in [(TITLES_KEY, titles), (VERSIONS_KEY, versions)] {
            if let Some(p) = path {
                sources.insert(
                    key.to_string(),
                    toml::Value::String(p.to_string_lossy().into_owned()),
                );
            }
        }
    })
}

/// Remove both saved source paths.
pub(crate) fn clear_sources() -> io::Result<()> {
    update_sources(&settings_path(), |sources| {
        sources.remove(TITLES_KEY);
        sources.remove(VERSIONS_KEY);
    })
}

/// Apply `edit` to the `[sources]` table and write the file back.
///
/// Goes through `toml::Value` so unrelated keys survive the rewrite.
fn update_sources<F>(settings: &Path, edit: F) -> io::Result<()>
where
    F: FnOnce(&mut toml::Table),
{
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let sources = table
        .entry("sources")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let sources = sources
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[sources] is not a table"))?;
    edit(sources);

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
