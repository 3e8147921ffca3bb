//! File-backed translation resources.
//!
//! Each locale is backed by one flat JSON object of key → translated string
//! at `<dir>/<locale>.json`. A locale without a file simply has no custom
//! entries; the translator falls back to core translations and key echoing.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Clone)]
pub struct TranslationStore {
    dir: PathBuf,
}

impl TranslationStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the resource file backing `locale`.
    pub fn resource_path(&self, locale: &str) -> PathBuf {
        self.dir.join(format!("{locale}.json"))
    }

    /// Load the custom translations for `locale`.
    ///
    /// Returns `None` when no resource file exists. A file that exists but
    /// cannot be read or parsed is logged and treated the same way, so a
    /// broken file degrades lookups instead of failing requests.
    pub fn load(&self, locale: &str) -> Option<HashMap<String, String>> {
        let path = self.resource_path(locale);
        if !path.exists() {
            return None;
        }
        match read_map(&path) {
            Ok(map) => Some(map),
            Err(err) => {
                warn!("Ignoring unusable translation file {}: {err:#}", path.display());
                None
            }
        }
    }
}

fn read_map(path: &Path) -> Result<HashMap<String, String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, contents: &str) {
        let mut file = fs::File::create(dir.join(name)).expect("create file");
        file.write_all(contents.as_bytes()).expect("write file");
    }

    #[test]
    fn test_load_reads_flat_map() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "fr.json", r#"{"greeting": "Bonjour {name}"}"#);

        let store = TranslationStore::new(dir.path());
        let map = store.load("fr").expect("should find fr.json");
        assert_eq!(map.get("greeting").map(String::as_str), Some("Bonjour {name}"));
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = TranslationStore::new(dir.path());
        assert!(store.load("de").is_none());
    }

    #[test]
    fn test_load_malformed_file_returns_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "fr.json", "{ this is not json");

        let store = TranslationStore::new(dir.path());
        assert!(store.load("fr").is_none());
    }

    #[test]
    fn test_load_rejects_non_string_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(dir.path(), "fr.json", r#"{"count": 3}"#);

        let store = TranslationStore::new(dir.path());
        assert!(store.load("fr").is_none());
    }

    #[test]
    fn test_resource_path_layout() {
        let store = TranslationStore::new("/tmp/translations");
        assert_eq!(
            store.resource_path("fr"),
            PathBuf::from("/tmp/translations/fr.json")
        );
    }
}
