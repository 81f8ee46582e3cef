//! Persisted exact-match mapping from source text to its translation.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::error::{Result, XltransError};
use crate::layout::ensure_dir;

/// In-memory translation cache. Keys are compared byte for byte; insertion order is
/// kept so the file on disk stays diffable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationCache {
    entries: IndexMap<String, String>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    /// Overwrites an existing translation for the same key in place.
    pub fn insert(&mut self, source: impl Into<String>, translated: impl Into<String>) {
        self.entries.insert(source.into(), translated.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for TranslationCache {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Cache bound to its backing JSON file.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Empty cache when the file does not exist yet; malformed content is an error.
    pub fn load(&self) -> Result<TranslationCache> {
        if !self.path.exists() {
            return Ok(TranslationCache::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let entries: IndexMap<String, String> =
            serde_json::from_str(&content).map_err(|source| XltransError::CacheParse {
                path: self.path.clone(),
                source,
            })?;
        info!(path = %self.path.display(), entries = entries.len(), "Loaded translation cache");
        Ok(TranslationCache { entries })
    }

    /// Replaces the file with the full mapping, pretty-printed with four-space indents.
    pub fn save(&self, cache: &TranslationCache) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }

        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        cache
            .entries
            .serialize(&mut ser)
            .map_err(|source| XltransError::CacheWrite {
                path: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, buf)?;
        info!(path = %self.path.display(), entries = cache.len(), "Saved translation cache");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("reference").join("cache.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_creates_directory_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("reference").join("cache.json"));

        let mut cache = TranslationCache::new();
        cache.insert("헌법", "Constitution");
        cache.insert("안녕", "Hello");
        store.save(&cache).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            text,
            "{\n    \"헌법\": \"Constitution\",\n    \"안녕\": \"Hello\"\n}"
        );

        let loaded = store.load().unwrap();
        assert_eq!(loaded, cache);
        let keys: Vec<_> = loaded.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["헌법", "안녕"]);
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("cache.json"));
        fs::write(store.path(), "{\"old\": \"stale\", \"other\": \"x\"}").unwrap();

        let mut cache = TranslationCache::new();
        cache.insert("new", "fresh");
        store.save(&cache).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.lookup("new"), Some("fresh"));
        assert_eq!(loaded.lookup("old"), None);
    }

    #[test]
    fn malformed_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("cache.json"));
        fs::write(store.path(), "[\"not\", \"a\", \"map\"]").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, XltransError::CacheParse { .. }));

        fs::write(store.path(), "{\"key\": 3}").unwrap();
        assert!(matches!(
            store.load().unwrap_err(),
            XltransError::CacheParse { .. }
        ));
    }

    #[test]
    fn lookup_is_exact() {
        let mut cache = TranslationCache::new();
        cache.insert("Hello", "안녕");
        assert_eq!(cache.lookup("Hello"), Some("안녕"));
        assert_eq!(cache.lookup("hello"), None);
        assert_eq!(cache.lookup("Hello "), None);
    }

    #[test]
    fn later_insert_overwrites() {
        let mut cache = TranslationCache::new();
        cache.insert("법", "law");
        cache.insert("법", "Law");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookup("법"), Some("Law"));
    }
}
