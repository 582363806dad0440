//! Key/value draft storage for half-finished planning requests. Each key is one
//! pretty-printed JSON file in the drafts directory.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Replaces anything outside `[A-Za-z0-9_-]` with `_` so a key is safe to use
/// as a single path component.
pub fn safe_file_stem(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

pub struct DraftStore {
    dir: PathBuf,
}

impl DraftStore {
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create drafts directory: {:?}", dir))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", safe_file_stem(key)))
    }

    pub fn save<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&path, json).with_context(|| format!("Failed to write draft {:?}", path))
    }

    /// Returns `None` when no draft is stored under `key`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).with_context(|| format!("Failed to read draft {:?}", path)),
        };
        let data = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse draft {:?}", path))?;
        Ok(Some(data))
    }

    pub fn clear(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove draft {:?}", path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn save_load_clear() {
        let dir = std::env::temp_dir().join(format!("aquaforge-drafts-{}", std::process::id()));
        let store = DraftStore::open(&dir).unwrap();

        let mut draft = BTreeMap::new();
        draft.insert("species".to_string(), "nila".to_string());
        store.save("onboarding/step-2", &draft).unwrap();

        let loaded: Option<BTreeMap<String, String>> = store.load("onboarding/step-2").unwrap();
        assert_eq!(loaded, Some(draft));

        store.clear("onboarding/step-2").unwrap();
        let gone: Option<BTreeMap<String, String>> = store.load("onboarding/step-2").unwrap();
        assert!(gone.is_none());

        // clearing twice is fine
        store.clear("onboarding/step-2").unwrap();
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_stems_cannot_escape_the_directory() {
        assert_eq!(safe_file_stem("../../etc/passwd"), "______etc_passwd");
        assert_eq!(safe_file_stem("lele"), "lele");
        assert_eq!(safe_file_stem("ikan mas"), "ikan_mas");
    }
}
