//! Named profile files on disk and the live settings tree.
//!
//! [`ConfigStore`] owns the [`Settings`] tree, the list of profile files found in its
//! directory and the [`FontCatalog`] fed while decoding. It is driven from a single
//! thread; every operation either completes or returns a [`StoreError`] with the store
//! left as it was.

mod error;

pub use error::{Result, StoreError};

use crate::fonts::{FontBackend, FontCatalog};
use crate::metrics::StoreMetrics;
use crate::models::Settings;
use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::io;
use std::sync::LazyLock;

/// Characters that cannot appear in a profile file name on any supported platform.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^/\\<>:"|?*\x00-\x1F]+$"#).expect("Invalid config name regex")
});

/// Whether `name` can be used as a profile file name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name) && name != "." && name != ".."
}

/// Where the store is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Constructed, directory not listed yet.
    Uninitialized,
    /// Directory listed, no profile applied since construction or the last reset.
    Listed,
    /// The profile at this index was the last one loaded.
    Loaded(usize),
}

#[derive(Debug)]
pub struct ConfigStore {
    dir: Utf8PathBuf,
    configs: Vec<String>,
    settings: Settings,
    fonts: FontCatalog,
    state: StoreState,
    metrics: StoreMetrics,
}

impl ConfigStore {
    /// Create a store over `dir` without touching the filesystem.
    pub fn new(dir: impl Into<Utf8PathBuf>, fonts: FontCatalog) -> Self {
        Self {
            dir: dir.into(),
            configs: Vec::new(),
            settings: Settings::default(),
            fonts,
            state: StoreState::Uninitialized,
            metrics: StoreMetrics::new(),
        }
    }

    /// Create a store over `dir` and list the profiles already there.
    ///
    /// A missing directory is not an error; it is created on the first save.
    pub fn open(dir: impl Into<Utf8PathBuf>, fonts: FontCatalog) -> Result<Self> {
        let mut store = Self::new(dir, fonts);
        store.list_configs()?;
        tracing::info!(
            "Opened config store at {} ({} configs)",
            store.dir,
            store.configs.len()
        );
        Ok(store)
    }

    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    pub fn configs(&self) -> &[String] {
        &self.configs
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn fonts(&self) -> &FontCatalog {
        &self.fonts
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn metrics(&self) -> &StoreMetrics {
        &self.metrics
    }

    /// Index of the profile called `name`.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.configs.iter().position(|config| config == name)
    }

    /// Re-read the profile directory.
    ///
    /// Only regular files are listed, sorted by name. If the loaded profile is still
    /// present its index follows it.
    pub fn list_configs(&mut self) -> Result<&[String]> {
        let result = self.scan_dir();
        let names = self.observe("list", result)?;

        let loaded = match self.state {
            StoreState::Loaded(id) => self.configs.get(id).cloned(),
            _ => None,
        };

        self.configs = names;
        self.state = match loaded.and_then(|name| self.find(&name)) {
            Some(id) => StoreState::Loaded(id),
            None => StoreState::Listed,
        };

        Ok(&self.configs)
    }

    /// Apply the profile at `id` to the settings tree.
    ///
    /// A full load resets the tree first; an incremental load merges on top of the
    /// current values. Nothing changes if the file cannot be read or parsed.
    pub fn load(&mut self, id: usize, incremental: bool) -> Result<()> {
        let result = self.read_document(id);
        let doc = self.observe("load", result)?;

        if !incremental {
            self.settings.reset();
        }
        self.settings.apply_document(&doc, &mut self.fonts);
        self.state = StoreState::Loaded(id);
        self.metrics.record_load();

        tracing::info!(
            "Loaded config {} (incremental: {})",
            self.configs[id],
            incremental
        );
        Ok(())
    }

    /// Write the current settings to the profile at `id`.
    pub fn save(&self, id: usize) -> Result<()> {
        let result = self
            .path_of(id)
            .and_then(|path| self.write_settings(&path, &self.settings));
        let bytes = self.observe("save", result)?;
        self.metrics.record_save(bytes);

        tracing::info!("Saved config {} ({} bytes)", self.configs[id], bytes);
        Ok(())
    }

    /// Create a profile called `name` holding only defaults.
    ///
    /// The entry is only added once its file has been written.
    ///
    /// # Returns
    /// The index of the new profile
    pub fn add(&mut self, name: &str) -> Result<usize> {
        let result = self.validate_name(name, None).and_then(|()| {
            let path = self.dir.join(name);
            self.write_settings(&path, &Settings::default())
        });
        let bytes = self.observe("add", result)?;
        self.metrics.record_save(bytes);

        self.configs.push(name.to_string());
        tracing::info!("Added config {}", name);
        Ok(self.configs.len() - 1)
    }

    /// Delete the profile at `id`.
    ///
    /// Failing to delete the file is logged and otherwise ignored; the entry is dropped
    /// either way.
    pub fn remove(&mut self, id: usize) -> Result<()> {
        let result = self.path_of(id);
        let path = self.observe("remove", result)?;

        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Config file already gone: {}", path);
            }
            Err(e) => tracing::warn!("Failed to delete config file {}: {}", path, e),
        }

        let name = self.configs.remove(id);
        self.state = match self.state {
            StoreState::Loaded(loaded) if loaded == id => StoreState::Listed,
            StoreState::Loaded(loaded) if loaded > id => StoreState::Loaded(loaded - 1),
            state => state,
        };

        tracing::info!("Removed config {}", name);
        Ok(())
    }

    /// Rename the profile at `id`.
    ///
    /// The stored name only changes if the file was renamed on disk.
    pub fn rename(&mut self, id: usize, new_name: &str) -> Result<()> {
        let result = self.path_of(id).and_then(|from| {
            self.validate_name(new_name, Some(id))?;
            let to = self.dir.join(new_name);
            fs::rename(&from, &to).map_err(|e| StoreError::io(from, e))
        });
        self.observe("rename", result)?;

        let old = std::mem::replace(&mut self.configs[id], new_name.to_string());
        tracing::info!("Renamed config {} to {}", old, new_name);
        Ok(())
    }

    /// Restore every settings category to its default.
    pub fn reset(&mut self) {
        self.settings.reset();
        if let StoreState::Loaded(_) = self.state {
            self.state = StoreState::Listed;
        }
        tracing::info!("Settings reset to defaults");
    }

    /// Create the fonts requested by loaded profiles.
    ///
    /// # Returns
    /// `true` if at least one new font was loaded
    pub fn load_scheduled_fonts(&mut self, backend: &mut dyn FontBackend) -> bool {
        let before = self.fonts.loaded_count();
        let loaded_any = self.fonts.load_scheduled(backend);
        for _ in before..self.fonts.loaded_count() {
            self.metrics.record_font_loaded();
        }
        loaded_any
    }

    fn path_of(&self, id: usize) -> Result<Utf8PathBuf> {
        self.configs
            .get(id)
            .map(|name| self.dir.join(name))
            .ok_or(StoreError::UnknownConfig(id))
    }

    fn validate_name(&self, name: &str, renaming: Option<usize>) -> Result<()> {
        if !is_valid_name(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        match self.find(name) {
            Some(existing) if Some(existing) != renaming => {
                Err(StoreError::DuplicateName(name.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn scan_dir(&self) -> Result<Vec<String>> {
        let entries = match self.dir.read_dir_utf8() {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("Config directory {} does not exist yet", self.dir);
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io(self.dir.clone(), e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {}: {}", self.dir, e);
                    continue;
                }
            };

            match entry.file_type() {
                Ok(file_type) if file_type.is_file() => names.push(entry.file_name().to_string()),
                Ok(_) => {}
                Err(e) => tracing::warn!("Skipping {}: {}", entry.path(), e),
            }
        }

        names.sort();
        Ok(names)
    }

    fn read_document(&self, id: usize) -> Result<Value> {
        let path = self.path_of(id)?;
        let text = fs::read_to_string(&path).map_err(|e| StoreError::io(path.clone(), e))?;
        let doc: Value = serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;

        if !doc.is_object() {
            return Err(StoreError::NotAnObject(path));
        }
        Ok(doc)
    }

    /// Encode `settings` and write it to `path`, creating the directory if needed.
    fn write_settings(&self, path: &Utf8Path, settings: &Settings) -> Result<usize> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(self.dir.clone(), e))?;

        let text = serde_json::to_string_pretty(&settings.to_document())
            .map_err(StoreError::Serialize)?;
        fs::write(path, &text).map_err(|e| StoreError::io(path, e))?;
        Ok(text.len())
    }

    fn observe<T>(&self, operation: &str, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.metrics.record_failure();
            tracing::warn!("Config {} failed: {}", operation, e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, ConfigStore) {
        let temp_dir = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let store = ConfigStore::open(dir, FontCatalog::default()).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("legit"));
        assert!(is_valid_name("rage v2.json"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("."));
        assert!(!is_valid_name(".."));
        assert!(!is_valid_name("a/b"));
        assert!(!is_valid_name("a\\b"));
        assert!(!is_valid_name("what?"));
        assert!(!is_valid_name("tab\there"));
    }

    #[test]
    fn test_new_store_is_uninitialized() {
        let store = ConfigStore::new("profiles", FontCatalog::default());
        assert_eq!(store.state(), StoreState::Uninitialized);
        assert!(store.configs().is_empty());
    }

    #[test]
    fn test_open_lists_sorted_regular_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("zeta"), "{}").unwrap();
        fs::write(temp_dir.path().join("alpha"), "{}").unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();

        let dir = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).unwrap();
        let store = ConfigStore::open(dir, FontCatalog::default()).unwrap();

        assert_eq!(store.configs(), ["alpha", "zeta"]);
        assert_eq!(store.state(), StoreState::Listed);
    }

    #[test]
    fn test_unknown_index_is_rejected() {
        let (_temp_dir, mut store) = temp_store();

        assert!(matches!(store.load(3, false), Err(StoreError::UnknownConfig(3))));
        assert!(matches!(store.save(0), Err(StoreError::UnknownConfig(0))));
        assert!(matches!(store.remove(1), Err(StoreError::UnknownConfig(1))));
        assert!(matches!(store.rename(0, "x"), Err(StoreError::UnknownConfig(0))));
        assert_eq!(store.metrics().failures.load(std::sync::atomic::Ordering::Relaxed), 4);
    }

    #[test]
    fn test_add_rejects_bad_names() {
        let (_temp_dir, mut store) = temp_store();
        store.add("main").unwrap();

        assert!(matches!(store.add(""), Err(StoreError::InvalidName(_))));
        assert!(matches!(store.add("../escape"), Err(StoreError::InvalidName(_))));
        assert!(matches!(store.add("main"), Err(StoreError::DuplicateName(_))));
        assert_eq!(store.configs(), ["main"]);
    }

    #[test]
    fn test_remove_shifts_loaded_index() {
        let (_temp_dir, mut store) = temp_store();
        store.add("a").unwrap();
        store.add("b").unwrap();
        store.add("c").unwrap();

        store.load(2, false).unwrap();
        store.remove(0).unwrap();
        assert_eq!(store.state(), StoreState::Loaded(1));
        assert_eq!(store.configs(), ["b", "c"]);

        store.remove(1).unwrap();
        assert_eq!(store.state(), StoreState::Listed);
    }

    #[test]
    fn test_remove_tolerates_missing_file() {
        let (temp_dir, mut store) = temp_store();
        store.add("gone").unwrap();
        fs::remove_file(temp_dir.path().join("gone")).unwrap();

        store.remove(0).unwrap();
        assert!(store.configs().is_empty());
    }

    #[test]
    fn test_relist_follows_loaded_profile() {
        let (temp_dir, mut store) = temp_store();
        store.add("m").unwrap();
        store.load(0, false).unwrap();

        fs::write(temp_dir.path().join("a"), "{}").unwrap();
        store.list_configs().unwrap();

        assert_eq!(store.configs(), ["a", "m"]);
        assert_eq!(store.state(), StoreState::Loaded(1));
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        let (temp_dir, mut store) = temp_store();
        fs::write(temp_dir.path().join("list"), "[1, 2, 3]").unwrap();
        store.list_configs().unwrap();

        assert!(matches!(store.load(0, false), Err(StoreError::NotAnObject(_))));
        assert_eq!(store.state(), StoreState::Listed);
    }

    #[test]
    fn test_reset_returns_to_listed() {
        let (_temp_dir, mut store) = temp_store();
        store.add("p").unwrap();
        store.load(0, false).unwrap();
        store.settings_mut().misc.bunny_hop = true;

        store.reset();
        assert_eq!(store.state(), StoreState::Listed);
        assert_eq!(store.settings(), &Settings::default());
    }
}
