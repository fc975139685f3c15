//! Shared settings store used by the settings widgets
//!
//! Each widget holds a clone of a [`SettingsStore`] and reads or writes its
//! own field through it. Writes go straight to the backing config file.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::config::{Config, ConfigFileLock, ResponseSettings};
use crate::error::SettingsError;

static GLOBAL: OnceCell<SettingsStore> = OnceCell::new();

#[derive(Debug)]
struct StoreInner {
    config: Config,
    /// Backing file, `None` for in-memory stores
    path: Option<PathBuf>,
}

/// Cloneable handle to the loaded config and the file it persists to
#[derive(Debug, Clone)]
pub struct SettingsStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl SettingsStore {
    /// Open the store backed by `path`.
    ///
    /// A missing file gives defaults. An unreadable file is logged and also
    /// gives defaults; it is only overwritten on the next successful save.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = match Config::from_file_or_default(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config ({}): {}. Falling back to defaults.",
                    path.display(),
                    e
                );
                Config::default()
            }
        };
        debug!("Opened settings store at {}", path.display());
        Self::from_parts(config, Some(path))
    }

    /// A store with default settings that never touches the filesystem
    pub fn in_memory() -> Self {
        Self::from_parts(Config::default(), None)
    }

    fn from_parts(config: Config, path: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner { config, path })),
        }
    }

    /// Process-wide store, opened at the global config path on first use
    /// unless [`SettingsStore::install_global`] ran before.
    pub fn global() -> &'static SettingsStore {
        GLOBAL.get_or_init(|| Self::open(Config::global_config_path()))
    }

    /// Make `store` the process-wide store.
    ///
    /// Returns the store back if a global store already exists.
    pub fn install_global(store: SettingsStore) -> Result<(), SettingsStore> {
        GLOBAL.set(store)
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().expect("Settings store lock poisoned")
    }

    /// Backing file path, if any
    pub fn path(&self) -> Option<PathBuf> {
        self.lock().path.clone()
    }

    /// Snapshot of the current response settings
    pub fn responses(&self) -> ResponseSettings {
        self.lock().config.responses.clone()
    }

    /// Snapshot of the whole config
    pub fn config(&self) -> Config {
        self.lock().config.clone()
    }

    /// Apply `f` to the response settings and persist the result.
    ///
    /// For file-backed stores the file is re-read while the config lock is
    /// held and `f` is applied on top of it, so changes saved by another
    /// process (e.g. `response-settings set`) are kept. The in-memory copy
    /// is refreshed from that read.
    ///
    /// Returns `Ok(false)` without writing when `f` left the settings
    /// unchanged. On a failed write the in-memory change is kept so the UI
    /// stays consistent with what the user picked.
    pub fn update<F>(&self, f: F) -> Result<bool, SettingsError>
    where
        F: FnOnce(&mut ResponseSettings),
    {
        let mut inner = self.lock();
        let Some(path) = inner.path.clone() else {
            let before = inner.config.responses.clone();
            f(&mut inner.config.responses);
            return Ok(inner.config.responses != before);
        };

        let file_lock = ConfigFileLock::acquire(&path)?;
        let mut config = match file_lock.load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to re-read config before saving: {}", e);
                inner.config.clone()
            }
        };

        let before = config.responses.clone();
        f(&mut config.responses);
        let changed = config.responses != before;
        let saved = if changed {
            file_lock.save(&config)
        } else {
            Ok(())
        };

        inner.config = config;
        saved?;
        if changed {
            debug!("Response settings updated: {:?}", inner.config.responses);
        }
        Ok(changed)
    }

    /// Restore default response settings
    pub fn reset(&self) -> Result<bool, SettingsError> {
        self.update(|settings| *settings = ResponseSettings::default())
    }

    /// Re-read the backing file, discarding in-memory state.
    ///
    /// In-memory stores are left untouched.
    pub fn reload(&self) -> Result<(), SettingsError> {
        let mut inner = self.lock();
        if let Some(path) = inner.path.clone() {
            inner.config = Config::from_file_or_default(&path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResponseLength;
    use tempfile::tempdir;

    #[test]
    fn test_update_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let store = SettingsStore::open(&path);

        let changed = store.update(|s| s.length = ResponseLength::Short).unwrap();
        assert!(changed);

        let reopened = SettingsStore::open(&path);
        assert_eq!(reopened.responses().length, ResponseLength::Short);
    }

    #[test]
    fn test_noop_update_does_not_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let store = SettingsStore::open(&path);

        let changed = store.update(|s| s.auto_scroll = true).unwrap();
        assert!(!changed);
        assert!(!path.exists());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SettingsStore::in_memory();
        let other = store.clone();
        store.update(|s| s.language = "es".to_string()).unwrap();
        assert_eq!(other.responses().language, "es");
    }

    #[test]
    fn test_open_corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is = = not toml").unwrap();

        let store = SettingsStore::open(&path);
        assert_eq!(store.responses(), ResponseSettings::default());
        // Untouched until the next save
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "this is = = not toml"
        );
    }

    #[test]
    fn test_two_handles_on_one_file_keep_both_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let gui = SettingsStore::open(&path);
        let cli = SettingsStore::open(&path);

        cli.update(|s| s.language = "de".to_string()).unwrap();
        gui.update(|s| s.auto_scroll = false).unwrap();

        let on_disk = Config::from_file(&path).unwrap().responses;
        assert_eq!(on_disk.language, "de");
        assert!(!on_disk.auto_scroll);
        // The stale handle picked up the other writer's change
        assert_eq!(gui.responses(), on_disk);
    }

    #[test]
    fn test_noop_update_refreshes_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let gui = SettingsStore::open(&path);
        let cli = SettingsStore::open(&path);

        cli.update(|s| s.length = ResponseLength::Medium).unwrap();
        assert!(!gui.update(|s| s.auto_scroll = true).unwrap());
        assert_eq!(gui.responses().length, ResponseLength::Medium);
    }

    #[test]
    fn test_reset_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let store = SettingsStore::open(&path);
        store
            .update(|s| {
                s.length = ResponseLength::Medium;
                s.auto_scroll = false;
            })
            .unwrap();

        assert!(store.reset().unwrap());
        assert_eq!(store.responses(), ResponseSettings::default());

        // Another writer changes the file behind our back
        let mut config = Config::default();
        config.responses.language = "ja".to_string();
        config.save_to_file(&path).unwrap();

        store.reload().unwrap();
        assert_eq!(store.responses().language, "ja");
    }
}
