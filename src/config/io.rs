//! Configuration file I/O operations

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::Config;
use crate::error::SettingsError;

impl Config {
    /// Get the global config directory path (~/.response-settings/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".response-settings")
    }

    /// Get the global config file path (~/.response-settings/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;

        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a file, or defaults when the file is missing.
    ///
    /// A file that exists but cannot be parsed is reported as an error so the
    /// caller decides whether to overwrite it.
    pub fn from_file_or_default(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file with atomic write and file locking.
    ///
    /// The parent directory is created if needed. Use [`ConfigFileLock`]
    /// directly when the write depends on what is currently on disk.
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        ConfigFileLock::acquire(path)?.save(self)
    }
}

/// Exclusive lock on `<path>.lock` held for a whole read-modify-write.
///
/// Every writer (CLI and GUI) goes through this lock, so a change is always
/// applied on top of the latest saved file.
#[derive(Debug)]
pub struct ConfigFileLock {
    path: PathBuf,
    _lock: File,
}

impl ConfigFileLock {
    /// Create the lock file next to `path` and block until it is ours
    pub fn acquire(path: &Path) -> Result<Self, SettingsError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
        }

        let lock_path = path.with_extension("toml.lock");
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| SettingsError::io(&lock_path, e))?;

        lock_file
            .lock_exclusive()
            .map_err(|source| SettingsError::Lock {
                path: lock_path,
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            _lock: lock_file,
        })
    }

    /// Read the locked file, or defaults when it is missing
    pub fn load(&self) -> Result<Config, SettingsError> {
        Config::from_file_or_default(&self.path)
    }

    /// Write `config` atomically: temp file, sync, rename over the target
    pub fn save(&self, config: &Config) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(config)?;

        let temp_path = self.path.with_extension("toml.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| SettingsError::io(&temp_path, e))?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| SettingsError::io(&temp_path, e))?;
        temp_file
            .sync_all()
            .map_err(|e| SettingsError::io(&temp_path, e))?;

        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| SettingsError::io(&self.path, e))?;

        tracing::debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResponseLength;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.responses.length = ResponseLength::Medium;
        config.responses.language = "ko".to_string();
        config.responses.auto_scroll = false;
        config.save_to_file(&path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(Config::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::from_file_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[responses]\nlength = \"enormous\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_lock_sees_file_written_by_other_writer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut other = Config::default();
        other.responses.language = "de".to_string();
        other.save_to_file(&path).unwrap();

        let lock = ConfigFileLock::acquire(&path).unwrap();
        let mut config = lock.load().unwrap();
        assert_eq!(config.responses.language, "de");

        config.responses.auto_scroll = false;
        lock.save(&config).unwrap();
        drop(lock);

        let on_disk = Config::from_file(&path).unwrap();
        assert_eq!(on_disk.responses.language, "de");
        assert!(!on_disk.responses.auto_scroll);
    }

    #[test]
    fn test_empty_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());
    }
}
