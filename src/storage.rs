//! Key-value JSON persistence.
//!
//! One JSON file per key in a data directory. Every mutation writes through
//! synchronously; there is no batching and no async I/O.

use crate::ledger::Ledger;
use crate::types::{Task, UserProgress};
use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Storage key for the ordered task collection.
pub const TASKS_KEY: &str = "tasks";
/// Storage key for the XP counters and goals.
pub const PROGRESS_KEY: &str = "user_progress";
/// Storage key for the undo slot, so `undo` works across invocations.
pub const LAST_DELETED_KEY: &str = "last_deleted";
/// Storage key for the dark-mode preference.
pub const THEME_KEY: &str = "theme";

/// File-backed key-value store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    /// Open the store, creating the data directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Platform data directory for taskflow, e.g. `~/.local/share/taskflow`.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("taskflow"))
            .unwrap_or_else(|| PathBuf::from(".taskflow"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Whether a key has ever been written.
    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }

    /// Read and decode a key. `None` if the key has never been written.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let value = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Some(value))
    }

    /// Encode and write a key.
    pub fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let raw = serde_json::to_string_pretty(value).context("failed to encode value")?;
        fs::write(&path, raw).with_context(|| format!("failed to write {}", path.display()))?;
        debug!(key, "persisted");
        Ok(())
    }

    /// Delete a key. Missing keys are fine.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        }
        Ok(())
    }

    /// Load the full ledger state.
    ///
    /// A key that fails to parse is logged and treated as absent rather than
    /// aborting startup; a corrupted save should never lock the user out.
    pub fn load_ledger(&self) -> Ledger {
        let tasks: Vec<Task> = self.load_or_default(TASKS_KEY);
        let progress: UserProgress = self.load_or_default(PROGRESS_KEY);
        let last_deleted: Option<Task> = self.load_or_default(LAST_DELETED_KEY);
        Ledger::from_parts(tasks, progress, last_deleted)
    }

    /// Write through the full ledger state.
    pub fn save_ledger(&self, ledger: &Ledger) -> Result<()> {
        self.store(TASKS_KEY, &ledger.tasks())?;
        self.store(PROGRESS_KEY, ledger.progress())?;
        match ledger.last_deleted() {
            Some(task) => self.store(LAST_DELETED_KEY, task)?,
            None => self.remove(LAST_DELETED_KEY)?,
        }
        Ok(())
    }

    pub fn load_theme(&self) -> bool {
        self.load_or_default(THEME_KEY)
    }

    pub fn save_theme(&self, dark_mode: bool) -> Result<()> {
        self.store(THEME_KEY, &dark_mode)
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.load(key) {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(err) => {
                warn!(key, error = %err, "discarding unreadable saved state");
                T::default()
            }
        }
    }
}
