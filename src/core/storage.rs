//! # Task Storage
//!
//! Persists the task list as a JSON array of strings in a named slot.
//!
//! ```text
//! ~/.tasklist/storage/
//! └── tasks.json      ["Buy milk", "Walk dog"]
//! ```
//!
//! Reads never fail from the caller's point of view: a missing or corrupt
//! slot loads as an empty list. Writes replace the whole slot and go through
//! `.tmp` + `rename()` so a crash never leaves a half-written array behind.
//!
//! The controller only sees the [`TaskStore`] trait, so tests swap in
//! [`MemoryStore`] instead of touching the filesystem.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Default slot name for the task array.
pub const DEFAULT_SLOT: &str = "tasks";

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Encode(serde_json::Error),
    InvalidSlot(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O error: {e}"),
            StoreError::Encode(e) => write!(f, "storage encode error: {e}"),
            StoreError::InvalidSlot(name) => write!(f, "invalid slot name: {name:?}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Encode(e) => Some(e),
            StoreError::InvalidSlot(_) => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

// ============================================================================
// Store Trait
// ============================================================================

/// A persistent slot holding an ordered list of task strings.
///
/// Implementors provide `load` and `save`; `append` and `remove_first` are
/// read-modify-write helpers built on top of them.
pub trait TaskStore {
    /// Returns the stored list, or an empty list if the slot is absent or
    /// unreadable.
    fn load(&self) -> Vec<String>;

    /// Replaces the slot's entire contents with `tasks`.
    fn save(&mut self, tasks: &[String]) -> Result<(), StoreError>;

    /// Appends one task to the end of the stored list.
    fn append(&mut self, task: &str) -> Result<(), StoreError> {
        let mut tasks = self.load();
        tasks.push(task.to_string());
        self.save(&tasks)
    }

    /// Removes the first stored entry equal to `task`.
    ///
    /// Returns `Ok(false)` without writing when nothing matches.
    fn remove_first(&mut self, task: &str) -> Result<bool, StoreError> {
        let mut tasks = self.load();
        match tasks.iter().position(|t| t == task) {
            Some(index) => {
                tasks.remove(index);
                self.save(&tasks)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Decode a raw slot value. Anything that is not a JSON array of strings
/// degrades to an empty list.
pub fn decode_slot(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(tasks) => tasks,
        Err(e) => {
            warn!("Discarding unreadable task slot: {}", e);
            Vec::new()
        }
    }
}

/// Encode a task list as the raw slot value.
pub fn encode_slot(tasks: &[String]) -> Result<String, StoreError> {
    serde_json::to_string(tasks).map_err(StoreError::Encode)
}

/// Slot names become file names, so keep them to one plain path component.
fn validate_slot(name: &str) -> Result<(), StoreError> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_control);
    if bad {
        return Err(StoreError::InvalidSlot(name.to_string()));
    }
    Ok(())
}

// ============================================================================
// JSON File Store
// ============================================================================

/// File-backed store: one slot is `<dir>/<slot>.json`.
#[derive(Debug, Clone)]
pub struct JsonSlotStore {
    dir: PathBuf,
    slot: String,
}

impl JsonSlotStore {
    pub fn new(dir: impl Into<PathBuf>, slot: &str) -> Result<Self, StoreError> {
        validate_slot(slot)?;
        Ok(Self {
            dir: dir.into(),
            slot: slot.to_string(),
        })
    }

    /// Path of the slot file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.slot))
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }
}

/// Atomically write `contents` to `path` (via `.tmp` + rename).
fn atomic_write(path: &Path, contents: &str) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

impl TaskStore for JsonSlotStore {
    fn load(&self) -> Vec<String> {
        let path = self.path();
        match fs::read_to_string(&path) {
            Ok(raw) => decode_slot(&raw),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No task slot at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read task slot {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&mut self, tasks: &[String]) -> Result<(), StoreError> {
        let json = encode_slot(tasks)?;
        fs::create_dir_all(&self.dir)?;
        atomic_write(&self.path(), &json)?;
        debug!("Saved {} task(s) to {}", tasks.len(), self.path().display());
        Ok(())
    }
}

// ============================================================================
// In-Memory Store
// ============================================================================

/// Store that keeps the raw slot value in memory.
///
/// The raw string is kept (rather than a `Vec`) so corrupt contents go
/// through the same decode path as the file store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    raw: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary raw slot value, valid or not.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: Some(raw.to_string()),
            writes: 0,
        }
    }

    pub fn with_tasks(tasks: &[&str]) -> Self {
        let owned: Vec<String> = tasks.iter().map(|t| t.to_string()).collect();
        Self {
            raw: serde_json::to_string(&owned).ok(),
            writes: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful `save` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> Vec<String> {
        self.raw.as_deref().map(decode_slot).unwrap_or_default()
    }

    fn save(&mut self, tasks: &[String]) -> Result<(), StoreError> {
        self.raw = Some(encode_slot(tasks)?);
        self.writes += 1;
        Ok(())
    }
}
