//! Locale preference persistence.
//!
//! The site remembers a single value: the last locale the visitor chose.
//! [`PreferenceStore`] is the host's key-value capability; two implementations
//! ship with the crate.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Key under which the chosen locale is stored.
pub const PREFERRED_LANGUAGE_KEY: &str = "preferred-language";

/// Minimal key-value persistence capability.
pub trait PreferenceStore {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, overwriting any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Non-persistent store, for tests and hosts without storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file.
///
/// The file is read once on open and rewritten in full on every `set`.
/// A missing file starts empty; an unreadable or malformed file is treated
/// the same way so that a corrupt preference never blocks startup.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FilePreferenceStore {
    /// Open a store at `path`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|content| match serde_json::from_str(&content) {
                Ok(values) => Some(values),
                Err(e) => {
                    debug!("Ignoring malformed preference file {}: {}", path.display(), e);
                    None
                }
            })
            .unwrap_or_default();

        Self { path, values }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        let json = serde_json::to_string_pretty(&self.values)
            .context("Failed to serialize preferences")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))?;
        Ok(())
    }
}
