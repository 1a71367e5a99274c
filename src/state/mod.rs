use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

pub mod selection;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no census version available to select")]
    NoCensus,
}

/// Key/value store for UI selection state, holding JSON values.
pub trait StateStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value) -> Result<(), StateError>;
    fn remove(&mut self, key: &str) -> Result<(), StateError>;
}

/// Session-scoped store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StateError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StateError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Durable store backed by one JSON object file, rewritten on every change.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl FileStore {
    pub fn open(path: &Path) -> Result<Self, StateError> {
        let values = if path.exists() {
            let text = fs::read_to_string(path)?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&text)?
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    fn flush(&self) -> Result<(), StateError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StateError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), StateError> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/state/tests.rs"]
mod tests;
