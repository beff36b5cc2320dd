//! Result cache: last-known-good standings persistence.
//!
//! A deliberately small key/value surface. The file-backed implementation
//! keeps a flat JSON object on disk; a missing or unreadable file is
//! treated as an empty cache, never an error.

use crate::error::PipelineError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the orchestrator stores the serialized snapshot.
pub const STANDINGS_KEY: &str = "standings:latest";

pub trait ResultCache: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;

    fn save(&self, key: &str, value: &str) -> Result<(), PipelineError>;
}

/// JSON-file-backed cache: `{ "key": "value", ... }`.
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> HashMap<String, String> {
        if !Path::new(&self.path).exists() {
            return HashMap::new();
        }
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }
}

impl ResultCache for FileCache {
    fn load(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PipelineError> {
        let mut all = self.read_all();
        all.insert(key.to_string(), value.to_string());
        let content = serde_json::to_string_pretty(&all)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory cache for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryCache {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultCache for MemoryCache {
    fn load(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PipelineError> {
        self.inner.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
