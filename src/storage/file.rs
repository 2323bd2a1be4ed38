//! JSON file backend
//!
//! The file holds one flat object mapping keys to integers, e.g.
//! `{ "snake_high_score": 120 }`. Unknown keys are preserved on write.

use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{Result, ScoreStore, StoreError};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole object; a missing file reads as empty
    fn load(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ScoreStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<u32>> {
        let values = self.load()?;

        match values.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| StoreError::NotAScore {
                    key: key.to_string(),
                }),
        }
    }

    fn set(&mut self, key: &str, value: u32) -> Result<()> {
        // A corrupt file is replaced rather than blocking every later write
        let mut values = match self.load() {
            Ok(values) => values,
            Err(StoreError::Json { .. }) => Map::new(),
            Err(e) => return Err(e),
        };
        values.insert(key.to_string(), Value::from(value));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let json = serde_json::to_string_pretty(&values).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}
