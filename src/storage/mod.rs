//! Durable key-value storage for the high score
//!
//! The engine only ever reads one key at startup and writes it again whenever
//! a new high score is reached. Both backends implement [`ScoreStore`]:
//! - [`FileStore`] keeps a small JSON object on disk
//! - [`MemoryStore`] lives for the process only (tests, `--no-save`)

pub mod file;
pub mod memory;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Key the high score is stored under
pub const HIGH_SCORE_KEY: &str = "snake_high_score";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access score file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score file {path:?} is not a JSON object")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("value stored under {key:?} is not a score")]
    NotAScore { key: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Scalar integer storage addressed by key
pub trait ScoreStore {
    /// Read the value under `key`, `None` when it was never written
    fn get(&self, key: &str) -> Result<Option<u32>>;

    /// Overwrite the value under `key`
    fn set(&mut self, key: &str, value: u32) -> Result<()>;
}
