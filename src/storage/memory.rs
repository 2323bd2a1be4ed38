use std::collections::HashMap;

use super::{Result, ScoreStore};

/// Process-lifetime store, nothing survives a restart
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single value
    pub fn with_value(key: &str, value: u32) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value);
        Self { values }
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<u32>> {
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, value: u32) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
