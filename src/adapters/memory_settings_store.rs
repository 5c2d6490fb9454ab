use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::SettingsStore;

/// In-memory settings store for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    options: HashMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.options.insert(key.to_string(), value.to_string());
        self
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.options.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.options.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
