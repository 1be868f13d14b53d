use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use crate::domain::{common::entities::app_errors::CoreError, state::ports::StatePersistence};

/// Process-local storage; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatePersistence {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStatePersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatePersistence for MemoryStatePersistence {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| CoreError::StorageError(format!("Lock error: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, payload: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| CoreError::StorageError(format!("Lock error: {}", e)))?;
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
