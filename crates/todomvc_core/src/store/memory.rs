use super::{KeyValueStore, StoreResult};
use std::collections::HashMap;

/// Process-local store. Contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
