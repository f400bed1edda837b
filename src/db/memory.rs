//! In-memory key-value store for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io;

use super::{DbError, DbResult, KeyValueStore};

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    offline: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.items.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }

    /// While offline, every read and write fails with an IO error
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    fn check_online(&self) -> DbResult<()> {
        if self.offline.get() {
            return Err(DbError::Io(io::Error::other("storage offline")));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> DbResult<Option<String>> {
        self.check_online()?;
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> DbResult<()> {
        self.check_online()?;
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
