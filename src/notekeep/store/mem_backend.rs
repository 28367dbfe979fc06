use super::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since notekeep is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: Cell<bool>,
    simulate_read_error: Cell<bool>,
    writes: Cell<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `value` under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Enable read error simulation for testing load fallbacks.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.set(simulate);
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw stored value, bypassing error simulation.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        if self.simulate_read_error.get() {
            return Err(StorageError::Backend("Simulated read error".to_string()));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.simulate_write_error.get() {
            return Err(StorageError::Backend("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
