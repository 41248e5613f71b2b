use super::ConfigStore;
use crate::error::{QueryDeckError, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// In-memory store for testing.
///
/// Uses `RefCell` since the engine is single-threaded and the trait takes `&self`.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
    simulate_write_error: RefCell<bool>,
    writes_left: RefCell<Option<usize>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Let the next `n` writes succeed, then fail every write after them.
    /// A `set_many` counts as one write.
    pub fn fail_writes_after(&self, n: usize) {
        *self.writes_left.borrow_mut() = Some(n);
    }

    /// Copy of everything currently stored.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(QueryDeckError::Store("Simulated write error".to_string()));
        }
        let mut writes_left = self.writes_left.borrow_mut();
        match writes_left.as_mut() {
            Some(0) => Err(QueryDeckError::Store("Write limit reached".to_string())),
            Some(n) => {
                *n -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

impl ConfigStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        self.check_writable()?;
        let mut map = self.entries.borrow_mut();
        for (key, value) in entries {
            map.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
