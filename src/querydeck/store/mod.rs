//! # Storage Layer
//!
//! Every persisted setting lives behind the [`ConfigStore`] trait: a plain string
//! key/value capability. A successful `set` is visible to every later `get` in the
//! same process. `set_many` writes several keys as one unit: either all of them land
//! or none do.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `settings.json` map per data directory.
//!   Writes go through a temp file and a rename.
//! - [`memory::InMemoryStore`]: no persistence, used by tests. Can simulate write
//!   failures.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! └── settings.json   # {"customQueries": "[...]", "defaultSearchProvider": "d", ...}
//! ```
//!
//! Values are always strings. Structured values (`customQueries`) are JSON-encoded
//! by the [`crate::config`] accessors before they reach the store.

use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait ConfigStore {
    /// Read a value. `Ok(None)` when the key was never written (or was removed).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value. Callers must not assume the write happened unless this returns Ok.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Write several values at once. On error, none of them were written.
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()>;

    /// Remove a value. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
