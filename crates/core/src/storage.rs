//! Injected persistence capability.
//!
//! The browser shell backs this with sessionStorage/localStorage; tests
//! and the CLI use the in-memory implementation. Writes are synchronous
//! and visible to the very next read. Single writer assumed: two tabs
//! sharing one session store may race, and the core makes no provision
//! for that.

use std::collections::HashMap;

/// Session key for the collected-prompts list (JSON array).
pub const COLLECTED_KEY: &str = "econ-ai-collected";

/// Session key for the per-slide notes map (JSON object).
pub const NOTES_KEY: &str = "econ-ai-custom-notes";

/// Session key for the current-slide pointer (decimal integer).
pub const CURRENT_SLIDE_KEY: &str = "econ-ai-current-slide";

/// Profile key for the learner intake data (JSON object).
pub const INTAKE_KEY: &str = "econ-ai-intake";

/// A string-keyed, string-valued store.
pub trait KeyValueStore {
    /// The value for a key, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Insert or overwrite a value.
    fn set(&mut self, key: &str, value: &str);

    /// Delete a key if present.
    fn remove(&mut self, key: &str);
}

/// HashMap-backed store for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
