//! # Storage Layer
//!
//! The [`TodoStore`] trait is the only thing that knows where todos live on disk.
//! The repository reads the whole set once per process and writes the whole set
//! back after every mutation, so a store only needs two operations.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - A single pretty-printed JSON array (`todos.json`)
//!   - Parent directory is created on first access
//!   - Writes go through a temp file and a rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - Counts writes so tests can assert that nothing was persisted
//!   - Can be seeded absent, with todos, or with corrupt contents
//!
//! ## Load Outcomes
//!
//! Loading distinguishes an absent store (expected on first run) from one that is
//! present but unreadable as todos. The caller decides what to do with the latter;
//! see [`crate::repository::CorruptPolicy`].
//!
//! ```text
//! ~/.local/share/todoz/
//! └── todos.json    # [{"id": "...", "title": "...", "completed": false, "createdAt": "..."}]
//! ```

use crate::error::Result;
use crate::model::Todo;

pub mod fs;
pub mod memory;

/// Result of reading the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLoad {
    /// No store exists yet, or it holds no data.
    Empty,
    Loaded(Vec<Todo>),
    /// The store exists but its contents could not be parsed.
    Corrupt(String),
}

/// Abstract interface for todo persistence.
pub trait TodoStore {
    /// Read the full set of todos.
    ///
    /// Only genuine I/O faults are returned as errors. Absence and corruption
    /// are reported through [`StoreLoad`].
    fn load(&self) -> Result<StoreLoad>;

    /// Replace the persisted set with `todos`.
    fn save(&mut self, todos: &[Todo]) -> Result<()>;

    /// Human readable location, used in diagnostics.
    fn location(&self) -> String;
}

/// Parses raw store contents. Shared by every backend so they agree on what
/// counts as empty and what counts as corrupt.
pub(crate) fn parse_contents(raw: &str) -> StoreLoad {
    if raw.trim().is_empty() {
        return StoreLoad::Empty;
    }
    match serde_json::from_str::<Vec<Todo>>(raw) {
        Ok(todos) => StoreLoad::Loaded(todos),
        Err(e) => StoreLoad::Corrupt(e.to_string()),
    }
}
