//! # Repository
//!
//! [`TodoRepository`] is the single point of truth for todos within a process.
//! It owns the in-memory set, loads it from the [`TodoStore`] on first access and
//! writes the entire set back after every mutation. A mutation is built on a
//! copy of the set and only replaces the cached set once the write succeeded,
//! so a failed save leaves the repository as it was before the call.
//!
//! Not-found is not an error here: lookups return `Option`, deletes return
//! `bool`, and neither touches the store when nothing matched. Storage faults
//! propagate as [`TodoError`].

use crate::error::{Result, TodoError};
use crate::model::{new_id, Todo, TodoPatch};
use crate::store::{StoreLoad, TodoStore};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What to do when the store exists but cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CorruptPolicy {
    /// Refuse to continue. The file is left untouched.
    #[default]
    Fail,
    /// Log a warning and start from an empty set. The next mutation
    /// overwrites the corrupt file.
    TreatAsEmpty,
}

pub struct TodoRepository<S: TodoStore> {
    store: S,
    todos: Vec<Todo>,
    initialized: bool,
    on_corrupt: CorruptPolicy,
}

impl<S: TodoStore> TodoRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            todos: Vec::new(),
            initialized: false,
            on_corrupt: CorruptPolicy::default(),
        }
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptPolicy) -> Self {
        self.on_corrupt = policy;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns a copy of every todo, in insertion order.
    pub fn find_all(&mut self) -> Result<Vec<Todo>> {
        self.load()?;
        Ok(self.todos.clone())
    }

    pub fn find_by_id(&mut self, id: &str) -> Result<Option<Todo>> {
        self.load()?;
        Ok(self.todos.iter().find(|t| t.id == id).cloned())
    }

    /// Every todo whose id starts with `prefix`.
    pub fn find_by_prefix(&mut self, prefix: &str) -> Result<Vec<Todo>> {
        self.load()?;
        Ok(self
            .todos
            .iter()
            .filter(|t| t.id.starts_with(prefix))
            .cloned()
            .collect())
    }

    pub fn create(&mut self, title: &str) -> Result<Todo> {
        self.load()?;

        let title = title.trim();
        if title.is_empty() {
            return Err(TodoError::EmptyTitle);
        }

        let mut todo = Todo::new(title);
        while self.todos.iter().any(|t| t.id == todo.id) {
            todo.id = new_id();
        }

        let mut next = self.todos.clone();
        next.push(todo.clone());
        self.commit(next)?;
        Ok(todo)
    }

    /// Applies `patch` to the todo with `id`. Returns `None` without writing
    /// when no such todo exists.
    pub fn update(&mut self, id: &str, patch: &TodoPatch) -> Result<Option<Todo>> {
        self.load()?;

        let Some(index) = self.todos.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        if matches!(&patch.title, Some(title) if title.trim().is_empty()) {
            return Err(TodoError::EmptyTitle);
        }

        let mut next = self.todos.clone();
        next[index].apply(patch);
        let updated = next[index].clone();
        self.commit(next)?;
        Ok(Some(updated))
    }

    /// Removes the first todo with `id`. Persists only if something was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        self.load()?;

        let Some(index) = self.todos.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        let mut next = self.todos.clone();
        next.remove(index);
        self.commit(next)?;
        Ok(true)
    }

    fn load(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }

        self.todos = match self.store.load()? {
            StoreLoad::Empty => Vec::new(),
            StoreLoad::Loaded(todos) => todos,
            StoreLoad::Corrupt(cause) => match self.on_corrupt {
                CorruptPolicy::Fail => {
                    return Err(TodoError::CorruptStore {
                        location: self.store.location(),
                        cause,
                    })
                }
                CorruptPolicy::TreatAsEmpty => {
                    warn!(
                        "ignoring corrupt todo store at {}: {}",
                        self.store.location(),
                        cause
                    );
                    Vec::new()
                }
            },
        };

        debug!(
            "loaded {} todos from {}",
            self.todos.len(),
            self.store.location()
        );
        self.warn_on_duplicate_ids();
        self.initialized = true;
        Ok(())
    }

    // Lookups, updates and deletes act on the first todo with a given id
    fn warn_on_duplicate_ids(&self) {
        let mut seen = HashSet::new();
        for todo in &self.todos {
            if !seen.insert(todo.id.as_str()) {
                warn!(
                    "todo store at {} has duplicate id {}",
                    self.store.location(),
                    todo.id
                );
            }
        }
    }

    /// Writes `next` and, once the write succeeded, makes it the cached set.
    fn commit(&mut self, next: Vec<Todo>) -> Result<()> {
        self.store.save(&next)?;
        self.todos = next;
        Ok(())
    }
}
