use super::{parse_contents, StoreLoad, TodoStore};
use crate::error::{Result, TodoError};
use crate::model::Todo;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Contents are kept serialized so loading goes through the same parsing path
/// as the file store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contents: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: &[Todo]) -> Result<Self> {
        let contents = serde_json::to_string_pretty(todos).map_err(TodoError::Serialization)?;
        Ok(Self {
            contents: Some(contents),
            saves: 0,
        })
    }

    pub fn with_raw(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            saves: 0,
        }
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn raw(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl TodoStore for InMemoryStore {
    fn load(&self) -> Result<StoreLoad> {
        Ok(match &self.contents {
            None => StoreLoad::Empty,
            Some(raw) => parse_contents(raw),
        })
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.contents =
            Some(serde_json::to_string_pretty(todos).map_err(TodoError::Serialization)?);
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::repository::TodoRepository;

    pub struct StoreFixture {
        todos: Vec<Todo>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self { todos: Vec::new() }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self.todos.push(Todo::new(&format!("Test Todo {}", i + 1)));
            }
            self
        }

        pub fn with_pending(mut self, title: &str) -> Self {
            self.todos.push(Todo::new(title));
            self
        }

        pub fn with_completed(mut self, title: &str) -> Self {
            let mut todo = Todo::new(title);
            todo.completed = true;
            self.todos.push(todo);
            self
        }

        pub fn with_id(mut self, id: &str, title: &str) -> Self {
            let mut todo = Todo::new(title);
            todo.id = id.to_string();
            self.todos.push(todo);
            self
        }

        pub fn todos(&self) -> &[Todo] {
            &self.todos
        }

        pub fn store(&self) -> InMemoryStore {
            InMemoryStore::with_todos(&self.todos).unwrap()
        }

        pub fn repo(&self) -> TodoRepository<InMemoryStore> {
            TodoRepository::new(self.store())
        }
    }
}
