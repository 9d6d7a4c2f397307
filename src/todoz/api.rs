//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! todo operation, whatever the UI.
//!
//! The facade dispatches to `commands::<verb>::run` and returns the structured
//! [`CmdResult`]. It holds no business logic and does no I/O of its own.
//!
//! `TodoApi<S: TodoStore>` is generic over the storage backend:
//! - Production: `TodoApi<FileStore>`
//! - Testing: `TodoApi<InMemoryStore>`
//!
//! The entry point builds one instance per process and passes it down; there is
//! no global repository.

use crate::commands;
use crate::error::Result;
use crate::repository::TodoRepository;
use crate::store::TodoStore;

pub struct TodoApi<S: TodoStore> {
    repo: TodoRepository<S>,
}

impl<S: TodoStore> TodoApi<S> {
    pub fn new(repo: TodoRepository<S>) -> Self {
        Self { repo }
    }

    pub fn list_todos(&mut self) -> Result<CmdResult> {
        commands::list::run(&mut self.repo)
    }

    pub fn get_todo(&mut self, id: &str) -> Result<CmdResult> {
        commands::get::run(&mut self.repo, id)
    }

    pub fn create_todo(&mut self, title: &str) -> Result<CmdResult> {
        commands::create::run(&mut self.repo, title)
    }

    pub fn update_todo(
        &mut self,
        id: &str,
        title: Option<&str>,
        completed: Option<bool>,
    ) -> Result<CmdResult> {
        commands::update::run(&mut self.repo, id, title, completed)
    }

    pub fn toggle_todo(&mut self, id: &str) -> Result<CmdResult> {
        commands::toggle::run(&mut self.repo, id)
    }

    pub fn delete_todo(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.repo, id)
    }

    pub fn repository(&self) -> &TodoRepository<S> {
        &self.repo
    }

    pub fn into_repository(self) -> TodoRepository<S> {
        self.repo
    }
}

pub use crate::commands::{CmdMessage, CmdResult, CmdStatus, MessageLevel};
pub use crate::repository::CorruptPolicy;
