//! # Command Layer
//!
//! One module per user verb. Each `run` function takes the repository plus the
//! raw user input, validates it, performs the action and returns a [`CmdResult`].
//!
//! Commands never print. Not-found and validation failures are outcomes, reported
//! through [`CmdStatus`] and [`CmdMessage`]; only storage faults are errors.

use crate::model::Todo;

pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod toggle;
pub mod update;

/// Overall outcome of a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CmdStatus {
    #[default]
    Success,
    NotFound,
    Invalid,
    Cancelled,
}

impl CmdStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, CmdStatus::NotFound | CmdStatus::Invalid)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub status: CmdStatus,
    pub todos: Vec<Todo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn not_found(id: &str) -> Self {
        Self::failure(
            CmdStatus::NotFound,
            CmdMessage::error(format!("No todo found with ID: {}", id)),
        )
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::failure(CmdStatus::Invalid, CmdMessage::error(message))
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::failure(CmdStatus::Cancelled, CmdMessage::info(message))
    }

    fn failure(status: CmdStatus, message: CmdMessage) -> Self {
        Self {
            status,
            todos: Vec::new(),
            messages: vec![message],
        }
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_todos(mut self, todos: Vec<Todo>) -> Self {
        self.todos = todos;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
