use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::TodoRepository;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(repo: &mut TodoRepository<S>) -> Result<CmdResult> {
    let todos = repo.find_all()?;
    let mut result = CmdResult::success();

    if todos.is_empty() {
        result.add_message(CmdMessage::info("No todos yet. Add one to get started!"));
    }

    Ok(result.with_todos(todos))
}
