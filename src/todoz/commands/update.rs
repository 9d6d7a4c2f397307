use crate::commands::helpers::{find_or_report, validated_title};
use crate::commands::{CmdMessage, CmdResult, CmdStatus};
use crate::error::Result;
use crate::model::TodoPatch;
use crate::repository::TodoRepository;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(
    repo: &mut TodoRepository<S>,
    id: &str,
    title: Option<&str>,
    completed: Option<bool>,
) -> Result<CmdResult> {
    let todo = match find_or_report(repo, id)? {
        Ok(todo) => todo,
        Err(report) => return Ok(report),
    };

    let title = match title {
        Some(raw) => match validated_title(raw) {
            Some(title) => Some(title.to_string()),
            None => return Ok(CmdResult::invalid("Title cannot be empty.")),
        },
        None => None,
    };

    let patch = TodoPatch { title, completed };
    if patch.is_empty() {
        return Ok(CmdResult {
            status: CmdStatus::Invalid,
            ..CmdResult::default()
        }
        .with_message(CmdMessage::warning(
            "Nothing to update: pass a title or a completed state.",
        )));
    }

    match repo.update(&todo.id, &patch)? {
        Some(updated) => Ok(CmdResult::success()
            .with_message(CmdMessage::success(format!("Updated todo {}.", updated.id)))
            .with_todos(vec![updated])),
        None => Ok(CmdResult::not_found(id)),
    }
}
