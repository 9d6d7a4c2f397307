use crate::commands::helpers::validated_title;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::TodoRepository;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(repo: &mut TodoRepository<S>, title: &str) -> Result<CmdResult> {
    let Some(title) = validated_title(title) else {
        return Ok(CmdResult::invalid("Title is required."));
    };

    let todo = repo.create(title)?;
    Ok(CmdResult::success()
        .with_message(CmdMessage::success(format!("Added \"{}\".", todo.title)))
        .with_todos(vec![todo]))
}
