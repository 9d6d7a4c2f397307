use crate::commands::helpers::find_or_report;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::TodoPatch;
use crate::repository::TodoRepository;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(repo: &mut TodoRepository<S>, id: &str) -> Result<CmdResult> {
    let todo = match find_or_report(repo, id)? {
        Ok(todo) => todo,
        Err(report) => return Ok(report),
    };

    let Some(updated) = repo.update(&todo.id, &TodoPatch::completed(!todo.completed))? else {
        return Ok(CmdResult::not_found(id));
    };

    let state = if updated.completed {
        "completed"
    } else {
        "pending"
    };
    Ok(CmdResult::success()
        .with_message(CmdMessage::success(format!(
            "Marked \"{}\" as {}.",
            updated.title, state
        )))
        .with_todos(vec![updated]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CmdStatus;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn flips_completion_both_ways() {
        let mut repo = StoreFixture::new().with_id("1", "Flip").repo();

        let first = run(&mut repo, "1").unwrap();
        assert!(first.todos[0].completed);
        assert_eq!(first.messages[0].content, "Marked \"Flip\" as completed.");

        let second = run(&mut repo, "1").unwrap();
        assert!(!second.todos[0].completed);
        assert_eq!(repo.store().save_count(), 2);
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut repo = StoreFixture::new().with_todos(1).repo();

        let result = run(&mut repo, "nope").unwrap();

        assert_eq!(result.status, CmdStatus::NotFound);
        assert_eq!(repo.store().save_count(), 0);
    }
}
