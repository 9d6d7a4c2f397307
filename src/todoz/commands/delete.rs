use crate::commands::helpers::find_or_report;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::repository::TodoRepository;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(repo: &mut TodoRepository<S>, id: &str) -> Result<CmdResult> {
    let todo = match find_or_report(repo, id)? {
        Ok(todo) => todo,
        Err(report) => return Ok(report),
    };

    if !repo.delete(&todo.id)? {
        return Ok(CmdResult::not_found(id));
    }

    Ok(CmdResult::success()
        .with_message(CmdMessage::success(format!(
            "Deleted todo {}: {}",
            todo.id, todo.title
        )))
        .with_todos(vec![todo]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{get, CmdStatus};
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn removes_todo() {
        let mut repo = StoreFixture::new().with_id("1", "Gone").with_id("2", "Stays").repo();

        let result = run(&mut repo, "1").unwrap();

        assert_eq!(result.status, CmdStatus::Success);
        assert_eq!(result.todos[0].title, "Gone");
        assert_eq!(get::run(&mut repo, "1").unwrap().status, CmdStatus::NotFound);
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn missing_id_is_not_found_without_write() {
        let mut repo = StoreFixture::new().with_todos(2).repo();

        let result = run(&mut repo, "999").unwrap();

        assert_eq!(result.status, CmdStatus::NotFound);
        assert_eq!(repo.store().save_count(), 0);
    }
}
