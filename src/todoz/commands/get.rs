use crate::commands::helpers::find_or_report;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::repository::TodoRepository;
use crate::store::TodoStore;

pub fn run<S: TodoStore>(repo: &mut TodoRepository<S>, id: &str) -> Result<CmdResult> {
    let todo = match find_or_report(repo, id)? {
        Ok(todo) => todo,
        Err(report) => return Ok(report),
    };

    Ok(CmdResult::success().with_todos(vec![todo]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CmdStatus;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_matching_todo() {
        let mut repo = StoreFixture::new().with_id("1", "One").with_id("2", "Two").repo();

        let result = run(&mut repo, "2").unwrap();

        assert_eq!(result.status, CmdStatus::Success);
        assert_eq!(result.todos.len(), 1);
        assert_eq!(result.todos[0].title, "Two");
    }

    #[test]
    fn reports_missing_id() {
        let mut repo = StoreFixture::new().with_todos(2).repo();

        let result = run(&mut repo, "999").unwrap();

        assert_eq!(result.status, CmdStatus::NotFound);
        assert!(result.todos.is_empty());
        assert!(result.messages[0].content.contains("999"));
    }
}
