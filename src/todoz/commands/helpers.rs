use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Todo;
use crate::repository::TodoRepository;
use crate::store::TodoStore;

/// Shortest id prefix accepted in place of a full id.
pub const MIN_PREFIX_LEN: usize = 4;

/// How a user-supplied id resolved against the repository.
#[derive(Debug)]
pub enum Resolved {
    Found(Todo),
    NotFound,
    Ambiguous(Vec<Todo>),
}

/// Resolves `input` to a single todo: an exact id match wins, otherwise a
/// unique prefix of at least [`MIN_PREFIX_LEN`] characters.
pub fn resolve_id<S: TodoStore>(repo: &mut TodoRepository<S>, input: &str) -> Result<Resolved> {
    let input = input.trim();
    if let Some(todo) = repo.find_by_id(input)? {
        return Ok(Resolved::Found(todo));
    }
    if input.chars().count() < MIN_PREFIX_LEN {
        return Ok(Resolved::NotFound);
    }

    let mut matches = repo.find_by_prefix(input)?;
    Ok(match matches.len() {
        0 => Resolved::NotFound,
        1 => Resolved::Found(matches.remove(0)),
        _ => Resolved::Ambiguous(matches),
    })
}

/// Resolves `input`, or builds the result a command should return when it
/// does not name exactly one todo.
pub fn find_or_report<S: TodoStore>(
    repo: &mut TodoRepository<S>,
    input: &str,
) -> Result<std::result::Result<Todo, CmdResult>> {
    Ok(match resolve_id(repo, input)? {
        Resolved::Found(todo) => Ok(todo),
        Resolved::NotFound => Err(CmdResult::not_found(input)),
        Resolved::Ambiguous(todos) => {
            let ids: Vec<&str> = todos.iter().map(|t| t.id.as_str()).collect();
            Err(CmdResult::invalid(format!(
                "ID {} is ambiguous, it matches: {}",
                input,
                ids.join(", ")
            )))
        }
    })
}

/// Validates a title for storage, returning it trimmed.
pub fn validated_title(title: &str) -> Option<&str> {
    let trimmed = title.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
