//! Context wiring and per-command handlers.
//!
//! Handlers call the API, print what comes back and report the command status;
//! `run` maps that status to the process exit code.

use super::prompt::{ask, ask_non_empty, confirm};
use super::render::{print_messages, render_todo_detail, render_todo_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use log::debug;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use todoz::api::{CmdResult, CmdStatus, TodoApi};
use todoz::config::{self, BaseDirs};
use todoz::error::Result;
use todoz::logging;
use todoz::model::Todo;
use todoz::repository::TodoRepository;
use todoz::store::fs::FileStore;

struct AppContext {
    api: TodoApi<FileStore>,
    interactive: bool,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    let status = match cli.command {
        Some(Commands::List) | None => handle_list(&mut ctx)?,
        Some(Commands::Get { id }) => handle_get(&mut ctx, &id)?,
        Some(Commands::Add { title }) => handle_add(&mut ctx, title)?,
        Some(Commands::Update {
            id,
            title,
            completed,
        }) => handle_update(&mut ctx, &id, title, completed)?,
        Some(Commands::Toggle { id }) => finish(ctx.api.toggle_todo(&id)?),
        Some(Commands::Delete { id, force }) => handle_delete(&mut ctx, &id, force)?,
    };

    Ok(ExitCode::from(exit_status(status)))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let base = BaseDirs::from_platform()?;
    let (config, paths) = config::resolve(&base, cli.data_file.clone(), |key| {
        std::env::var(key).ok()
    })?;
    debug!("using todo store at {}", paths.data_file.display());

    let repo = TodoRepository::new(FileStore::new(paths.data_file))
        .with_corrupt_policy(config.on_corrupt);

    Ok(AppContext {
        api: TodoApi::new(repo),
        interactive: io::stdin().is_terminal(),
    })
}

fn exit_status(status: CmdStatus) -> u8 {
    if status.is_failure() {
        1
    } else {
        0
    }
}

/// Prints the messages of a finished command and hands back its status.
fn finish(result: CmdResult) -> CmdStatus {
    print_messages(&result.messages);
    result.status
}

fn cancelled(message: &str) -> CmdStatus {
    finish(CmdResult::cancelled(message))
}

fn handle_list(ctx: &mut AppContext) -> Result<CmdStatus> {
    let result = ctx.api.list_todos()?;
    print!("{}", render_todo_list(&result.todos));
    Ok(finish(result))
}

fn handle_get(ctx: &mut AppContext, id: &str) -> Result<CmdStatus> {
    let result = ctx.api.get_todo(id)?;
    for todo in &result.todos {
        print!("{}", render_todo_detail(todo));
    }
    Ok(finish(result))
}

fn handle_add(ctx: &mut AppContext, title: Option<String>) -> Result<CmdStatus> {
    let title = match title {
        Some(title) => title,
        None if ctx.interactive => {
            let answer = ask_non_empty(
                &mut io::stdin().lock(),
                &mut io::stdout(),
                "Title: ",
                "A title is required.",
            )?;
            match answer {
                Some(title) => title,
                None => return Ok(cancelled("No todo added.")),
            }
        }
        // Let the command layer report the missing title
        None => String::new(),
    };

    Ok(finish(ctx.api.create_todo(&title)?))
}

fn handle_update(
    ctx: &mut AppContext,
    id: &str,
    title: Option<String>,
    completed: Option<bool>,
) -> Result<CmdStatus> {
    if title.is_none() && completed.is_none() && ctx.interactive {
        return handle_update_interactive(ctx, id);
    }

    Ok(finish(ctx.api.update_todo(id, title.as_deref(), completed)?))
}

fn handle_update_interactive(ctx: &mut AppContext, id: &str) -> Result<CmdStatus> {
    let todo = match lookup(ctx, id)? {
        Ok(todo) => todo,
        Err(status) => return Ok(status),
    };
    print!("{}", render_todo_detail(&todo));

    let mut input = io::stdin().lock();
    let mut output = io::stdout();
    let new_title = ask(&mut input, &mut output, "New title (leave blank to keep): ")?
        .filter(|t| !t.trim().is_empty());
    let flip = confirm(&mut input, &mut output, "Toggle completed state?")?;

    if new_title.is_none() && !flip {
        return Ok(cancelled("No changes made."));
    }

    let completed = flip.then_some(!todo.completed);
    Ok(finish(ctx.api.update_todo(
        &todo.id,
        new_title.as_deref(),
        completed,
    )?))
}

fn handle_delete(ctx: &mut AppContext, id: &str, force: bool) -> Result<CmdStatus> {
    if force {
        return Ok(finish(ctx.api.delete_todo(id)?));
    }

    let todo = match lookup(ctx, id)? {
        Ok(todo) => todo,
        Err(status) => return Ok(status),
    };

    let question = format!("Delete \"{}\" ({})?", todo.title, todo.id);
    if !confirm(&mut io::stdin().lock(), &mut io::stdout(), &question)? {
        return Ok(cancelled("Deletion cancelled."));
    }

    Ok(finish(ctx.api.delete_todo(&todo.id)?))
}

/// Fetches the todo behind `id`, printing the failure when there is none.
fn lookup(ctx: &mut AppContext, id: &str) -> Result<std::result::Result<Todo, CmdStatus>> {
    let mut result = ctx.api.get_todo(id)?;
    if result.status != CmdStatus::Success || result.todos.is_empty() {
        return Ok(Err(finish(result)));
    }
    Ok(Ok(result.todos.remove(0)))
}
