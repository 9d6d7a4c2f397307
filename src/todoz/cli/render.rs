use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use timeago::Formatter;
use todoz::api::{CmdMessage, MessageLevel};
use todoz::model::Todo;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const SEPARATOR: &str = "-------------------";
const DONE_MARKER: &str = "✓";
const PENDING_MARKER: &str = "✗";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.yellow()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// The list view: one line per todo between separators, with a count footer.
pub(super) fn render_todo_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(&format!("\n{}\n{}\n", "Todos:".bold(), SEPARATOR));

    for todo in todos {
        let status = if todo.completed {
            DONE_MARKER.green()
        } else {
            PENDING_MARKER.red()
        };
        let id = format!("[{}]", todo.id);
        let date = format!("({})", format_date(todo.created_at));

        // status, spaces and date are fixed; the title gets what is left
        let fixed = DONE_MARKER.width() + id.width() + date.width() + 3;
        let title = truncate_to_width(&todo.title, LINE_WIDTH.saturating_sub(fixed));
        let title = if todo.completed {
            title.dimmed()
        } else {
            title.normal()
        };

        out.push_str(&format!("{} {} {} {}\n", status, id, title, date));
    }

    let done = todos.iter().filter(|t| t.completed).count();
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format!(
        "{} {}, {} completed\n",
        todos.len(),
        if todos.len() == 1 { "item" } else { "items" },
        done
    ));
    out
}

/// The detail view for `get`.
pub(super) fn render_todo_detail(todo: &Todo) -> String {
    let status = if todo.completed {
        "Completed".green()
    } else {
        "Pending".yellow()
    };

    let mut out = String::new();
    out.push_str(&format!("\n{}\n{}\n", "Todo details:".bold(), SEPARATOR));
    out.push_str(&format!("ID:      {}\n", todo.id));
    out.push_str(&format!("Title:   {}\n", todo.title));
    out.push_str(&format!("Status:  {}\n", status));
    out.push_str(&format!(
        "Created: {} ({})\n",
        todo.created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S"),
        format_time_ago(todo.created_at)
    ));
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

fn format_date(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn plain() {
        colored::control::set_override(false);
    }

    fn todo(id: &str, title: &str, completed: bool) -> Todo {
        Todo {
            id: id.to_string(),
            title: title.to_string(),
            completed,
            created_at: Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn list_shows_status_id_title_and_date() {
        plain();
        let todos = vec![todo("a1", "Buy milk", false), todo("b2", "Walk dog", true)];

        let out = render_todo_list(&todos);

        let date = format_date(todos[0].created_at);
        assert!(out.contains(&format!("✗ [a1] Buy milk ({})", date)));
        assert!(out.contains(&format!("✓ [b2] Walk dog ({})", date)));
        assert!(out.contains("2 items, 1 completed"));
    }

    #[test]
    fn empty_list_renders_nothing() {
        assert_eq!(render_todo_list(&[]), "");
    }

    #[test]
    fn long_titles_are_truncated_to_line_width() {
        plain();
        let long = "x".repeat(300);

        let out = render_todo_list(&[todo("id", &long, false)]);

        let line = out.lines().find(|l| l.contains("[id]")).unwrap();
        assert!(line.width() <= LINE_WIDTH);
        assert!(line.contains('…'));
    }

    #[test]
    fn detail_shows_every_field() {
        plain();
        let out = render_todo_detail(&todo("abc", "Read book", true));

        assert!(out.contains("ID:      abc"));
        assert!(out.contains("Title:   Read book"));
        assert!(out.contains("Status:  Completed"));
        assert!(out.contains("Created: "));
        assert!(out.contains("ago"));
    }

    #[test]
    fn truncate_handles_wide_chars() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let cut = truncate_to_width("日本語のタイトル", 7);
        assert!(cut.width() <= 7);
        assert!(cut.ends_with('…'));
    }
}
