//! # CLI Behavior
//!
//! This is **one possible UI client** for todoz, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes, and output
//! formatting. For the overall architecture, see the library docs.
//!
//! ### Naked Execution (`todoz`)
//!
//! Running `todoz` with no arguments defaults to `todoz list`.
//!
//! ### Interactive Flows
//!
//! Prompts only appear when stdin is a terminal:
//!
//! - `todoz add` without `--title` asks for a title until one is given.
//! - `todoz update <id>` without options asks for a new title and whether to
//!   flip the completed state.
//! - `todoz delete <id>` asks for confirmation unless `--force` is passed. When
//!   stdin is piped the answer is read from it, so `echo y | todoz delete <id>`
//!   works in scripts.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring and per-command handlers
//! - `prompt`: Line-based questions over stdin
//! - `render`: Output formatting (lists, details, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod prompt;
mod render;
pub mod setup;

pub use commands::run;
