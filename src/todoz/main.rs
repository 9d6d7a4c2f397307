//! # Todoz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and turns its outcome into a process exit code.
//!
//! - `0`: the command succeeded, or the user cancelled it
//! - `1`: the todo was not found, or the input was rejected
//! - `2`: a storage or configuration fault (message on stderr)

use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
