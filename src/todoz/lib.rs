//! # Todoz Architecture
//!
//! Todoz is a small todo list manager whose core is a library; the `todoz` binary
//! is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, formats output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - One instance per process, built by the entry point       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Input validation, id resolution                          │
//! │  - Returns structured CmdResult (status + todos + messages) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository.rs)                                 │
//! │  - Lazily loaded in-memory cache                            │
//! │  - Writes the full set after every mutation                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - TodoStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Not-found and validation problems come back as [`api::CmdStatus`];
//! storage faults come back as [`error::TodoError`].
//!
//! ## Concurrency
//!
//! One invocation performs one command and exits. Two processes writing the same
//! store race, and the last writer wins.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per verb
//! - [`repository`]: Cached access to the store
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Todo` and `TodoPatch`
//! - [`config`]: Config file and path resolution
//! - [`logging`]: Logger bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repository;
pub mod store;
