//! CLI module for bookshelf
//!
//! Provides command-line interface for:
//! - serve: Run the HTTP service
//! - init: Write an empty books file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, resolve_config, run, run_command, serve, ServeOptions};
pub use errors::{CliError, CliErrorCode, CliResult};
