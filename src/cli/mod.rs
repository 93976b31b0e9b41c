//! CLI module for treedoc
//!
//! Provides the demonstration driver:
//! - demo: run the full read/append/overwrite scenario
//! - read: print a document's children
//! - append: add one element to a document's root

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
