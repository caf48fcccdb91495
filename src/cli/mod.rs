//! CLI layer: argument parsing, validation, and command dispatch

pub mod args;
pub mod commands;
pub mod error;
pub mod output;
pub mod preview;
pub mod resolve;

pub use args::{Cli, Commands};
pub use commands::execute_command;
pub use error::{CliError, CliResult};
pub use preview::PreviewHandler;
