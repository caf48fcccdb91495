//! bugz: command-line client front-end for Bugzilla-style bug trackers
//!
//! The crate owns the command surface: the grammar of the seven
//! sub-commands, validation of closed-choice flags against configured
//! vocabularies, and the partition of every invocation into session
//! parameters and command parameters. The remote protocol exchange sits
//! behind the [`domain::CommandHandler`] trait; the bundled binary binds a
//! preview handler, embedders bind their own.

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;

pub use cli::{execute_command, Cli, CliError, CliResult};
pub use config::Settings;
pub use domain::{
    ChoiceTable, CommandHandler, CommandParameters, Invocation, SessionParameters,
};
