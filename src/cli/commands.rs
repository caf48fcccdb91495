//! Command dispatch

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::resolve::resolve;
use crate::config::Settings;
use crate::domain::handler::{dispatch, CommandHandler};

/// Resolve, partition, and dispatch one parsed command line.
///
/// All validation happens before the handler sees anything; a handler is
/// either invoked with a complete invocation or not at all.
#[instrument(skip_all)]
pub fn execute_command(
    cli: Cli,
    settings: &Settings,
    handler: &mut dyn CommandHandler,
) -> CliResult<()> {
    let invocation = resolve(cli, &settings.choices)?;
    debug!(command = invocation.command.name(), "dispatching");
    dispatch(&invocation, handler)?;
    Ok(())
}
