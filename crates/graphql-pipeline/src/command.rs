use crate::Cli;
use crate::CommandResult;

/// A subcommand. Global flags stay on the [`Cli`] handed to [`run()`].
///
/// [`run()`]: RunnableCommand::run
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
