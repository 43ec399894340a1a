use clap::CommandFactory;
use crate::commands;

/// How command results are printed to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable lines, one per message, followed by a summary.
    #[default]
    Text,

    /// A pretty-printed JSON array with one entry per input file.
    Json,
}

#[derive(clap::Parser, Debug)]
#[command(name = "graphql-pipeline", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        default_value="text",
        global=true,
        help="Output format for command results.",
        long,
        value_enum,
    )]
    pub format: OutputFormat,

    #[arg(
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// With no subcommand there is nothing to run; print usage instead.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_long_help()?;
        Ok(())
    }
}
