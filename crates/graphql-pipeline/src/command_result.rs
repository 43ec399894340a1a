use std::process::ExitCode;

/// What a command prints and how the process exits afterwards.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failure explained on stderr.
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(fmt_args.to_string()),
            stdout: None,
        }
    }

    /// A report on stdout. `succeeded` picks the exit code so that scripts
    /// can consume the report and still detect invalid input.
    pub fn report(report: String, succeeded: bool) -> Self {
        Self {
            exit_code: if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE },
            stderr: None,
            stdout: Some(report),
        }
    }
}
