use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Bad file path, unreadable input, parse failure.
    Input(String),
    /// Failure while writing the output file.
    Output(String),
    /// Error from the transform core.
    Transform(rocrate_transform::TransformError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Output(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Transform(e) => write!(f, "{} {e}", "error:".red().bold()),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<rocrate_transform::TransformError> for CliError {
    fn from(e: rocrate_transform::TransformError) -> Self {
        CliError::Transform(e)
    }
}

impl From<rocrate_graph::GraphError> for CliError {
    fn from(e: rocrate_graph::GraphError) -> Self {
        CliError::Input(e.to_string())
    }
}

/// Print the error to stderr and exit.
pub fn exit_with_error(e: CliError) -> ! {
    eprintln!("{e}");
    process::exit(EXIT_ERROR);
}
