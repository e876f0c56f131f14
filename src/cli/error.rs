//! CLI-level errors (wraps tree errors)

use thiserror::Error;

use crate::domain::TreeError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Tree(e) if e.is_out_of_range() => crate::exitcode::DATAERR,
            CliError::Tree(_) => crate::exitcode::SOFTWARE,
        }
    }
}
