//! Error handling for the rebrand application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for rebrand operations.
///
/// Only input-validation and prompt failures are allowed to unwind a whole
/// run; per-file I/O problems during copy, substitution, and env merging are
/// downgraded to warnings by the orchestrator and never appear here at the
/// top level.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The project name was empty (or whitespace-only) after trimming
    #[error("Project name cannot be empty.")]
    EmptyProjectName,

    /// The project name contained nothing but separator characters
    #[error("Invalid project name: {0}.")]
    InvalidProjectName(String),

    /// A supplied port was not a plain digit string
    #[error("Invalid port: {0}.")]
    InvalidPort(String),

    /// A supplied port fell outside the usable range [1024, 65535]
    #[error("Port out of range: {0}.")]
    PortOutOfRange(String),

    /// Interactive prompting failed (typically a closed terminal)
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// The --stdin answers payload could not be parsed
    #[error("Invalid answers input: {0}.")]
    AnswersError(String),

    /// The static exclusion policy failed to compile into glob sets
    #[error("Exclude pattern error: {0}.")]
    PatternError(String),

    /// Represents errors that occur during install hook execution
    #[error("Hook execution error: {0}.")]
    HookError(String),
}

/// Convenience type alias for Results with this crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
