//! Error types and exit code mapping for the CLI.
//!
//! Usage errors found while reading the command line live here; everything
//! after parsing is a [`CoreError`] carried through unchanged.

// ---- Internal crate imports ----
use mp4gif_core::{CoreError, install_hint};

// ---- External crate imports ----
use thiserror::Error;

/// Errors that end an `mp4gif` invocation.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Missing input file. Run with --help for usage.")]
    MissingInput,

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CliError {
    /// Exit code for this error: ffmpeg's own code when it failed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(e) => e.exit_code(),
            _ => 1,
        }
    }

    /// Follow-up advice printed under the error message, if any.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::Core(CoreError::DependencyNotFound(_)) => Some(install_hint()),
            _ => None,
        }
    }
}

/// Type alias for CLI results.
pub type CliResult<T> = Result<T, CliError>;
