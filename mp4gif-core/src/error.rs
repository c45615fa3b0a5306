//! Error types for the conversion pipeline.
//!
//! Every failure the core can hit between a parsed command line and a finished
//! ffmpeg run is represented here. Messages are user-facing and printed as-is
//! by the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by precondition checks, argument building and process handling.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{0} not found in PATH.")]
    DependencyNotFound(String),

    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Output file already exists: {}. Use --overwrite to replace.", .0.display())]
    OutputExists(PathBuf),

    #[error("Invalid value for --{0}")]
    InvalidOption(&'static str),

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] std::io::Error),

    #[error("Failed while waiting for {0}: {1}")]
    CommandWait(String, #[source] std::io::Error),

    #[error("ffmpeg exited with code {code}")]
    FfmpegFailed { code: i32 },
}

impl CoreError {
    /// Exit code the process should terminate with for this error.
    ///
    /// A failed ffmpeg run relays the child's own code; everything else is 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            CoreError::FfmpegFailed { code } => *code,
            _ => 1,
        }
    }
}

/// Result type for mp4gif-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

pub(crate) fn command_start_error(cmd: &str, err: std::io::Error) -> CoreError {
    CoreError::CommandStart(cmd.to_string(), err)
}

pub(crate) fn command_wait_error(cmd: &str, err: std::io::Error) -> CoreError {
    CoreError::CommandWait(cmd.to_string(), err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_messages() {
        let err = CoreError::InputNotFound(PathBuf::from("clip.mp4"));
        assert_eq!(err.to_string(), "Input file not found: clip.mp4");

        let err = CoreError::OutputExists(PathBuf::from("clip.gif"));
        assert_eq!(
            err.to_string(),
            "Output file already exists: clip.gif. Use --overwrite to replace."
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CoreError::FfmpegFailed { code: 69 }.exit_code(), 69);
        assert_eq!(
            CoreError::DependencyNotFound("ffmpeg".to_string()).exit_code(),
            1
        );
        assert_eq!(CoreError::InvalidOption("fps").exit_code(), 1);
    }
}
