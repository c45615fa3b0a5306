//! Library portion of the mp4gif CLI application.
//!
//! Contains argument definitions, command logic and the top-level dispatcher.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod terminal;

use std::ffi::OsString;

use mp4gif_core::external::{BinaryLocator, FfmpegSpawner, InheritSpawner, PathLocator};

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Invocation, parse_args};
pub use commands::convert::run_convert;
pub use error::{CliError, CliResult};

/// Runs one invocation against the real PATH and a pass-through ffmpeg child.
///
/// Returns the process exit code.
pub fn run<I, T>(tokens: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    run_with(tokens, &PathLocator, &InheritSpawner)
}

/// Runs one invocation with injected lookup and spawning.
///
/// This is the only place outcomes become exit codes: 0 for success and help,
/// ffmpeg's own code when it fails, 1 for everything else.
pub fn run_with<I, T, L, S>(tokens: I, locator: &L, spawner: &S) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    L: BinaryLocator + ?Sized,
    S: FfmpegSpawner,
{
    let result = match parse_args(tokens) {
        Ok(Invocation::Help(text)) => {
            terminal::print_usage(&text);
            return 0;
        }
        Ok(Invocation::Convert(job)) => run_convert(&job, locator, spawner),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            terminal::print_error(&e.to_string(), e.suggestion());
            e.exit_code()
        }
    }
}
