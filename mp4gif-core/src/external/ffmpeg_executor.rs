//! FFmpeg process management.
//!
//! [`FfmpegSpawner`] launches ffmpeg and [`FfmpegProcess`] waits for it.
//! [`InheritSpawner`] is the concrete implementation over `std::process`:
//! ffmpeg's stdout and stderr go straight to the caller's terminal, and its
//! stdin is closed.

use crate::error::{CoreResult, command_start_error, command_wait_error};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};

// --- FFmpeg Execution Abstraction ---

/// Trait representing an active ffmpeg process instance.
pub trait FfmpegProcess {
    /// Waits for the command to complete and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Trait representing something that can spawn an FfmpegProcess.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;

    /// Spawns `program` with `args`.
    fn spawn(&self, program: &Path, args: &[String]) -> CoreResult<Self::Process>;
}

// --- Concrete Implementation using std::process ---

/// Wrapper around a child process whose output is inherited from the caller.
pub struct InheritProcess(Child);

impl FfmpegProcess for InheritProcess {
    fn wait(&mut self) -> CoreResult<ExitStatus> {
        self.0.wait().map_err(|e| {
            log::debug!("Failed waiting for ffmpeg: {}", e);
            command_wait_error("ffmpeg", e)
        })
    }
}

/// Spawns ffmpeg with the terminal passed straight through.
#[derive(Debug, Clone, Default)]
pub struct InheritSpawner;

impl FfmpegSpawner for InheritSpawner {
    type Process = InheritProcess;

    fn spawn(&self, program: &Path, args: &[String]) -> CoreResult<Self::Process> {
        log::debug!("Running: {} {}", program.display(), args.join(" "));

        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map(InheritProcess)
            .map_err(|e| {
                log::debug!("Failed to spawn {}: {}", program.display(), e);
                command_start_error("ffmpeg", e)
            })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_inherit_spawner_reports_exit_status() {
        let spawner = InheritSpawner;
        let args = vec!["-c".to_string(), "exit 7".to_string()];
        let status = spawner
            .spawn(Path::new("/bin/sh"), &args)
            .unwrap()
            .wait()
            .unwrap();
        assert_eq!(status.code(), Some(7));
    }

    #[test]
    fn test_inherit_spawner_missing_program() {
        let spawner = InheritSpawner;
        let result = spawner.spawn(Path::new("/nonexistent/ffmpeg"), &[]);
        assert!(matches!(result, Err(CoreError::CommandStart(_, _))));
    }

    #[test]
    fn test_inherit_spawner_closes_stdin() {
        let spawner = InheritSpawner;
        let args = vec![
            "-c".to_string(),
            "if read line; then exit 0; else exit 5; fi".to_string(),
        ];
        let status = spawner
            .spawn(Path::new("/bin/sh"), &args)
            .unwrap()
            .wait()
            .unwrap();
        assert_eq!(status.code(), Some(5));
    }
}
