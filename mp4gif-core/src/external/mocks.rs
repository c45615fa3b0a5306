//! Test doubles for binary lookup and process spawning.

use super::{BinaryLocator, FfmpegProcess, FfmpegSpawner};
use crate::error::CoreResult;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

#[cfg(unix)]
fn exit_status_from_code(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw((code & 0xff) << 8)
}

#[cfg(windows)]
fn exit_status_from_code(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// Locator that answers every lookup with the same result.
#[derive(Debug, Clone)]
pub struct FixedLocator(Option<PathBuf>);

impl FixedLocator {
    pub fn found(path: impl Into<PathBuf>) -> Self {
        Self(Some(path.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl BinaryLocator for FixedLocator {
    fn locate(&self, _name: &str) -> Option<PathBuf> {
        self.0.clone()
    }
}

/// Mock implementation of FfmpegProcess.
#[derive(Debug, Clone)]
pub struct MockFfmpegProcess {
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }
}

/// Mock implementation of FfmpegSpawner that records every call.
#[derive(Clone)]
pub struct MockFfmpegSpawner {
    exit_code: i32,
    received_calls: Rc<RefCell<Vec<(PathBuf, Vec<String>)>>>,
}

impl Default for MockFfmpegSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFfmpegSpawner {
    /// A spawner whose processes exit successfully.
    pub fn new() -> Self {
        Self::with_exit_code(0)
    }

    /// A spawner whose processes exit with `code`.
    pub fn with_exit_code(code: i32) -> Self {
        Self {
            exit_code: code,
            received_calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Argument vectors of every spawn so far, in call order.
    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls
            .borrow()
            .iter()
            .map(|(_, args)| args.clone())
            .collect()
    }

    /// Programs passed to every spawn so far, in call order.
    pub fn get_received_programs(&self) -> Vec<PathBuf> {
        self.received_calls
            .borrow()
            .iter()
            .map(|(program, _)| program.clone())
            .collect()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, program: &Path, args: &[String]) -> CoreResult<Self::Process> {
        log::debug!("MockFfmpegSpawner received: {:?}", args);
        self.received_calls
            .borrow_mut()
            .push((program.to_path_buf(), args.to_vec()));
        Ok(MockFfmpegProcess {
            exit_status: exit_status_from_code(self.exit_code),
        })
    }
}
