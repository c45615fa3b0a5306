//! The conversion pipeline.
//!
//! A run is strictly linear: check preconditions, build the argument vector,
//! run ffmpeg, report its status. Any step may end the run with an error; no
//! step exits the process itself.

use std::fmt;

use log::debug;

use crate::config::{ConversionJob, FFMPEG_BINARY};
use crate::error::{CoreError, CoreResult};
use crate::external::{BinaryLocator, FfmpegProcess, FfmpegSpawner, build_gif_args, check_dependency};

/// Stages of a single conversion, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStage {
    CheckingPreconditions,
    Building,
    Running,
}

impl fmt::Display for ConversionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConversionStage::CheckingPreconditions => "checking preconditions",
            ConversionStage::Building => "building arguments",
            ConversionStage::Running => "running ffmpeg",
        };
        f.write_str(name)
    }
}

/// Verifies the environment before anything is spawned.
///
/// Checks, in order: ffmpeg resolves through `locator`, the input is an
/// existing file, and the output does not exist unless overwriting. Returns the
/// resolved ffmpeg path.
pub fn check_preconditions<L: BinaryLocator + ?Sized>(
    job: &ConversionJob,
    locator: &L,
) -> CoreResult<std::path::PathBuf> {
    let ffmpeg = check_dependency(locator, FFMPEG_BINARY)?;

    if !job.input_path.is_file() {
        return Err(CoreError::InputNotFound(job.input_path.clone()));
    }

    if !job.options.overwrite && job.output_path.exists() {
        return Err(CoreError::OutputExists(job.output_path.clone()));
    }

    Ok(ffmpeg)
}

/// Converts `job.input_path` into an animated GIF at `job.output_path`.
///
/// ffmpeg's own output goes straight to the terminal. A non-zero exit becomes
/// [`CoreError::FfmpegFailed`] carrying the child's code; a child killed by a
/// signal has no code and is reported as 1.
pub fn convert_to_gif<L, S>(job: &ConversionJob, locator: &L, spawner: &S) -> CoreResult<()>
where
    L: BinaryLocator + ?Sized,
    S: FfmpegSpawner,
{
    debug!("Stage: {}", ConversionStage::CheckingPreconditions);
    let ffmpeg = check_preconditions(job, locator)?;

    debug!("Stage: {}", ConversionStage::Building);
    let args = build_gif_args(job);

    debug!("Stage: {}", ConversionStage::Running);
    let status = spawner.spawn(&ffmpeg, &args)?.wait()?;

    if !status.success() {
        let code = status.code().unwrap_or(1);
        return Err(CoreError::FfmpegFailed { code });
    }

    debug!(
        "Wrote {} from {}",
        job.output_path.display(),
        job.input_path.display()
    );
    Ok(())
}
