//! Implementation of the conversion command.
//!
//! Hands a resolved job to mp4gif-core with the lookup and spawner supplied by
//! the caller, logging what is about to happen.

use std::time::Instant;

use log::debug;
use mp4gif_core::config::ConversionJob;
use mp4gif_core::convert_to_gif;
use mp4gif_core::external::{BinaryLocator, FfmpegSpawner};

use crate::error::CliResult;
use crate::logging::get_timestamp;

/// Runs ffmpeg for `job`, streaming its output to the terminal.
pub fn run_convert<L, S>(job: &ConversionJob, locator: &L, spawner: &S) -> CliResult<()>
where
    L: BinaryLocator + ?Sized,
    S: FfmpegSpawner,
{
    let start_time = Instant::now();

    debug!("Run started: {}", get_timestamp());
    debug!("Input file: {}", job.input_path.display());
    debug!("Output file: {}", job.output_path.display());
    debug!("Options: {:?}", job.options);

    convert_to_gif(job, locator, spawner)?;

    debug!("Finished in {:.2?}", start_time.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use mp4gif_core::CoreError;
    use mp4gif_core::config::GifOptions;
    use mp4gif_core::external::mocks::{FixedLocator, MockFfmpegSpawner};
    use std::path::PathBuf;

    #[test]
    fn test_missing_input_is_core_error() {
        let job = ConversionJob::new(
            PathBuf::from("surely/this/does/not/exist/input.mp4"),
            None,
            GifOptions::default(),
        )
        .unwrap();
        let spawner = MockFfmpegSpawner::new();

        let err = run_convert(&job, &FixedLocator::found("ffmpeg"), &spawner).unwrap_err();
        assert!(matches!(err, CliError::Core(CoreError::InputNotFound(_))));
        assert!(spawner.get_received_calls().is_empty());
    }
}
