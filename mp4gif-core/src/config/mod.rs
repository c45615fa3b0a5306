//! Configuration structures and constants for the mp4gif-core library.
//!
//! This module provides the options record built from the command line and the
//! conversion job that pairs it with resolved input and output paths.

mod builder;

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

pub use builder::GifOptionsBuilder;

// Default constants

/// Default sampling rate of the output animation, in frames per second.
pub const DEFAULT_FPS: f64 = 10.0;

/// Extension given to derived output paths.
pub const GIF_EXTENSION: &str = "gif";

/// Scaler used when a target width is requested.
pub const SCALE_FLAGS: &str = "lanczos";

/// Name of the encoder binary looked up on PATH.
pub const FFMPEG_BINARY: &str = "ffmpeg";

/// Value for ffmpeg's `-loop` option; 0 loops forever.
pub const LOOP_FOREVER: u32 = 0;

/// Options controlling a single conversion.
///
/// Built once per invocation from the command line and never mutated after.
/// Use [`GifOptionsBuilder`] for fluent construction.
///
/// # Examples
///
/// ```rust
/// use mp4gif_core::config::{GifOptions, DEFAULT_FPS};
///
/// let options = GifOptions::default();
/// assert_eq!(options.fps, DEFAULT_FPS);
/// assert!(!options.overwrite);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GifOptions {
    /// Explicit output path from `-o/--output`
    pub output_path: Option<PathBuf>,

    /// Frames per second sampled into the animation
    pub fps: f64,

    /// Output width in pixels; height follows the aspect ratio
    pub width: Option<f64>,

    /// Start offset into the source, in seconds
    pub start: Option<f64>,

    /// Length of the converted section, in seconds
    pub duration: Option<f64>,

    /// Replace an existing output file
    pub overwrite: bool,
}

impl Default for GifOptions {
    fn default() -> Self {
        Self {
            output_path: None,
            fps: DEFAULT_FPS,
            width: None,
            start: None,
            duration: None,
            overwrite: false,
        }
    }
}

impl GifOptions {
    /// Rejects values ffmpeg cannot take as numbers (NaN and infinities).
    pub fn validate(&self) -> CoreResult<()> {
        if !self.fps.is_finite() {
            return Err(CoreError::InvalidOption("fps"));
        }
        let optional = [
            ("width", self.width),
            ("start", self.start),
            ("duration", self.duration),
        ];
        for (name, value) in optional {
            if value.is_some_and(|v| !v.is_finite()) {
                return Err(CoreError::InvalidOption(name));
            }
        }
        Ok(())
    }
}

/// A fully resolved conversion: where to read, where to write, and how.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionJob {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub options: GifOptions,
}

impl ConversionJob {
    /// Resolves the output path and validates the options.
    ///
    /// Output precedence: `options.output_path` first, then the second
    /// positional argument, then [`derive_output_path`] of the input.
    pub fn new(
        input_path: PathBuf,
        positional_output: Option<PathBuf>,
        options: GifOptions,
    ) -> CoreResult<Self> {
        options.validate()?;

        let output_path = options
            .output_path
            .clone()
            .or(positional_output)
            .unwrap_or_else(|| derive_output_path(&input_path));

        Ok(Self {
            input_path,
            output_path,
            options,
        })
    }
}

/// Replaces the input's file extension with `.gif`, or appends it if there is none.
///
/// # Examples
///
/// ```rust
/// use mp4gif_core::config::derive_output_path;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(derive_output_path(Path::new("clip.mp4")), PathBuf::from("clip.gif"));
/// assert_eq!(derive_output_path(Path::new("clip")), PathBuf::from("clip.gif"));
/// ```
#[must_use]
pub fn derive_output_path(input: &Path) -> PathBuf {
    input.with_extension(GIF_EXTENSION)
}
