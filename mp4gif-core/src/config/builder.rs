//! Builder pattern for [`GifOptions`].
//!
//! Fluent construction starting from the defaults in the parent module. The
//! CLI feeds parsed flags through it one at a time.

use std::path::PathBuf;

use super::GifOptions;

/// Builder for creating [`GifOptions`] instances.
///
/// # Examples
///
/// ```rust
/// use mp4gif_core::config::GifOptionsBuilder;
///
/// let options = GifOptionsBuilder::new()
///     .fps(24.0)
///     .width(480.0)
///     .overwrite(true)
///     .build();
///
/// assert_eq!(options.fps, 24.0);
/// assert_eq!(options.width, Some(480.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GifOptionsBuilder {
    options: GifOptions,
}

impl GifOptionsBuilder {
    /// Creates a builder holding the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn fps(mut self, fps: f64) -> Self {
        self.options.fps = fps;
        self
    }

    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        self.options.width = Some(width);
        self
    }

    #[must_use]
    pub fn start(mut self, seconds: f64) -> Self {
        self.options.start = Some(seconds);
        self
    }

    #[must_use]
    pub fn duration(mut self, seconds: f64) -> Self {
        self.options.duration = Some(seconds);
        self
    }

    #[must_use]
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.options.overwrite = overwrite;
        self
    }

    /// Finishes the builder. Validation happens when the job is created.
    #[must_use]
    pub fn build(self) -> GifOptions {
        self.options
    }
}
