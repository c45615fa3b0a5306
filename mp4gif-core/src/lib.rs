//! Core library for converting MP4 video into animated GIF with ffmpeg.
//!
//! All media work happens inside an external ffmpeg process. This crate owns the
//! options record, the precondition checks, the argument vector and the child
//! process handling.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mp4gif_core::config::{ConversionJob, GifOptionsBuilder};
//! use mp4gif_core::external::{InheritSpawner, PathLocator};
//! use mp4gif_core::convert_to_gif;
//! use std::path::PathBuf;
//!
//! let options = GifOptionsBuilder::new().fps(15.0).width(480.0).build();
//! let job = ConversionJob::new(PathBuf::from("clip.mp4"), None, options).unwrap();
//!
//! convert_to_gif(&job, &PathLocator, &InheritSpawner).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod external;
pub mod processing;

// Re-exports for public API
pub use config::{ConversionJob, GifOptions, GifOptionsBuilder, derive_output_path};
pub use error::{CoreError, CoreResult};
pub use external::{BinaryLocator, PathLocator, build_gif_args, install_hint};
pub use processing::{ConversionStage, check_preconditions, convert_to_gif};
