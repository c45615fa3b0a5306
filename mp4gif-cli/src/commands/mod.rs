//! Command implementations for the CLI.

/// Runs a single MP4 to GIF conversion.
pub mod convert;
