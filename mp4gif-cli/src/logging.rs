//! env_logger setup for the mp4gif binary.
//!
//! Library code logs through the `log` facade. The binary routes those records
//! to stderr with env_logger:
//! - default: warnings and errors only
//! - `RUST_LOG=debug`: pipeline stages and the exact ffmpeg command line
//! - `RUST_LOG=trace`: everything

use env_logger::Env;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initializes the global logger. Call once, before anything logs.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_target(false)
        .init();
}

/// Returns the current local timestamp formatted as "YYYY-MM-DD HH:MM:SS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_shape() {
        let ts = get_timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
    }
}
