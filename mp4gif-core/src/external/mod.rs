//! Interactions with the ffmpeg binary.
//!
//! Everything that touches the outside world on behalf of the conversion lives
//! here: finding ffmpeg on PATH, turning options into an argument vector, and
//! spawning the encoder. Lookup and spawning are both traits so the pipeline
//! can run against test doubles without a real ffmpeg installation.

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::env;
use std::path::PathBuf;

// ============================================================================
// SUBMODULES
// ============================================================================

/// Argument vector and filter chain construction
pub mod ffmpeg_builder;

/// Traits and implementations for spawning ffmpeg
pub mod ffmpeg_executor;

/// Test doubles for lookup and spawning
#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use ffmpeg_builder::{VideoFilterChain, build_gif_args};
pub use ffmpeg_executor::{FfmpegProcess, FfmpegSpawner, InheritProcess, InheritSpawner};

// ============================================================================
// BINARY LOOKUP
// ============================================================================

/// Resolves an executable name to a path that can be spawned.
pub trait BinaryLocator {
    /// Returns the resolved path, or `None` when the binary cannot be found.
    fn locate(&self, name: &str) -> Option<PathBuf>;
}

/// Looks binaries up through the process `PATH`.
#[derive(Debug, Clone, Default)]
pub struct PathLocator;

impl BinaryLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        match which::which(name) {
            Ok(path) => Some(path),
            Err(e) => {
                log::debug!("Lookup of '{}' failed: {}", name, e);
                None
            }
        }
    }
}

/// Checks that a required external command can be resolved.
///
/// Returns the resolved path so the caller spawns exactly the binary that was
/// checked.
pub fn check_dependency<L: BinaryLocator + ?Sized>(
    locator: &L,
    cmd_name: &str,
) -> CoreResult<PathBuf> {
    match locator.locate(cmd_name) {
        Some(path) => {
            log::debug!("Found dependency {}: {}", cmd_name, path.display());
            Ok(path)
        }
        None => {
            log::debug!("Dependency '{}' not found.", cmd_name);
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
    }
}

// ============================================================================
// INSTALLATION GUIDANCE
// ============================================================================

/// Installation guidance for ffmpeg on the current platform.
#[must_use]
pub fn install_hint() -> &'static str {
    install_hint_for(env::consts::OS)
}

fn install_hint_for(os: &str) -> &'static str {
    match os {
        "macos" => "Install ffmpeg: brew install ffmpeg",
        "linux" => "Install ffmpeg: sudo apt install ffmpeg (Debian/Ubuntu) or sudo dnf install ffmpeg (Fedora/RHEL)",
        "windows" => "Install ffmpeg: scoop install ffmpeg or choco install ffmpeg",
        _ => {
            "Install ffmpeg: macOS (brew install ffmpeg), Linux (apt/yum), Windows (scoop/choco)."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::mocks::FixedLocator;

    #[test]
    fn test_check_dependency_found() {
        let locator = FixedLocator::found("/opt/bin/ffmpeg");
        let path = check_dependency(&locator, "ffmpeg").unwrap();
        assert_eq!(path, PathBuf::from("/opt/bin/ffmpeg"));
    }

    #[test]
    fn test_check_dependency_missing() {
        let locator = FixedLocator::missing();
        let err = check_dependency(&locator, "ffmpeg").unwrap_err();
        assert!(matches!(err, CoreError::DependencyNotFound(ref name) if name == "ffmpeg"));
        assert_eq!(err.to_string(), "ffmpeg not found in PATH.");
    }

    #[test]
    fn test_path_locator_missing_binary() {
        let locator = PathLocator;
        assert!(locator.locate("mp4gif-definitely-not-a-real-binary").is_none());
    }

    #[test]
    fn test_install_hint_per_platform() {
        assert!(install_hint_for("macos").contains("brew"));
        assert!(install_hint_for("linux").contains("apt"));
        assert!(install_hint_for("windows").contains("choco"));
        let fallback = install_hint_for("haiku");
        assert!(fallback.contains("brew") && fallback.contains("scoop"));
        assert!(!install_hint().is_empty());
    }
}
