//! Configuration and palette layer for `TokenTrackr`.
//!
//! Covers config paths, `settings.conf` parsing, key chords and the dark/light
//! palettes. Public re-exports keep the `crate::theme::*` API stable.

/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading and normalization.
mod settings;
/// Built-in palettes.
mod store;
/// Theme type definitions.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{
    SETTINGS_SKELETON_CONTENT, load_settings_from, normalize, parse_settings, settings,
};
pub use store::theme;
pub use types::{DEFAULT_ENDPOINT, KeyChord, KeyMap, Settings, Theme};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize filesystem-mutating tests in this module.
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
///
/// Details:
/// - Callers should lock the mutex to guard environment-variable or disk state changes.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
