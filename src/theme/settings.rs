use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::parsing::{parse_bool, parse_chord_list, strip_inline_comment};
use super::paths::{default_settings_path, resolve_settings_config_path};
use super::types::Settings;

/// Largest page the Paginated tab will request.
const MAX_PAGE_SIZE: u32 = 1000;

/// Skeleton written on first run so users can discover every key.
pub const SETTINGS_SKELETON_CONTENT: &str = "# TokenTrackr settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# GraphQL endpoint of the transfer-events subgraph\n\
endpoint = https://api.studio.thegraph.com/query/84868/analytics-usdt/version/latest\n\
#\n\
# Start in dark mode (true/false)\n\
dark_mode = true\n\
#\n\
# Rows per page on the Paginated tab (1-1000)\n\
page_size = 10\n\
#\n\
# Network timeouts in seconds\n\
request_timeout_secs = 30\n\
connect_timeout_secs = 10\n\
#\n\
# Number of query responses kept in the in-memory cache\n\
cache_capacity = 64\n\
#\n\
# Key bindings (comma-separated chords, e.g. Ctrl+D, F2)\n\
keybind_exit = Ctrl+C\n\
keybind_next_tab = Tab\n\
keybind_prev_tab = Shift+Tab\n\
keybind_toggle_dark = Ctrl+D\n\
keybind_refresh = Ctrl+R\n\
keybind_next_page = n\n\
keybind_prev_page = p\n";

/// What: Parse settings.conf content into a [`Settings`] value.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces in keys map to `_`.
/// - Unknown keys and unparsable values are ignored so defaults survive.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, val_raw)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(val_raw.trim());
        match key.as_str() {
            "endpoint" | "graphql_endpoint" | "uri" => {
                if !val.is_empty() {
                    settings.endpoint = val.to_string();
                }
            }
            "dark_mode" | "dark" => settings.dark_mode = parse_bool(val),
            "page_size" | "first" => {
                if let Ok(v) = val.parse::<u32>() {
                    settings.page_size = v;
                }
            }
            "request_timeout_secs" | "timeout_secs" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.request_timeout_secs = v;
                }
            }
            "connect_timeout_secs" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.connect_timeout_secs = v;
                }
            }
            "cache_capacity" | "cache_size" => {
                if let Ok(v) = val.parse::<usize>() {
                    settings.cache_capacity = v;
                }
            }
            "keybind_exit" | "keybind_quit" => {
                if let Some(list) = parse_chord_list(val) {
                    settings.keymap.exit = list;
                }
            }
            "keybind_next_tab" => {
                if let Some(list) = parse_chord_list(val) {
                    settings.keymap.next_tab = list;
                }
            }
            "keybind_prev_tab" => {
                if let Some(list) = parse_chord_list(val) {
                    settings.keymap.prev_tab = list;
                }
            }
            "keybind_toggle_dark" | "keybind_dark_mode" => {
                if let Some(list) = parse_chord_list(val) {
                    settings.keymap.toggle_dark = list;
                }
            }
            "keybind_refresh" => {
                if let Some(list) = parse_chord_list(val) {
                    settings.keymap.refresh = list;
                }
            }
            "keybind_next_page" => {
                if let Some(list) = parse_chord_list(val) {
                    settings.keymap.next_page = list;
                }
            }
            "keybind_prev_page" => {
                if let Some(list) = parse_chord_list(val) {
                    settings.keymap.prev_page = list;
                }
            }
            _ => {}
        }
    }
}

/// What: Clamp parsed values into their supported ranges.
///
/// Details:
/// - Page size is kept within 1..=1000, timeouts at one second or more and the
///   cache holds at least one entry. A blank endpoint falls back to the default.
pub fn normalize(settings: &mut Settings) {
    settings.page_size = settings.page_size.clamp(1, MAX_PAGE_SIZE);
    settings.request_timeout_secs = settings.request_timeout_secs.max(1);
    settings.connect_timeout_secs = settings.connect_timeout_secs.max(1);
    settings.cache_capacity = settings.cache_capacity.max(1);
    if settings.endpoint.trim().is_empty() {
        settings.endpoint = super::types::DEFAULT_ENDPOINT.to_string();
    }
}

/// What: Load settings from an explicit file path.
///
/// Output:
/// - Parsed and normalized settings; defaults when the file is unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "[Config] settings.conf unreadable, using defaults"
            );
        }
    }
    normalize(&mut out);
    out
}

/// What: Load user settings from `settings.conf` under XDG/HOME.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
///
/// Details:
/// - When no settings file exists yet, the commented skeleton is written to the
///   default location first so the user has something to edit.
#[must_use]
pub fn settings() -> Settings {
    if let Some(path) = resolve_settings_config_path() {
        return load_settings_from(&path);
    }
    let target = default_settings_path();
    match fs::write(&target, SETTINGS_SKELETON_CONTENT) {
        Ok(()) => {
            tracing::info!(path = %target.display(), "wrote default settings skeleton");
            load_settings_from(&target)
        }
        Err(e) => {
            warn!(path = %target.display(), error = %e, "[Config] could not write settings skeleton");
            let mut out = Settings::default();
            normalize(&mut out);
            out
        }
    }
}
