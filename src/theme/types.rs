use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds (level 1).
    pub surface1: Color,
    /// Subtle surface color for component backgrounds (level 2).
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Tertiary text for captions and low-emphasis content.
    pub subtext1: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

/// Default GraphQL endpoint of the USDT analytics subgraph.
pub const DEFAULT_ENDPOINT: &str =
    "https://api.studio.thegraph.com/query/84868/analytics-usdt/version/latest";

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// GraphQL endpoint every query is sent to.
    pub endpoint: String,
    /// Start in dark mode.
    pub dark_mode: bool,
    /// Number of rows requested per page on the Paginated tab.
    pub page_size: u32,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Maximum number of cached query responses.
    pub cache_capacity: usize,
    /// Configurable key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            dark_mode: true,
            page_size: 10,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            cache_capacity: 64,
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Modifier set that must be held.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }

    /// Chord with `Ctrl` held.
    #[must_use]
    pub const fn ctrl(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            mods: KeyModifiers::CONTROL,
        }
    }

    /// Return a short display label such as "Ctrl+R", "F1", "Shift+Tab".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Quit the application.
    pub exit: Vec<KeyChord>,
    /// Select the next tab.
    pub next_tab: Vec<KeyChord>,
    /// Select the previous tab.
    pub prev_tab: Vec<KeyChord>,
    /// Flip between the dark and light palette.
    pub toggle_dark: Vec<KeyChord>,
    /// Re-fetch the selected tab's query from the network.
    pub refresh: Vec<KeyChord>,
    /// Paginated tab: next page.
    pub next_page: Vec<KeyChord>,
    /// Paginated tab: previous page.
    pub prev_page: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            exit: vec![KeyChord::ctrl('c')],
            next_tab: vec![KeyChord::plain(KeyCode::Tab)],
            prev_tab: vec![KeyChord::plain(KeyCode::BackTab)],
            toggle_dark: vec![KeyChord::ctrl('d')],
            refresh: vec![KeyChord::ctrl('r')],
            next_page: vec![KeyChord::plain(KeyCode::Char('n'))],
            prev_page: vec![KeyChord::plain(KeyCode::Char('p'))],
        }
    }
}

impl KeyMap {
    /// What: Check whether a key event matches any chord in a binding list.
    ///
    /// Inputs:
    /// - `list`: Chords bound to one action
    /// - `code`/`mods`: The pressed key
    ///
    /// Output:
    /// - `true` when one of the chords matches exactly.
    ///
    /// Details:
    /// - Terminals report `BackTab` with or without `Shift`; both match.
    #[must_use]
    pub fn matches(list: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
        let norm = |code: KeyCode, mods: KeyModifiers| {
            if code == KeyCode::BackTab {
                mods - KeyModifiers::SHIFT
            } else {
                mods
            }
        };
        list.iter()
            .any(|c| c.code == code && norm(c.code, c.mods) == norm(code, mods))
    }
}
