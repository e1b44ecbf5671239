use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic;
use crate::state::{AppState, FormField, QueryKind, QueryRequest};
use crate::theme::KeyMap;

/// What: Handle chords that work regardless of form focus.
///
/// Output:
/// - `true` when the chord was consumed.
pub(super) fn handle_chord(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryRequest>,
) -> bool {
    let (code, mods) = (ke.code, ke.modifiers);
    if KeyMap::matches(&app.keymap.toggle_dark, code, mods) {
        app.toggle_dark_mode();
        tracing::debug!(dark = app.dark_mode, "[Events] toggled theme");
        return true;
    }
    if KeyMap::matches(&app.keymap.refresh, code, mods) {
        logic::refresh_current(app, query_tx);
        return true;
    }
    false
}

/// What: Handle a key press while no form field has focus.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the query worker
///
/// Output:
/// - `true` to exit the application.
///
/// Details:
/// - Configured chords take precedence; the unmodified letters `q`, `d`, `r`
///   are fixed aliases for exit, theme and refresh.
/// - Digits `1`..`4` jump straight to a tab.
/// - On the Logical tab, `i`, `/` or Enter put focus in the form.
pub(super) fn handle_global_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryRequest>,
) -> bool {
    let (code, mods) = (ke.code, ke.modifiers);
    if handle_chord(ke, app, query_tx) {
        return false;
    }
    let km = app.keymap.clone();
    if KeyMap::matches(&km.next_tab, code, mods) {
        app.next_tab();
        return false;
    }
    if KeyMap::matches(&km.prev_tab, code, mods) {
        app.prev_tab();
        return false;
    }
    if app.tab == QueryKind::Paginated {
        if KeyMap::matches(&km.next_page, code, mods) {
            logic::next_page(app, query_tx);
            return false;
        }
        if KeyMap::matches(&km.prev_page, code, mods) {
            logic::prev_page(app, query_tx);
            return false;
        }
    }
    if mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return false;
    }
    match code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('d') => app.toggle_dark_mode(),
        KeyCode::Char('r') => {
            logic::refresh_current(app, query_tx);
        }
        KeyCode::Right => app.next_tab(),
        KeyCode::Left => app.prev_tab(),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as usize) - ('1' as usize);
            if let Some(kind) = QueryKind::from_index(idx) {
                app.select_tab(kind);
            }
        }
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-10),
        KeyCode::PageDown => app.move_selection(10),
        KeyCode::Home => app.move_selection(isize::MIN),
        KeyCode::End => app.move_selection(isize::MAX),
        KeyCode::Char('i' | '/') | KeyCode::Enter if app.tab == QueryKind::Logical => {
            app.form.focus = Some(FormField::Address);
            app.status_message = None;
        }
        _ => {}
    }
    false
}
