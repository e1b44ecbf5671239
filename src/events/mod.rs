//! Event handling layer: keyboard and mouse input mutate [`AppState`] and
//! dispatch queries.
//!
//! Keys go to the Logical search form while one of its fields has focus;
//! otherwise they drive tab navigation and the global shortcuts.

use crossterm::event::{Event as CEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, QueryKind, QueryRequest};
use crate::theme::KeyMap;

mod form;
mod global;
mod mouse;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event (key, mouse, resize, ...)
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the query worker
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Only key presses are handled; repeats and releases are ignored.
/// - The exit chord works everywhere, including inside the form.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if KeyMap::matches(&app.keymap.exit, ke.code, ke.modifiers) {
                return true;
            }
            let form_active = app.tab == QueryKind::Logical && app.form.focus.is_some();
            if form_active {
                // Modified chords (Ctrl+D, Ctrl+R) still reach the global handler.
                if ke
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    && global::handle_chord(ke, app, query_tx)
                {
                    return false;
                }
                form::handle_form_key(ke, app, query_tx);
                return false;
            }
            global::handle_global_key(ke, app, query_tx)
        }
        CEvent::Mouse(m) => mouse::handle_mouse_event(m, app, query_tx),
        _ => false,
    }
}
