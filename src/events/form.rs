use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::logic;
use crate::state::{AppState, FormField, QueryRequest};

/// What: Handle a key press while a Logical form field has focus.
///
/// Inputs:
/// - `ke`: Key press
/// - `app`: Mutable application state (form values and focus)
/// - `query_tx`: Channel to the query worker
///
/// Details:
/// - Tab/Shift+Tab and Up/Down move focus between the two inputs and the button.
/// - Enter submits from any field; Space also submits on the button.
/// - Esc leaves the form so plain keys drive the tabs again.
/// - Text is kept verbatim: no trimming or validation.
pub(super) fn handle_form_key(
    ke: KeyEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryRequest>,
) {
    let Some(focus) = app.form.focus else {
        return;
    };
    match ke.code {
        KeyCode::Esc => app.form.focus = None,
        KeyCode::Tab | KeyCode::Down => app.form.focus = Some(focus.next()),
        KeyCode::BackTab | KeyCode::Up => app.form.focus = Some(focus.prev()),
        KeyCode::Enter => {
            logic::submit_search(app, query_tx);
        }
        KeyCode::Char(' ') if focus == FormField::SearchButton => {
            logic::submit_search(app, query_tx);
        }
        KeyCode::Backspace => {
            if let Some(text) = app.form.focused_input_mut() {
                text.pop();
            }
        }
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            if let Some(text) = app.form.focused_input_mut() {
                text.push(ch);
            }
        }
        _ => {}
    }
}
