use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use tokio::sync::mpsc;

use crate::logic;
use crate::state::{AppState, FormField, HitRect, QueryKind, QueryRequest};

/// What: Check whether a point lies inside an optional rectangle.
///
/// Details:
/// - Inclusive start, exclusive end; `None` never matches.
const fn is_point_in_rect(mx: u16, my: u16, rect: Option<HitRect>) -> bool {
    if let Some((x, y, w, h)) = rect {
        mx >= x && mx < x.saturating_add(w) && my >= y && my < y.saturating_add(h)
    } else {
        false
    }
}

/// What: Handle a single mouse event using the hit rectangles of the last frame.
///
/// Inputs:
/// - `m`: Mouse event with position and kind
/// - `app`: Mutable application state
/// - `query_tx`: Channel to the query worker
///
/// Output:
/// - Always `false`; the mouse never exits the application.
///
/// Details:
/// - Left click on a tab title selects that tab; on the header indicator it
///   flips dark mode.
/// - Left click on a form input focuses it; on the Search button it submits.
/// - Clicking elsewhere on the Logical tab drops form focus.
/// - Wheel scroll moves the row selection of the selected tab.
pub(super) fn handle_mouse_event(
    m: MouseEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryRequest>,
) -> bool {
    let (mx, my) = (m.column, m.row);
    match m.kind {
        MouseEventKind::ScrollUp => app.move_selection(-1),
        MouseEventKind::ScrollDown => app.move_selection(1),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(kind) = app
                .tab_rects
                .iter()
                .find(|(_, rect)| is_point_in_rect(mx, my, Some(*rect)))
                .map(|(kind, _)| *kind)
            {
                app.select_tab(kind);
                return false;
            }
            if is_point_in_rect(mx, my, app.dark_toggle_rect) {
                app.toggle_dark_mode();
                return false;
            }
            if app.tab != QueryKind::Logical {
                return false;
            }
            if is_point_in_rect(mx, my, app.address_rect) {
                app.form.focus = Some(FormField::Address);
            } else if is_point_in_rect(mx, my, app.min_value_rect) {
                app.form.focus = Some(FormField::MinValue);
            } else if is_point_in_rect(mx, my, app.search_button_rect) {
                app.form.focus = Some(FormField::SearchButton);
                logic::submit_search(app, query_tx);
            } else {
                app.form.focus = None;
            }
        }
        _ => {}
    }
    false
}
