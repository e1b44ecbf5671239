//! Terminal rendering: header, tab bar, the selected tab's content and the
//! footer. Hit rectangles for mouse handling are recorded on every frame.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::{AppState, QueryKind};
use crate::theme::theme;

mod content;
mod footer;
mod form;
mod header;

/// What: Render one full frame and refresh the mouse hit rectangles.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; only hit rectangles and table scroll are mutated
///
/// Details:
/// - Only the selected tab's content is drawn; the Logical tab adds its search
///   form above the content.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme(app.dark_mode);
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base).fg(th.text));
    f.render_widget(bg, area);

    app.tab_rects.clear();
    app.address_rect = None;
    app.min_value_rect = None;
    app.search_button_rect = None;
    app.dark_toggle_rect = None;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(f, app, chunks[0], &th);
    header::render_tabs(f, app, chunks[1], &th);

    let body = if app.tab == QueryKind::Logical {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(3)])
            .split(chunks[2]);
        form::render_form(f, app, parts[0], &th);
        parts[1]
    } else {
        chunks[2]
    };
    content::render_content(f, app, body, &th);
    footer::render_footer(f, app, chunks[3], &th);
}
