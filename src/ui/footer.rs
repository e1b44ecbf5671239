use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{AppState, QueryKind};
use crate::theme::{KeyChord, Theme};

/// Join the labels of a binding list with `/`.
fn labels(chords: &[KeyChord]) -> String {
    chords
        .iter()
        .map(KeyChord::label)
        .collect::<Vec<_>>()
        .join("/")
}

/// What: Key hints for the current context.
///
/// Output:
/// - `(key, action)` pairs, most relevant first.
pub(super) fn hints(app: &AppState) -> Vec<(String, &'static str)> {
    let km = &app.keymap;
    if app.tab == QueryKind::Logical && app.form.focus.is_some() {
        return vec![
            ("Tab".to_string(), "next field"),
            ("Enter".to_string(), "search"),
            ("Esc".to_string(), "leave form"),
            (labels(&km.exit), "quit"),
        ];
    }
    let mut out = vec![
        (
            format!("{}/{}", labels(&km.next_tab), labels(&km.prev_tab)),
            "tab",
        ),
        ("1-4".to_string(), "jump"),
        ("↑/↓".to_string(), "rows"),
    ];
    match app.tab {
        QueryKind::Paginated => out.push((
            format!("{}/{}", labels(&km.next_page), labels(&km.prev_page)),
            "page",
        )),
        QueryKind::Logical => out.push(("i".to_string(), "edit form")),
        _ => {}
    }
    out.push((labels(&km.refresh), "refresh"));
    out.push((labels(&km.toggle_dark), "theme"));
    out.push((format!("{}/Q", labels(&km.exit)), "quit"));
    out
}

/// What: Render the footer: the status message if any, else key hints.
pub(super) fn render_footer(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let line = if let Some(msg) = &app.status_message {
        Line::from(Span::styled(format!(" {msg}"), Style::default().fg(th.yellow)))
    } else {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in hints(app) {
            spans.push(Span::styled(key, Style::default().fg(th.sapphire)));
            spans.push(Span::styled(
                format!(" {action}  "),
                Style::default().fg(th.subtext0),
            ));
        }
        Line::from(spans)
    };
    f.render_widget(Paragraph::new(line).style(Style::default().bg(th.mantle)), area);
}
