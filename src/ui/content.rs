use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::{
    ContentView, EMPTY_MESSAGE, LOADING_MESSAGE, NO_DATA_MESSAGE, content_view, has_transfer_type,
};
use crate::state::{AppState, QueryKind, TransferEvent};
use crate::theme::Theme;

/// What: Heading of the selected tab; the Paginated tab includes its row window.
pub(super) fn heading(app: &AppState) -> String {
    match app.tab {
        QueryKind::Paginated => format!(
            "{} · rows {}..{}",
            QueryKind::Paginated.heading(),
            app.page_skip,
            app.page_skip.saturating_add(app.page_size)
        ),
        kind => kind.heading().to_string(),
    }
}

/// What: Build the events table for a populated result.
///
/// Details:
/// - The `Type` column appears only when a row carries a transfer type.
/// - Values are right-aligned in a column sized to the widest value.
fn build_table<'a>(rows: &'a [TransferEvent], th: &Theme) -> Table<'a> {
    let with_type = has_transfer_type(rows);
    let value_w = rows
        .iter()
        .map(|r| r.value.width())
        .max()
        .unwrap_or(0)
        .max("Value".len());
    let value_w = u16::try_from(value_w).unwrap_or(u16::MAX);

    let header_style = Style::default().fg(th.lavender).add_modifier(Modifier::BOLD);
    let mut header = vec![
        Cell::from("From"),
        Cell::from("To"),
        Cell::from(Line::from("Value").right_aligned()),
    ];
    if with_type {
        header.push(Cell::from("Type"));
    }

    let body: Vec<Row> = rows
        .iter()
        .map(|r| {
            let mut cells = vec![
                Cell::from(r.from.as_str()),
                Cell::from(r.to.as_str()),
                Cell::from(
                    Line::from(Span::styled(r.value.as_str(), Style::default().fg(th.green)))
                        .right_aligned(),
                ),
            ];
            if with_type {
                cells.push(Cell::from(Span::styled(
                    r.transfer_type.as_deref().unwrap_or(""),
                    Style::default().fg(th.subtext0),
                )));
            }
            Row::new(cells).style(Style::default().fg(th.text))
        })
        .collect();

    let mut widths = vec![
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(value_w),
    ];
    if with_type {
        widths.push(Constraint::Length(12));
    }
    Table::new(body, widths)
        .header(Row::new(header).style(header_style))
        .column_spacing(2)
        .row_highlight_style(Style::default().bg(th.surface1).add_modifier(Modifier::BOLD))
}

/// What: Render the selected tab's content block according to its [`ContentView`].
///
/// Details:
/// - Exactly one of loading, error, no-data, empty or table is shown.
pub(super) fn render_content(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let kind = app.tab;
    let mut block = Block::default()
        .title(Span::styled(
            format!(" {} ", heading(app)),
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));

    let message = |text: String, style: Style| {
        Paragraph::new(Span::styled(text, style)).wrap(Wrap { trim: true })
    };
    let view = content_view(&app.bindings[kind.index()].status);
    match view {
        ContentView::Loading => f.render_widget(
            message(
                LOADING_MESSAGE.to_string(),
                Style::default().fg(th.yellow),
            )
            .block(block),
            area,
        ),
        ContentView::Error(text) => f.render_widget(
            message(text, Style::default().fg(th.red)).block(block),
            area,
        ),
        ContentView::NoData => f.render_widget(
            message(
                NO_DATA_MESSAGE.to_string(),
                Style::default().fg(th.overlay1),
            )
            .block(block),
            area,
        ),
        ContentView::Empty => f.render_widget(
            message(
                EMPTY_MESSAGE.to_string(),
                Style::default().fg(th.subtext0),
            )
            .block(block),
            area,
        ),
        ContentView::Rows(rows) => {
            block = block.title_bottom(Span::styled(
                format!(" {} events ", rows.len()),
                Style::default().fg(th.overlay2),
            ));
            let table = build_table(rows, th).block(block);
            f.render_stateful_widget(table, area, &mut app.table_states[kind.index()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paginated_heading_shows_row_window() {
        let mut app = AppState::default();
        app.select_tab(QueryKind::Paginated);
        app.page_skip = 20;
        assert_eq!(heading(&app), "Paginated · rows 20..30");
        app.select_tab(QueryKind::Filtered);
        assert_eq!(heading(&app), "Filtered by Value > 1000");
    }
}
