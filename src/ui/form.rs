use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, FormField};
use crate::theme::Theme;

/// Button caption.
pub const SEARCH_BUTTON_LABEL: &str = "[ Search ]";

/// What: Render one bordered text input and place the cursor when focused.
///
/// Output:
/// - The rectangle drawn, for hit-testing.
fn render_input(
    f: &mut Frame,
    area: Rect,
    th: &Theme,
    title: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) -> Rect {
    let border = if focused { th.sapphire } else { th.surface2 };
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(if focused { th.sapphire } else { th.subtext0 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    let text = if value.is_empty() && !focused {
        Span::styled(placeholder.to_string(), Style::default().fg(th.overlay1))
    } else {
        Span::styled(value.to_string(), Style::default().fg(th.text))
    };
    f.render_widget(Paragraph::new(text).block(block), area);
    if focused && inner.width > 0 {
        let w = u16::try_from(value.width()).unwrap_or(u16::MAX);
        let cx = inner.x.saturating_add(w.min(inner.width - 1));
        f.set_cursor_position(Position::new(cx, inner.y));
    }
    area
}

/// What: Render the Logical tab's search form and record its hit rectangles.
///
/// Inputs:
/// - `f`: Frame
/// - `app`: State holding form values, focus and the rectangles to update
/// - `area`: Four rows: the two inputs side by side, then the button line
/// - `th`: Palette
pub(super) fn render_form(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);
    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[0]);

    let focus = app.form.focus;
    let addr = render_input(
        f,
        inputs[0],
        th,
        "Account address",
        &app.form.account_address,
        "0x… sender address",
        focus == Some(FormField::Address),
    );
    let min = render_input(
        f,
        inputs[1],
        th,
        "Min value",
        &app.form.min_value,
        "e.g. 100",
        focus == Some(FormField::MinValue),
    );
    app.address_rect = Some((addr.x, addr.y, addr.width, addr.height));
    app.min_value_rect = Some((min.x, min.y, min.width, min.height));

    if rows[1].height == 0 || rows[1].width < 2 {
        return;
    }
    let button_focused = focus == Some(FormField::SearchButton);
    let style = if button_focused {
        Style::default()
            .fg(th.crust)
            .bg(th.green)
            .add_modifier(Modifier::BOLD)
    } else if app.form.is_complete() {
        Style::default().fg(th.green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(th.overlay2)
    };
    let bw = u16::try_from(SEARCH_BUTTON_LABEL.width())
        .unwrap_or(u16::MAX)
        .min(rows[1].width.saturating_sub(1));
    let button = Rect {
        x: rows[1].x + 1,
        y: rows[1].y,
        width: bw,
        height: 1,
    };
    f.render_widget(Paragraph::new(Span::styled(SEARCH_BUTTON_LABEL, style)), button);
    app.search_button_rect = Some((button.x, button.y, button.width, button.height));
}
