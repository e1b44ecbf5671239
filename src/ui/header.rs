use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, QueryKind};
use crate::theme::Theme;

/// What: Host part of the endpoint for display, or the raw string if it does
/// not parse as a URL.
pub(super) fn endpoint_host(endpoint: &str) -> String {
    reqwest::Url::parse(endpoint)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| endpoint.to_string())
}

/// Label of the dark/light indicator.
pub(super) const fn mode_label(dark_mode: bool) -> &'static str {
    if dark_mode { "☾ Dark" } else { "☀ Light" }
}

/// What: Render the one-line header with title, endpoint host and theme indicator.
///
/// Details:
/// - Records the indicator's rectangle so a click can toggle the palette.
pub(super) fn render_header(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    if area.height == 0 {
        return;
    }
    let left = Line::from(vec![
        Span::styled(
            " TokenTrackr ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ),
        Span::styled("· ", Style::default().fg(th.overlay1)),
        Span::styled(endpoint_host(&app.endpoint), Style::default().fg(th.subtext0)),
    ]);
    f.render_widget(Paragraph::new(left).style(Style::default().bg(th.mantle)), area);

    let label = format!(" {} ", mode_label(app.dark_mode));
    let w = u16::try_from(label.width()).unwrap_or(u16::MAX).min(area.width);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(w),
        y: area.y,
        width: w,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            label,
            Style::default().fg(th.yellow).bg(th.surface1),
        ))
        .alignment(Alignment::Right),
        rect,
    );
    app.dark_toggle_rect = Some((rect.x, rect.y, rect.width, rect.height));
}

/// What: Render the tab bar and record one hit rectangle per title.
///
/// Details:
/// - Rectangles mirror the `Tabs` layout: one padding cell on each side of a
///   title and a one-cell divider between titles.
pub(super) fn render_tabs(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let titles: Vec<Line> = QueryKind::ALL
        .iter()
        .map(|k| Line::from(k.title()))
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    let inner = block.inner(area);
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(block)
        .style(Style::default().fg(th.subtext1))
        .highlight_style(
            Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, area);

    let mut x = inner.x;
    let right = inner.x.saturating_add(inner.width);
    for kind in QueryKind::ALL {
        let w = u16::try_from(kind.title().width()).unwrap_or(u16::MAX);
        if x >= right {
            break;
        }
        let span = w.saturating_add(2).min(right - x);
        app.tab_rects.push((kind, (x, inner.y, span, 1)));
        x = x.saturating_add(w).saturating_add(3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_is_extracted_from_endpoint() {
        assert_eq!(
            endpoint_host("https://api.studio.thegraph.com/query/84868/analytics-usdt/version/latest"),
            "api.studio.thegraph.com"
        );
        assert_eq!(endpoint_host("not a url"), "not a url");
    }

    #[test]
    fn mode_labels() {
        assert_eq!(mode_label(true), "☾ Dark");
        assert_eq!(mode_label(false), "☀ Light");
    }
}
