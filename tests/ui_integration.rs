//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests verify what the dashboard draws for each query state without
//! requiring a real terminal.

use ratatui::{Terminal, backend::TestBackend};

use tokentrackr::state::{AppState, QueryKind, QueryOutcome, TransferEvent};
use tokentrackr::ui;

/// What: Create a test terminal with the given dimensions.
fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// What: Render one frame and return the buffer as text lines.
fn render_lines(app: &mut AppState) -> Vec<String> {
    let mut terminal = create_test_terminal(120, 40);
    terminal
        .draw(|f| ui::ui(f, app))
        .expect("failed to draw test terminal");
    let buf = terminal.backend().buffer();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn event(id: &str, from: &str, to: &str, value: &str) -> TransferEvent {
    TransferEvent {
        id: id.into(),
        from: from.into(),
        to: to.into(),
        value: value.into(),
        transfer_type: None,
    }
}

/// What: Resolve one query the way the worker would.
fn resolve(app: &mut AppState, kind: QueryKind, result: Result<Vec<TransferEvent>, String>) {
    let id = app.begin_request(kind);
    assert!(app.apply_outcome(QueryOutcome { kind, id, result }));
}

fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|l| l.contains(needle))
}

#[test]
/// What: A tab whose query is in flight shows the loading indicator, never another tab's rows.
///
/// Details:
/// - Filtered has resolved with a row; Sorted is still loading and is selected.
fn ui_loading_tab_never_shows_other_tab_data() {
    let mut app = AppState::default();
    app.begin_request(QueryKind::Sorted);
    resolve(
        &mut app,
        QueryKind::Filtered,
        Ok(vec![event("9", "0xFILTERED", "0xB", "5000")]),
    );

    let lines = render_lines(&mut app);
    assert!(contains(&lines, "Loading..."));
    assert!(!contains(&lines, "0xFILTERED"));
    assert!(contains(&lines, "Sorted by Value"));
}

#[test]
/// What: An empty successful response shows the empty-state message only.
fn ui_empty_result_shows_empty_message() {
    let mut app = AppState::default();
    resolve(&mut app, QueryKind::Sorted, Ok(Vec::new()));

    let lines = render_lines(&mut app);
    assert!(contains(&lines, "No transfer events found"));
    assert!(!contains(&lines, "Error:"));
    assert!(!contains(&lines, "From"));
}

#[test]
/// What: One event renders exactly one table row with its addresses and value.
fn ui_single_event_renders_one_row() {
    let mut app = AppState::default();
    resolve(
        &mut app,
        QueryKind::Sorted,
        Ok(vec![event("1", "0xA", "0xB", "500")]),
    );

    let lines = render_lines(&mut app);
    let rows: Vec<&String> = lines.iter().filter(|l| l.contains("0xA")).collect();
    assert_eq!(rows.len(), 1, "expected exactly one data row");
    assert!(rows[0].contains("0xB"));
    assert!(rows[0].contains("500"));
    assert!(
        rows[0].find("0xA") < rows[0].find("0xB") && rows[0].find("0xB") < rows[0].find("500")
    );
    assert!(contains(&lines, "From"));
    assert!(contains(&lines, "Value"));
    assert!(!contains(&lines, "Type"));
}

#[test]
/// What: A failed query renders `Error: <message>` and leaves other tabs intact.
fn ui_error_is_isolated_to_its_tab() {
    let mut app = AppState::default();
    resolve(
        &mut app,
        QueryKind::Filtered,
        Err("Response not successful: Received status code 500".into()),
    );
    resolve(
        &mut app,
        QueryKind::Sorted,
        Ok(vec![event("1", "0xA", "0xB", "500")]),
    );

    app.select_tab(QueryKind::Filtered);
    let lines = render_lines(&mut app);
    assert!(contains(
        &lines,
        "Error: Response not successful: Received status code 500"
    ));

    app.select_tab(QueryKind::Sorted);
    let lines = render_lines(&mut app);
    assert!(!contains(&lines, "Error:"));
    assert!(contains(&lines, "0xA"));
}

#[test]
/// What: The Logical tab shows the search form, records its hit rectangles and
/// reports no data before the first search.
fn ui_logical_tab_renders_search_form() {
    let mut app = AppState::default();
    app.select_tab(QueryKind::Logical);

    let lines = render_lines(&mut app);
    assert!(contains(&lines, "Logical Operators"));
    assert!(contains(&lines, "Account address"));
    assert!(contains(&lines, "Min value"));
    assert!(contains(&lines, "[ Search ]"));
    assert!(contains(&lines, "No data available"));
    assert!(app.address_rect.is_some());
    assert!(app.min_value_rect.is_some());
    assert!(app.search_button_rect.is_some());
}

#[test]
fn ui_other_tabs_do_not_record_form_rects() {
    let mut app = AppState::default();
    app.select_tab(QueryKind::Logical);
    render_lines(&mut app);
    app.select_tab(QueryKind::Paginated);
    let lines = render_lines(&mut app);
    assert!(app.search_button_rect.is_none());
    assert!(!contains(&lines, "[ Search ]"));
    assert!(contains(&lines, "rows 0..10"));
}

#[test]
/// What: Header shows the title, the endpoint host and the palette indicator.
fn ui_header_and_tab_bar() {
    let mut app = AppState::default();
    let lines = render_lines(&mut app);
    assert!(lines[0].contains("TokenTrackr"));
    assert!(lines[0].contains("api.studio.thegraph.com"));
    assert!(lines[0].contains("☾ Dark"));
    for title in ["Sorted", "Filtered", "Paginated", "Logical"] {
        assert!(contains(&lines, title), "missing tab {title}");
    }
    assert_eq!(app.tab_rects.len(), 4);

    app.toggle_dark_mode();
    let lines = render_lines(&mut app);
    assert!(lines[0].contains("☀ Light"));
}

#[test]
fn ui_type_column_shown_when_rows_carry_it() {
    let mut app = AppState::default();
    let mut row = event("1", "0xA", "0xB", "500");
    row.transfer_type = Some("transfer".into());
    resolve(&mut app, QueryKind::Sorted, Ok(vec![row]));
    let lines = render_lines(&mut app);
    assert!(contains(&lines, "Type"));
    assert!(contains(&lines, "transfer"));
}

#[test]
fn ui_small_terminal_does_not_panic() {
    let mut app = AppState::default();
    app.select_tab(QueryKind::Logical);
    let mut terminal = create_test_terminal(20, 6);
    terminal
        .draw(|f| ui::ui(f, &mut app))
        .expect("failed to draw small terminal");
}
