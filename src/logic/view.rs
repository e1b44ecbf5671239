use crate::state::{QueryStatus, TransferEvent};

/// Message shown for a successful query with zero rows.
pub const EMPTY_MESSAGE: &str = "No transfer events found";
/// Message shown for a query that has never been triggered.
pub const NO_DATA_MESSAGE: &str = "No data available";
/// Message shown while a request is in flight.
pub const LOADING_MESSAGE: &str = "Loading...";

/// What the content area of a tab should display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentView<'a> {
    /// Loading indicator.
    Loading,
    /// Error text, already prefixed with `"Error: "`.
    Error(String),
    /// Query has not produced data yet.
    NoData,
    /// Query succeeded with zero rows.
    Empty,
    /// Rows to tabulate, in server order.
    Rows(&'a [TransferEvent]),
}

/// What: Decide how to present one query's state.
///
/// Inputs:
/// - `status`: Current status of the tab's binding
///
/// Output:
/// - Exactly one view; precedence is loading, then error, then empty/no-data,
///   then the table.
#[must_use]
pub fn content_view(status: &QueryStatus) -> ContentView<'_> {
    match status {
        QueryStatus::Loading => ContentView::Loading,
        QueryStatus::Failed(msg) => ContentView::Error(format!("Error: {msg}")),
        QueryStatus::Idle => ContentView::NoData,
        QueryStatus::Succeeded(rows) if rows.is_empty() => ContentView::Empty,
        QueryStatus::Succeeded(rows) => ContentView::Rows(rows),
    }
}

/// Whether any row carries a transfer type, so the Type column is shown.
#[must_use]
pub fn has_transfer_type(rows: &[TransferEvent]) -> bool {
    rows.iter().any(|r| r.transfer_type.is_some())
}
