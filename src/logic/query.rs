use tokio::sync::mpsc;

use crate::graphql::FetchPolicy;
use crate::queries::request_for;
use crate::state::{AppState, QueryKind, QueryOutcome, QueryRequest};

/// What: Evaluate whether a query may be dispatched right now.
///
/// Output:
/// - `Ok(())` when allowed; `Err(reason)` with a user-facing hint otherwise.
///
/// Details:
/// - Only the Logical query is gated: both form fields must be non-empty.
pub fn dispatch_guard(app: &AppState, kind: QueryKind) -> Result<(), &'static str> {
    match kind {
        QueryKind::Logical if !app.form.is_complete() => {
            Err("Enter both an account address and a minimum value to search")
        }
        _ => Ok(()),
    }
}

/// What: Dispatch one query to the worker.
///
/// Inputs:
/// - `app`: Application state; the binding moves to `Loading`
/// - `kind`: Which query
/// - `policy`: Cache policy for this execution
/// - `query_tx`: Channel to the query worker
///
/// Output:
/// - `true` when the request was sent; `false` when the guard refused it or
///   the worker is gone.
///
/// Details:
/// - The guard runs before any state changes, so a refused dispatch leaves
///   the binding exactly as it was.
pub fn send_query(
    app: &mut AppState,
    kind: QueryKind,
    policy: FetchPolicy,
    query_tx: &mpsc::UnboundedSender<QueryRequest>,
) -> bool {
    if let Err(reason) = dispatch_guard(app, kind) {
        tracing::debug!(kind = ?kind, reason, "[Query] dispatch refused by guard");
        app.status_message = Some(reason.to_string());
        return false;
    }
    let request = request_for(kind, app);
    let id = app.begin_request(kind);
    app.binding_mut(kind).last_variables = Some(request.variables.clone());
    tracing::info!(
        kind = ?kind,
        id,
        policy = ?policy,
        variables = %serde_json::Value::Object(request.variables.clone()),
        "[Query] dispatched"
    );
    if query_tx
        .send(QueryRequest {
            kind,
            id,
            request,
            policy,
        })
        .is_err()
    {
        tracing::warn!(kind = ?kind, id, "[Query] worker channel closed");
        app.apply_outcome(QueryOutcome {
            kind,
            id,
            result: Err("query worker is not running".to_string()),
        });
        return false;
    }
    true
}

/// What: Fire the queries that run on mount (Sorted, Filtered, Paginated).
///
/// Details:
/// - The Logical query stays `Idle` until the user submits a search.
pub fn mount(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryRequest>) {
    for kind in QueryKind::ALL {
        if kind.runs_on_mount() {
            send_query(app, kind, FetchPolicy::CacheFirst, query_tx);
        }
    }
}

/// What: Handle the Search action of the Logical tab.
///
/// Output:
/// - `true` when the Logical query was re-dispatched.
///
/// Details:
/// - Uses exactly the current field values. Each click goes to the network so
///   a repeated search shows fresh data.
pub fn submit_search(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryRequest>) -> bool {
    let sent = send_query(app, QueryKind::Logical, FetchPolicy::NetworkOnly, query_tx);
    if sent {
        app.status_message = None;
    }
    sent
}

/// What: Advance the Paginated tab by one page and re-fetch it.
pub fn next_page(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryRequest>) -> bool {
    app.page_skip = app.page_skip.saturating_add(app.page_size);
    send_query(app, QueryKind::Paginated, FetchPolicy::CacheFirst, query_tx)
}

/// What: Step the Paginated tab back one page and re-fetch it.
///
/// Output:
/// - `false` without dispatching when already on the first page.
pub fn prev_page(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryRequest>) -> bool {
    if app.page_skip == 0 {
        return false;
    }
    app.page_skip = app.page_skip.saturating_sub(app.page_size);
    send_query(app, QueryKind::Paginated, FetchPolicy::CacheFirst, query_tx)
}

/// What: Re-fetch the selected tab's query from the network.
///
/// Details:
/// - The Logical tab only refreshes once it has been searched at least once
///   and the guard still passes.
pub fn refresh_current(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryRequest>) -> bool {
    let kind = app.tab;
    if kind == QueryKind::Logical && app.binding(kind).request_id == 0 {
        return false;
    }
    send_query(app, kind, FetchPolicy::NetworkOnly, query_tx)
}

/// What: Apply a worker outcome to the state.
///
/// Output:
/// - `true` when it changed a binding (and a redraw is useful).
pub fn apply_outcome(app: &mut AppState, outcome: QueryOutcome) -> bool {
    match &outcome.result {
        Ok(rows) => tracing::info!(
            kind = ?outcome.kind,
            id = outcome.id,
            rows = rows.len(),
            "[Query] succeeded"
        ),
        Err(msg) => tracing::warn!(
            kind = ?outcome.kind,
            id = outcome.id,
            error = %msg,
            "[Query] failed"
        ),
    }
    app.apply_outcome(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{QueryStatus, TransferEvent};

    fn drain(rx: &mut mpsc::UnboundedReceiver<QueryRequest>) -> Vec<QueryRequest> {
        let mut out = Vec::new();
        while let Ok(r) = rx.try_recv() {
            out.push(r);
        }
        out
    }

    #[test]
    /// What: Mount fires exactly the three unconditional queries.
    fn mount_dispatches_three_queries() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        mount(&mut app, &tx);
        let kinds: Vec<QueryKind> = drain(&mut rx).into_iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![QueryKind::Sorted, QueryKind::Filtered, QueryKind::Paginated]
        );
        assert_eq!(app.status(QueryKind::Logical), &QueryStatus::Idle);
        assert!(app.status(QueryKind::Sorted).is_loading());
    }

    #[test]
    /// What: The Logical query is gated on both inputs and sends exactly the field values.
    fn logical_is_gated_until_both_fields_are_filled() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();

        assert!(!submit_search(&mut app, &tx));
        app.form.account_address = "0x4d02aF17A29cdA77416A1F60Eae9092BB6d9c026".into();
        assert!(!submit_search(&mut app, &tx));
        assert!(drain(&mut rx).is_empty());
        assert_eq!(app.status(QueryKind::Logical), &QueryStatus::Idle);
        assert!(app.status_message.is_some());

        app.form.min_value = "100".into();
        assert!(submit_search(&mut app, &tx));
        let sent = drain(&mut rx);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].kind, QueryKind::Logical);
        assert_eq!(sent[0].policy, FetchPolicy::NetworkOnly);
        assert_eq!(
            sent[0].request.variables["from"],
            "0x4d02aF17A29cdA77416A1F60Eae9092BB6d9c026"
        );
        assert_eq!(sent[0].request.variables["value"], "100");
        assert!(app.status(QueryKind::Logical).is_loading());
        assert!(app.status_message.is_none());
    }

    #[test]
    fn pagination_moves_by_page_size_and_never_below_zero() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        assert!(!prev_page(&mut app, &tx));
        assert!(next_page(&mut app, &tx));
        assert!(next_page(&mut app, &tx));
        assert_eq!(app.page_skip, 20);
        assert!(prev_page(&mut app, &tx));
        assert_eq!(app.page_skip, 10);
        let skips: Vec<serde_json::Value> = drain(&mut rx)
            .into_iter()
            .map(|r| r.request.variables["skip"].clone())
            .collect();
        assert_eq!(
            skips,
            vec![
                serde_json::Value::from(10),
                serde_json::Value::from(20),
                serde_json::Value::from(10)
            ]
        );
    }

    #[test]
    fn refresh_skips_never_searched_logical_tab() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        app.select_tab(QueryKind::Logical);
        app.form.account_address = "0x1".into();
        app.form.min_value = "1".into();
        assert!(!refresh_current(&mut app, &tx));
        assert!(drain(&mut rx).is_empty());

        app.select_tab(QueryKind::Filtered);
        assert!(refresh_current(&mut app, &tx));
        let sent = drain(&mut rx);
        assert_eq!(sent[0].kind, QueryKind::Filtered);
        assert_eq!(sent[0].policy, FetchPolicy::NetworkOnly);
    }

    #[test]
    fn closed_worker_channel_fails_the_binding() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let mut app = AppState::default();
        assert!(!send_query(
            &mut app,
            QueryKind::Sorted,
            FetchPolicy::CacheFirst,
            &tx
        ));
        assert!(matches!(
            app.status(QueryKind::Sorted),
            QueryStatus::Failed(_)
        ));
    }

    #[test]
    fn outcome_for_one_tab_leaves_others() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = AppState::default();
        mount(&mut app, &tx);
        let sent = drain(&mut rx);
        let sorted = sent
            .iter()
            .find(|r| r.kind == QueryKind::Sorted)
            .expect("sorted");
        assert!(apply_outcome(
            &mut app,
            QueryOutcome {
                kind: QueryKind::Sorted,
                id: sorted.id,
                result: Ok(vec![TransferEvent {
                    id: "1".into(),
                    from: "0xA".into(),
                    to: "0xB".into(),
                    value: "500".into(),
                    transfer_type: None,
                }]),
            }
        ));
        assert_eq!(app.status(QueryKind::Sorted).rows().len(), 1);
        assert!(app.status(QueryKind::Filtered).is_loading());
        assert!(app.status(QueryKind::Paginated).is_loading());
    }
}
