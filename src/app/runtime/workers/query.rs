use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::graphql::QueryClient;
use crate::state::{QueryKind, QueryOutcome, QueryRequest, TransferEvent};

/// Message delivered when a query task dies before producing a result.
pub const TASK_FAILED_MESSAGE: &str = "query task failed";

/// What: Wait for one query task and turn its result into an outcome.
///
/// Inputs:
/// - `kind`, `id`: Binding and dispatch id the outcome belongs to
/// - `handle`: The task executing the query
///
/// Output:
/// - The task's result, or [`TASK_FAILED_MESSAGE`] when it panicked or was
///   cancelled, so the binding never stays `Loading`.
async fn await_outcome(
    kind: QueryKind,
    id: u64,
    handle: JoinHandle<Result<Vec<TransferEvent>, String>>,
) -> QueryOutcome {
    let result = match handle.await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(kind = ?kind, id, error = ?e, "[Worker] query task panicked");
            Err(TASK_FAILED_MESSAGE.to_string())
        }
    };
    QueryOutcome { kind, id, result }
}

/// What: Spawn the background worker that executes query requests.
///
/// Inputs:
/// - `query_rx`: Requests from the UI loop
/// - `client`: Shared client (cache included)
/// - `outcome_tx`: Where each outcome is delivered
///
/// Details:
/// - Every request runs in its own task, so queries are in flight
///   concurrently and may complete in any order.
/// - Errors are flattened to their display text at this boundary.
/// - Always sends an outcome, even if the query task panics.
/// - The worker stops once every sender is dropped.
pub fn spawn_query_worker(
    mut query_rx: mpsc::UnboundedReceiver<QueryRequest>,
    client: Arc<QueryClient>,
    outcome_tx: mpsc::UnboundedSender<QueryOutcome>,
) {
    tokio::spawn(async move {
        while let Some(req) = query_rx.recv().await {
            let client = Arc::clone(&client);
            let tx = outcome_tx.clone();
            let (kind, id) = (req.kind, req.id);
            let handle = tokio::spawn(async move {
                let started = Instant::now();
                let result = client
                    .execute(&req.request, req.policy)
                    .await
                    .map(|r| r.transfer_events)
                    .map_err(|e| e.to_string());
                tracing::debug!(
                    kind = ?req.kind,
                    id = req.id,
                    ok = result.is_ok(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "[Worker] query finished"
                );
                result
            });
            tokio::spawn(async move {
                let _ = tx.send(await_outcome(kind, id, handle).await);
            });
        }
        tracing::debug!("[Worker] query channel closed");
    });
}
