use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::graphql::QueryClient;
use crate::state::{QueryOutcome, QueryRequest};

use super::workers::query::spawn_query_worker;

/// What: Channel endpoints used by the main event loop.
///
/// Details:
/// - Terminal events come from the input thread; query requests go to the
///   worker and its outcomes come back on `outcome_rx`.
pub struct Channels {
    /// Sender handed to the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Terminal events for the main loop.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit to stop the input thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests to the query worker.
    pub query_tx: mpsc::UnboundedSender<QueryRequest>,
    /// Outcomes from the query worker.
    pub outcome_rx: mpsc::UnboundedReceiver<QueryOutcome>,
}

impl Channels {
    /// What: Create the channels and spawn the query worker.
    ///
    /// Inputs:
    /// - `client`: Shared client the worker executes requests with
    pub fn new(client: Arc<QueryClient>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryRequest>();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel::<QueryOutcome>();

        spawn_query_worker(query_rx, client, outcome_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            query_tx,
            outcome_rx,
        }
    }
}
