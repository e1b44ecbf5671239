use std::sync::Arc;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::Result;
use crate::graphql::{ClientConfig, QueryClient};
use crate::logic;
use crate::state::AppState;
use crate::theme::Settings;
use crate::ui::ui;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod workers;

use background::spawn_event_thread;
use channels::Channels;

/// Environment variable that skips raw-mode setup and terminal input (tests).
pub const HEADLESS_ENV: &str = "TOKENTRACKR_TEST_HEADLESS";

/// What: Run the dashboard end-to-end.
///
/// Inputs:
/// - `settings`: Effective settings (config file merged with CLI overrides)
///
/// Output:
/// - `Ok(())` when the user quits; `Err` on terminal setup or client
///   construction failures. Query failures are never fatal.
///
/// Details:
/// - Builds one shared [`QueryClient`] for the whole session and hands it to
///   the query worker.
/// - Fires the three unconditional queries on mount, then redraws after every
///   input event and every query outcome.
/// - With `TOKENTRACKR_TEST_HEADLESS=1` nothing touches the TTY and the loop
///   only reacts to query outcomes.
pub async fn run(settings: Settings) -> Result<()> {
    let headless = std::env::var(HEADLESS_ENV).ok().as_deref() == Some("1");

    let client = Arc::new(QueryClient::new(ClientConfig::from_settings(&settings))?);
    tracing::info!(endpoint = client.endpoint(), headless, "[Runtime] starting");

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::from_settings(&settings);
    let mut channels = Channels::new(Arc::clone(&client));
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    logic::mount(&mut app, &channels.query_tx);

    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, &mut app))
        {
            tracing::warn!(error = %e, "[Runtime] draw failed");
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if crate::events::handle_event(ev, &mut app, &channels.query_tx) {
                    break;
                }
            }
            Some(outcome) = channels.outcome_rx.recv() => {
                logic::apply_outcome(&mut app, outcome);
            }
            else => break,
        }
    }

    tracing::debug!("[Runtime] main loop exited");
    channels
        .event_thread_cancelled
        .store(true, std::sync::atomic::Ordering::Relaxed);

    if !headless {
        restore_terminal()?;
    }
    tracing::info!(cached = client.cache_len(), "[Runtime] stopped");
    Ok(())
}
