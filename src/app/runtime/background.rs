use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the blocking terminal input reader.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Destination for terminal events
/// - `event_thread_cancelled`: Set on exit; the thread stops within one poll
///
/// Details:
/// - Polls with a 50ms timeout so the cancel flag is observed promptly.
/// - Exits when the receiver is dropped; transient read errors are ignored.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !event_thread_cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(Ordering::Relaxed)
                            || event_tx.send(ev).is_err()
                        {
                            break;
                        }
                    }
                    Err(e) => tracing::trace!(error = %e, "[Input] read failed"),
                },
                Ok(false) => {}
                Err(e) => tracing::trace!(error = %e, "[Input] poll failed"),
            }
        }
        tracing::debug!("[Input] event thread stopped");
    });
}
