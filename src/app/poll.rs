//! Long-poll loop.
//!
//! Fetches update batches and hands each update to its own task, so a slow
//! DNS lookup never delays the next poll.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, warn};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::dispatch::Dispatcher;
use crate::telegram::{ChatTransport, UpdateSource};

/// Everything the poll loop needs, bundled for spawning.
pub struct PollContext {
    pub source: Arc<dyn UpdateSource>,
    pub transport: Arc<dyn ChatTransport>,
    pub dispatcher: Arc<Dispatcher>,
    pub poll_timeout_secs: u64,
    /// Pause after a failed `getUpdates` before polling again.
    pub error_backoff: Duration,
}

/// Polls until `cancel` fires.
///
/// Returns the handler tasks that were still running at cancellation, so the
/// caller can drain them.
pub async fn poll_updates(ctx: PollContext, cancel: CancellationToken) -> JoinSet<()> {
    let mut offset: Option<i64> = None;
    let mut tasks = JoinSet::new();

    loop {
        reap_finished(&mut tasks);

        let batch = tokio::select! {
            _ = cancel.cancelled() => break,
            batch = ctx.source.get_updates(offset, ctx.poll_timeout_secs) => batch,
        };

        match batch {
            Ok(updates) => {
                if !updates.is_empty() {
                    debug!("Received {} update(s)", updates.len());
                }
                for update in updates {
                    // Acknowledge before handling: a reply that fails is not retried.
                    offset = offset.max(Some(update.update_id + 1));
                    let dispatcher = Arc::clone(&ctx.dispatcher);
                    let transport = Arc::clone(&ctx.transport);
                    tasks.spawn(async move {
                        dispatcher.handle_update(update, transport.as_ref()).await;
                    });
                }
            }
            Err(e) => {
                warn!(
                    "Failed to fetch updates: {}. Retrying in {:?}",
                    e, ctx.error_backoff
                );
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tokio::time::sleep(ctx.error_backoff) => {}
                }
            }
        }
    }

    tasks
}

fn reap_finished(tasks: &mut JoinSet<()>) {
    while let Some(result) = tasks.try_join_next() {
        if let Err(e) = result {
            if e.is_panic() {
                error!("Update handler panicked: {}", e);
            }
        }
    }
}
