//! Graceful shutdown handling.

use std::time::Duration;

use log::{info, warn};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Cancels the token when the process receives Ctrl-C.
pub fn cancel_on_ctrl_c(cancel: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl-C, shutting down");
                cancel.cancel();
            }
            Err(e) => warn!("Failed to listen for Ctrl-C: {}", e),
        }
    });
}

/// Stops polling and drains in-flight update handlers.
///
/// Handlers get `grace` to deliver their replies; whatever is still running
/// after that is aborted. Returns the number of handlers aborted.
pub async fn shutdown_gracefully(
    cancel: CancellationToken,
    mut tasks: JoinSet<()>,
    grace: Duration,
) -> usize {
    cancel.cancel();

    if tasks.is_empty() {
        return 0;
    }
    info!("Waiting for {} in-flight update(s)", tasks.len());

    let drained = tokio::time::timeout(grace, async {
        while tasks.join_next().await.is_some() {}
    })
    .await;

    if drained.is_ok() {
        return 0;
    }
    let remaining = tasks.len();
    warn!("Aborting {} update handler(s) still running after {:?}", remaining, grace);
    tasks.abort_all();
    while tasks.join_next().await.is_some() {}
    remaining
}
