//! Driver loop for the bridge
//!
//! Strictly sequential single worker: poll the feed, dispatch each event
//! in source order, then sleep for the poll interval. Shutdown is
//! cooperative; the signal is only observed between passes, so an
//! in-progress poll-and-dispatch pass always completes and no event is
//! abandoned mid-dispatch.

use std::time::Duration;

use tokio::sync::broadcast;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::core::dispatcher::Dispatcher;
use crate::error::Result;
use crate::feeds::TradeFeed;

/// Run the poll-dispatch-sleep loop until a shutdown signal arrives.
///
/// Feed and dedup store errors terminate the loop with `Err`; everything
/// the pipeline treats as expected (duplicates, exhausted queue writes,
/// malformed feed lines) is absorbed further down and the loop keeps
/// running.
pub async fn bridge_task<F>(
    feed: &mut F,
    dispatcher: &mut Dispatcher,
    poll_interval: Duration,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<()>
where
    F: TradeFeed + Send,
{
    info!(
        event_type = "BRIDGE_STARTED",
        feed = feed.name(),
        poll_interval_secs = poll_interval.as_secs_f64(),
        "Bridge started"
    );

    loop {
        let events = feed.poll().await?;
        if !events.is_empty() {
            debug!(
                event_type = "FEED_BATCH",
                count = events.len(),
                "Polled new events"
            );
        }

        for event in &events {
            dispatcher.dispatch(event).await?;
        }

        tokio::select! {
            _ = shutdown_rx.recv() => {
                info!(
                    event_type = "BRIDGE_SHUTDOWN",
                    reason = "shutdown_signal",
                    "Shutting down"
                );
                break;
            }
            _ = sleep(poll_interval) => {}
        }
    }

    info!(event_type = "BRIDGE_STOPPED", "Bridge stopped");
    Ok(())
}
