//! Trade Bridge entry point
//!
//! Orchestrates:
//! 1. Config + logging initialization
//! 2. Dedup store + mailbox provisioning via the dispatcher
//! 3. Feed construction from config
//! 4. Poll-dispatch-sleep driver loop
//! 5. Ctrl+C graceful shutdown

use std::path::Path;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::info;

use trade_bridge::config::{init_logging, load_config};
use trade_bridge::core::{bridge_task, Dispatcher};
use trade_bridge::feeds::create_feed;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());
    let config = load_config(Path::new(&config_path))?;
    info!(
        config = %config_path,
        feed = %config.bridge.feed.kind,
        queue_base = %config.bridge.dispatcher.queue_base_path,
        "Config loaded"
    );

    let mut dispatcher = Dispatcher::from_config(&config)?;
    let mut feed = create_feed(&config.bridge.feed)?;

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!(event_type = "SHUTDOWN_SIGNAL", "Received Ctrl+C. Shutting down.");
            let _ = shutdown_tx.send(());
        }
    });

    let poll_interval = Duration::from_secs_f64(config.bridge.poll_interval_seconds);
    bridge_task(&mut feed, &mut dispatcher, poll_interval, shutdown_rx).await?;

    Ok(())
}
