//! Command dispatcher: dedup check, symbol remap, durable hand-off
//!
//! For each polled event the dispatcher derives the event identity, asks
//! the dedup store whether a command was already delivered, builds and
//! serializes a fresh command, and enqueues it with bounded fixed-backoff
//! retry. The dedup record is written only after a successful enqueue;
//! the crash window between rename and insert can therefore produce a
//! duplicate command on a later redelivery, which downstream must accept
//! (at-least-once delivery, best-effort dedup).
//!
//! Expected failures (queue write exhaustion) never surface as errors:
//! they are logged and the event stays unrecorded so a future upstream
//! redelivery retries it wholesale. Only defects propagate: dedup store
//! I/O and serialization errors.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::config::BridgeConfig;
use crate::core::dedup::DedupStore;
use crate::core::events::{Command, TradeEvent};
use crate::core::queue::{CommandQueue, QueuePaths};
use crate::error::Result;

/// What happened to one dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Command enqueued and identity recorded
    Dispatched,
    /// Identity already recorded; nothing was written
    Duplicate,
    /// Every write attempt failed; identity left unrecorded
    WriteFailed,
}

pub struct Dispatcher {
    dedup: DedupStore,
    queue: CommandQueue,
    symbol_map: HashMap<String, String>,
    max_write_retries: u32,
    retry_backoff: Duration,
}

impl Dispatcher {
    pub fn new(
        dedup: DedupStore,
        queue: CommandQueue,
        symbol_map: HashMap<String, String>,
        max_write_retries: u32,
        retry_backoff: Duration,
    ) -> Self {
        Self {
            dedup,
            queue,
            symbol_map,
            max_write_retries,
            retry_backoff,
        }
    }

    /// Build a dispatcher from validated config: opens the dedup store and
    /// provisions the mailbox directories.
    pub fn from_config(config: &BridgeConfig) -> Result<Self> {
        let dispatcher_config = &config.bridge.dispatcher;
        let dedup = DedupStore::open(Path::new(&config.bridge.state_db_path))?;
        let queue = CommandQueue::new(QueuePaths::provision(dispatcher_config)?);
        Ok(Self::new(
            dedup,
            queue,
            config.trading.symbol_map.clone(),
            dispatcher_config.max_write_retries,
            Duration::from_secs_f64(dispatcher_config.retry_backoff_seconds),
        ))
    }

    /// Static rename table; identity for unmapped symbols, `None` passes
    /// through unchanged.
    fn map_symbol(&self, symbol: Option<&str>) -> Option<String> {
        symbol.map(|s| {
            self.symbol_map
                .get(s)
                .cloned()
                .unwrap_or_else(|| s.to_string())
        })
    }

    /// Dedup-checked, at-least-once-safe delivery of one event.
    ///
    /// `Err` is returned only for defects (dedup store I/O, serialization);
    /// an exhausted queue write resolves to `Ok(WriteFailed)` after logging.
    pub async fn dispatch(&mut self, event: &TradeEvent) -> Result<DispatchOutcome> {
        let event_id = event.identity();

        if self.dedup.has(&event_id)? {
            info!(
                event_type = "DUPLICATE_IGNORED",
                event_id = %event_id,
                "Duplicate event ignored"
            );
            return Ok(DispatchOutcome::Duplicate);
        }

        let command = Command::from_event(event, self.map_symbol(event.symbol.as_deref()));
        // Serialized once: retries rewrite the same payload under a fresh
        // filename, they never regenerate the command_id.
        let payload = serde_json::to_string(&command)?;

        for attempt in 1..=self.max_write_retries {
            match self.queue.enqueue(&payload) {
                Ok(path) => {
                    // Enqueue-then-record, never the reverse.
                    self.dedup.record(&event_id)?;
                    info!(
                        event_type = "COMMAND_DISPATCHED",
                        command_id = %command.command_id,
                        event_id = %event_id,
                        path = %path.display(),
                        "Dispatched command"
                    );
                    return Ok(DispatchOutcome::Dispatched);
                }
                Err(e) => {
                    warn!(
                        event_type = "QUEUE_WRITE_FAILED",
                        attempt = attempt,
                        max_attempts = self.max_write_retries,
                        error = %e,
                        "Failed to write command"
                    );
                    sleep(self.retry_backoff).await;
                }
            }
        }

        error!(
            event_type = "DISPATCH_EXHAUSTED",
            event_id = %event_id,
            attempts = self.max_write_retries,
            "Failed to dispatch event after retries"
        );
        Ok(DispatchOutcome::WriteFailed)
    }
}
