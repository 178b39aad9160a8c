//! Trade-lifecycle event and command types
//!
//! A `TradeEvent` is one upstream-reported fact (e.g. a trade opened or
//! closed) read from the feed. A `Command` is the normalized, downstream-
//! facing message derived from a non-duplicate event. Events are ephemeral;
//! only commands and dedup records are ever persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One trade-lifecycle fact reported by an upstream source.
///
/// `(source, source_trade_id, event)` identifies a logical occurrence; the
/// same triple may legitimately arrive more than once across polls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeEvent {
    /// Lifecycle kind, e.g. "OPEN" or "CLOSE" (opaque to the bridge)
    pub event: String,
    /// Feed identifier, e.g. "vantage"
    pub source: String,
    /// Trade id unique within the source
    pub source_trade_id: String,
    pub symbol: Option<String>,
    pub side: String,
    pub lots: Decimal,
    pub sl: Option<Decimal>,
    pub tp: Option<Decimal>,
    /// Producer-supplied ISO-8601 timestamp, not validated for ordering
    pub timestamp: String,
}

impl TradeEvent {
    /// Dedup key: `source:source_trade_id:event`.
    ///
    /// Colon-delimited with no escaping; fields are assumed colon-free.
    pub fn identity(&self) -> String {
        format!("{}:{}:{}", self.source, self.source_trade_id, self.event)
    }
}

/// Normalized command written to the output queue, one JSON object per file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Command {
    /// Fresh UUID per dispatch invocation, never derived from the event
    pub command_id: String,
    pub event: String,
    pub source: String,
    pub source_trade_id: String,
    /// Symbol after the static remap has been applied
    pub symbol: Option<String>,
    pub side: String,
    pub lots: Decimal,
    pub sl: Option<Decimal>,
    pub tp: Option<Decimal>,
    pub timestamp: String,
}

impl Command {
    /// Build a command from an event, with the already-remapped symbol.
    pub fn from_event(event: &TradeEvent, symbol: Option<String>) -> Self {
        Self {
            command_id: Uuid::new_v4().to_string(),
            event: event.event.clone(),
            source: event.source.clone(),
            source_trade_id: event.source_trade_id.clone(),
            symbol,
            side: event.side.clone(),
            lots: event.lots,
            sl: event.sl,
            tp: event.tp,
            timestamp: event.timestamp.clone(),
        }
    }
}
