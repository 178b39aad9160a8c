//! Core pipeline: event types, dedup store, queue writer, dispatcher
//!
//! This module uses explicit re-exports instead of glob exports to keep
//! the public API surface visible.

pub mod dedup;
pub mod dispatcher;
pub mod events;
pub mod queue;
pub mod runtime;

pub use dedup::DedupStore;
pub use dispatcher::{DispatchOutcome, Dispatcher};
pub use events::{Command, TradeEvent};
pub use queue::{CommandQueue, QueuePaths};
pub use runtime::bridge_task;
