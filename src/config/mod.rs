//! Configuration module for bridge settings and YAML loading
//!
//! This module provides:
//! - Configuration types (`BridgeConfig`, `DispatcherConfig`, `FeedConfig`)
//! - YAML loading functionality (`load_config`)
//! - Logging configuration (`init_logging`)

mod loader;
pub mod logging;
mod types;

// Re-export types
pub use types::{
    BridgeConfig, BridgeSection, DispatcherConfig, FeedConfig, FeedKind, TradingSection,
};

// Re-export loader functions
pub use loader::{load_config, load_config_from_str};

// Re-export logging functions
pub use logging::init_logging;
