//! Configuration types for the bridge
//!
//! This module defines all configuration structs that are loaded from YAML
//! once at startup and passed by reference into each component.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

// ============================================================================
// Enums
// ============================================================================

/// Supported feed source kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    /// Append-only JSONL file, one event per line
    JsonlFile,
    /// Placeholder for a platform-API-backed source; always returns nothing
    WebPlatform,
}

impl std::fmt::Display for FeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedKind::JsonlFile => write!(f, "jsonl_file"),
            FeedKind::WebPlatform => write!(f, "web_platform"),
        }
    }
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Feed source selection and source-specific settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Which feed implementation to construct
    #[serde(rename = "type")]
    pub kind: FeedKind,
    /// Path to the JSONL event file (required for `jsonl_file`)
    #[serde(default)]
    pub jsonl_path: Option<String>,
}

impl FeedConfig {
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.kind == FeedKind::JsonlFile {
            match self.jsonl_path.as_deref() {
                Some(path) if !path.trim().is_empty() => {}
                _ => {
                    return Err(BridgeError::Config(
                        "feed: jsonl_path is required for feed type 'jsonl_file'".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Output queue and retry settings consumed by the dispatcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Base directory of the mailbox (inbox/processed/failed live below it)
    pub queue_base_path: String,
    pub inbox_subdir: String,
    pub processed_subdir: String,
    pub failed_subdir: String,
    /// Write attempts per command before giving up (>= 1)
    pub max_write_retries: u32,
    /// Fixed pause between failed write attempts, in seconds (>= 0)
    pub retry_backoff_seconds: f64,
}

impl DispatcherConfig {
    pub fn validate(&self) -> Result<(), BridgeError> {
        if self.queue_base_path.trim().is_empty() {
            return Err(BridgeError::Config(
                "dispatcher: queue_base_path cannot be empty".to_string(),
            ));
        }

        for (name, value) in [
            ("inbox_subdir", &self.inbox_subdir),
            ("processed_subdir", &self.processed_subdir),
            ("failed_subdir", &self.failed_subdir),
        ] {
            if value.trim().is_empty() {
                return Err(BridgeError::Config(format!(
                    "dispatcher: {} cannot be empty",
                    name
                )));
            }
        }

        if self.max_write_retries < 1 {
            return Err(BridgeError::Config(format!(
                "dispatcher: max_write_retries must be >= 1 (got {})",
                self.max_write_retries
            )));
        }

        if !self.retry_backoff_seconds.is_finite() || self.retry_backoff_seconds < 0.0 {
            return Err(BridgeError::Config(format!(
                "dispatcher: retry_backoff_seconds must be a finite number >= 0 (got {})",
                self.retry_backoff_seconds
            )));
        }

        Ok(())
    }
}

/// Bridge process settings: poll cadence, state store, feed and dispatcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeSection {
    /// Seconds to sleep between feed polls
    pub poll_interval_seconds: f64,
    /// SQLite database holding the processed-events table
    pub state_db_path: String,
    pub feed: FeedConfig,
    pub dispatcher: DispatcherConfig,
}

impl BridgeSection {
    pub fn validate(&self) -> Result<(), BridgeError> {
        if !self.poll_interval_seconds.is_finite() || self.poll_interval_seconds <= 0.0 {
            return Err(BridgeError::Config(format!(
                "bridge: poll_interval_seconds must be a finite number > 0 (got {})",
                self.poll_interval_seconds
            )));
        }

        if self.state_db_path.trim().is_empty() {
            return Err(BridgeError::Config(
                "bridge: state_db_path cannot be empty".to_string(),
            ));
        }

        self.feed.validate()?;
        self.dispatcher.validate()?;

        Ok(())
    }
}

/// Static symbol rename table consulted read-only by the dispatcher
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TradingSection {
    /// Source symbol -> downstream symbol; symbols absent from the map
    /// pass through unchanged
    #[serde(default)]
    pub symbol_map: HashMap<String, String>,
}

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub bridge: BridgeSection,
    #[serde(default)]
    pub trading: TradingSection,
}

impl BridgeConfig {
    /// Validate all configuration rules
    pub fn validate(&self) -> Result<(), BridgeError> {
        self.bridge.validate()
    }
}

// ============================================================================
// Tests
// ============================================================================
