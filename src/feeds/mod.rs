//! Feed sources for trade-lifecycle events
//!
//! This module provides the polymorphic feed abstraction: anything that
//! can produce the new events since its last acknowledged position.
//! Concrete sources are selected from config via `create_feed`. Uses an
//! enum-based dispatch pattern (no `Box<dyn>`) to preserve
//! monomorphization.

pub mod jsonl;
pub mod stub;

use std::path::Path;

use async_trait::async_trait;

use crate::config::{FeedConfig, FeedKind};
use crate::core::events::TradeEvent;
use crate::error::{BridgeError, Result};

pub use jsonl::JsonlFileFeed;
pub use stub::WebPlatformFeedStub;

/// A source of trade events with a persisted read position.
#[async_trait]
pub trait TradeFeed {
    /// Return all new events since the last poll, in source order.
    async fn poll(&mut self) -> Result<Vec<TradeEvent>>;

    fn name(&self) -> &'static str;
}

/// Enum wrapping all concrete feed types for runtime dispatch.
#[derive(Debug)]
pub enum AnyFeed {
    Jsonl(JsonlFileFeed),
    WebPlatform(WebPlatformFeedStub),
}

#[async_trait]
impl TradeFeed for AnyFeed {
    async fn poll(&mut self) -> Result<Vec<TradeEvent>> {
        match self {
            AnyFeed::Jsonl(feed) => feed.poll().await,
            AnyFeed::WebPlatform(feed) => feed.poll().await,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            AnyFeed::Jsonl(feed) => feed.name(),
            AnyFeed::WebPlatform(feed) => feed.name(),
        }
    }
}

/// Create a feed from validated config.
///
/// An unsupported feed type never reaches this point: `FeedKind` is a
/// closed enum, so config parsing already rejected it.
pub fn create_feed(config: &FeedConfig) -> Result<AnyFeed> {
    match config.kind {
        FeedKind::JsonlFile => {
            let path = config.jsonl_path.as_deref().ok_or_else(|| {
                BridgeError::Config("feed: jsonl_path is required for 'jsonl_file'".to_string())
            })?;
            Ok(AnyFeed::Jsonl(JsonlFileFeed::new(Path::new(path))?))
        }
        FeedKind::WebPlatform => Ok(AnyFeed::WebPlatform(WebPlatformFeedStub)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_jsonl_feed() {
        let dir = tempdir().unwrap();
        let config = FeedConfig {
            kind: FeedKind::JsonlFile,
            jsonl_path: Some(
                dir.path()
                    .join("events.jsonl")
                    .to_string_lossy()
                    .into_owned(),
            ),
        };
        let feed = create_feed(&config).unwrap();
        assert_eq!(feed.name(), "jsonl_file");
    }

    #[test]
    fn test_create_jsonl_feed_without_path_fails() {
        let config = FeedConfig {
            kind: FeedKind::JsonlFile,
            jsonl_path: None,
        };
        let result = create_feed(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("jsonl_path"));
    }

    #[tokio::test]
    async fn test_create_stub_feed_polls_empty() {
        let config = FeedConfig {
            kind: FeedKind::WebPlatform,
            jsonl_path: None,
        };
        let mut feed = create_feed(&config).unwrap();
        assert_eq!(feed.name(), "web_platform");
        assert!(feed.poll().await.unwrap().is_empty());
    }
}
