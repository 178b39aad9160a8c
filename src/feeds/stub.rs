//! Stub feed for a platform-backed event source
//!
//! Extension point for a copy-trading platform integration (official API
//! export, notification mailbox, or user-authorized browser automation).
//! Until such a source exists this feed reports nothing; it carries no
//! business logic.

use async_trait::async_trait;

use crate::core::events::TradeEvent;
use crate::error::Result;
use crate::feeds::TradeFeed;

#[derive(Debug, Default)]
pub struct WebPlatformFeedStub;

#[async_trait]
impl TradeFeed for WebPlatformFeedStub {
    async fn poll(&mut self) -> Result<Vec<TradeEvent>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "web_platform"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_always_polls_empty() {
        let mut feed = WebPlatformFeedStub;
        assert!(feed.poll().await.unwrap().is_empty());
        assert!(feed.poll().await.unwrap().is_empty());
    }
}
