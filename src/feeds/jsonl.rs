//! Cursor-tracked JSONL file feed
//!
//! Reads one event per line from an append-only file and persists its
//! byte offset in a sidecar file next to the source. The offset only ever
//! points at a boundary between fully-consumed lines: a trailing line
//! with no newline yet is left for the next poll. A line that has a
//! newline but fails to parse is consumed and skipped permanently;
//! malformed input is presumed permanently malformed, not transient.

use std::fs;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;

use crate::core::events::TradeEvent;
use crate::error::Result;
use crate::feeds::TradeFeed;

#[derive(Debug)]
pub struct JsonlFileFeed {
    path: PathBuf,
    offset_path: PathBuf,
    offset: u64,
}

impl JsonlFileFeed {
    /// Open the feed, resuming from the persisted offset.
    ///
    /// A missing offset file means start-of-file; an unparseable one is
    /// reset to start-of-file with a warning. Replayed events surface as
    /// duplicates downstream, never as losses.
    pub fn new(path: &Path) -> Result<Self> {
        let offset_path = path.with_extension("offset");
        let offset = Self::load_offset(&offset_path)?;
        Ok(Self {
            path: path.to_path_buf(),
            offset_path,
            offset,
        })
    }

    fn load_offset(offset_path: &Path) -> Result<u64> {
        if !offset_path.exists() {
            return Ok(0);
        }
        let raw = fs::read_to_string(offset_path)?;
        match raw.trim().parse::<u64>() {
            Ok(offset) => Ok(offset),
            Err(_) => {
                warn!(
                    event_type = "FEED_OFFSET_RESET",
                    offset_file = %offset_path.display(),
                    "Invalid offset file. Resetting to 0."
                );
                Ok(0)
            }
        }
    }

    fn save_offset(&self) -> Result<()> {
        fs::write(&self.offset_path, self.offset.to_string())?;
        Ok(())
    }

    fn read_new_events(&mut self) -> Result<Vec<TradeEvent>> {
        // Tolerate a source that does not exist yet (startup race with
        // the producer): report nothing instead of failing.
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = fs::File::open(&self.path)?;
        let mut reader = BufReader::new(file);
        reader.seek(SeekFrom::Start(self.offset))?;

        let mut events = Vec::new();
        let mut buf = String::new();
        loop {
            buf.clear();
            let bytes_read = reader.read_line(&mut buf)?;
            if bytes_read == 0 {
                break;
            }
            if !buf.ends_with('\n') {
                // Partial tail still being appended; not consumed.
                break;
            }
            self.offset += bytes_read as u64;

            let line = buf.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<TradeEvent>(line) {
                Ok(event) => events.push(event),
                Err(e) => {
                    warn!(
                        event_type = "FEED_LINE_SKIPPED",
                        error = %e,
                        line = line,
                        "Invalid JSONL line"
                    );
                }
            }
        }

        // Persist even for an empty batch so re-runs are idempotent with
        // respect to position.
        self.save_offset()?;
        Ok(events)
    }

    #[cfg(test)]
    fn offset(&self) -> u64 {
        self.offset
    }
}

#[async_trait]
impl TradeFeed for JsonlFileFeed {
    async fn poll(&mut self) -> Result<Vec<TradeEvent>> {
        self.read_new_events()
    }

    fn name(&self) -> &'static str {
        "jsonl_file"
    }
}
