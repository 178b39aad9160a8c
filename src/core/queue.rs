//! Output queue writer: a directory acting as a durable mailbox
//!
//! The bridge writes serialized commands into `inbox/`; a separate
//! consumer drains it and owns `processed/` and `failed/`. Enqueue uses
//! write-to-temp-then-rename in one directory, so any observer of the
//! inbox sees either no file or a complete file, never a partial one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;

use crate::config::DispatcherConfig;

/// Mailbox directory layout, provisioned at startup.
#[derive(Debug, Clone)]
pub struct QueuePaths {
    pub base: PathBuf,
    pub inbox: PathBuf,
    pub processed: PathBuf,
    pub failed: PathBuf,
}

impl QueuePaths {
    /// Resolve the layout from config and create all three subdirectories.
    pub fn provision(config: &DispatcherConfig) -> io::Result<Self> {
        let base = PathBuf::from(&config.queue_base_path);
        let paths = Self {
            inbox: base.join(&config.inbox_subdir),
            processed: base.join(&config.processed_subdir),
            failed: base.join(&config.failed_subdir),
            base,
        };
        fs::create_dir_all(&paths.inbox)?;
        fs::create_dir_all(&paths.processed)?;
        fs::create_dir_all(&paths.failed)?;
        Ok(paths)
    }
}

/// Writer side of the mailbox. Only the inbox is ever written.
pub struct CommandQueue {
    paths: QueuePaths,
}

impl CommandQueue {
    pub fn new(paths: QueuePaths) -> Self {
        Self { paths }
    }

    pub fn inbox(&self) -> &Path {
        &self.paths.inbox
    }

    /// Durably enqueue one serialized command.
    ///
    /// Filename is `{millis}_{uuidhex}.json`, unique even under rapid
    /// successive calls. The payload lands in `{name}.tmp` first and is
    /// renamed into place; the temp file must live in the same directory
    /// as the final name (same-filesystem rename).
    pub fn enqueue(&self, payload: &str) -> io::Result<PathBuf> {
        let filename = format!(
            "{}_{}.json",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        );
        let tmp_path = self.paths.inbox.join(format!("{}.tmp", filename));
        let final_path = self.paths.inbox.join(filename);

        fs::write(&tmp_path, payload)?;
        fs::rename(&tmp_path, &final_path)?;

        Ok(final_path)
    }
}
