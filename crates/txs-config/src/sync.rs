//! Sync engine tuning.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Worker count for I/O-bound batches: a few more than the CPU count, capped.
fn default_workers() -> usize {
    let cpus = std::thread::available_parallelism().map_or(1, NonZeroUsize::get);
    (cpus + 4).min(32)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Concurrent units of work per batch.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Abort a single unit of work after this many seconds. Off when unset
    /// or zero.
    #[serde(default)]
    pub unit_timeout_secs: Option<u64>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            unit_timeout_secs: None,
        }
    }
}

impl SyncConfig {
    pub fn unit_timeout(&self) -> Option<Duration> {
        self.unit_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
