//! Sync engine error types.

use std::time::Duration;

use thiserror::Error;
use txs_gateway::GatewayError;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Push was given a different number of resource slugs and local paths.
    #[error("{resources} resource slugs but {paths} local paths")]
    LengthMismatch { resources: usize, paths: usize },

    /// A required identifier was empty.
    #[error("missing {0}")]
    MissingIdentifier(&'static str),

    /// Push was given the same resource slug more than once.
    #[error("resource slug '{0}' given more than once")]
    DuplicateResource(String),

    /// The runner was handed both input shapes, or neither.
    #[error("invalid batch: {0}")]
    InvalidBatch(&'static str),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// A single unit of work exceeded the configured timeout.
    #[error("unit of work timed out after {0:?}")]
    UnitTimedOut(Duration),

    /// The worker pool was shut down while units were still queued.
    #[error("worker pool closed")]
    PoolClosed,

    /// A unit of work panicked or was aborted.
    #[error("unit of work did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl SyncError {
    /// True for errors raised before any remote call was made.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. }
                | Self::MissingIdentifier(_)
                | Self::DuplicateResource(_)
                | Self::InvalidBatch(_)
        )
    }

    /// True when the underlying gateway reported a missing entity.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Gateway(e) if e.is_not_found())
    }
}
