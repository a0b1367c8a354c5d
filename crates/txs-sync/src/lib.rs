//! # txs-sync
//!
//! Reconciles local resource files with a remote translation service.
//!
//! - [`Concurrently`]: bounded fan-out of independent units of work,
//!   fail-fast on the first observed error
//! - [`SyncEngine`]: push (create missing resources, re-upload existing ones)
//!   and pull (download every resource × language pair)

pub mod engine;
pub mod error;
pub mod runner;

pub use engine::{PullReport, PushReport, SyncEngine};
pub use error::SyncError;
pub use runner::{Concurrently, Unit};
