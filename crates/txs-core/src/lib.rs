//! # txs-core
//!
//! Core types shared across the txsync crates.
//!
//! - Remote entities (organizations, projects, resources, languages)
//! - Units of work handed to the sync engine for one push or pull
//! - Slug normalization and output file naming
//! - Cross-cutting error type

pub mod entities;
pub mod errors;
pub mod slug;
pub mod units;

pub use entities::{Language, NewProject, Organization, Project, Resource};
pub use errors::CoreError;
pub use units::{PullUnit, PushUnit};
