//! SyncEngine for keeping project outputs in step with the resource tree
//!
//! This module provides:
//! - **plan**: Compute the merged manifest and generated source in memory
//! - **check**: Report whether a sync would change anything
//! - **sync**: Write the outputs that changed

mod check;
mod engine;
mod plan;

pub use check::{CheckReport, CheckStatus};
pub use engine::{SyncEngine, SyncOptions, SyncReport};
pub use plan::{FilePlan, SyncPlan};
