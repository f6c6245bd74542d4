//! Check types for comparing generated outputs against disk

use serde::Serialize;

use crate::reconcile::ChangeCounts;

/// Status of a check run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Manifest and generated source match the resource tree
    UpToDate,
    /// At least one output would change on the next sync
    Stale,
}

/// Report from a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub status: CheckStatus,
    /// Project-relative paths that a sync would rewrite
    pub stale_files: Vec<String>,
    pub counts: ChangeCounts,
}

impl CheckReport {
    pub fn up_to_date() -> Self {
        Self {
            status: CheckStatus::UpToDate,
            stale_files: Vec::new(),
            counts: ChangeCounts::default(),
        }
    }

    pub fn stale(stale_files: Vec<String>, counts: ChangeCounts) -> Self {
        Self {
            status: CheckStatus::Stale,
            stale_files,
            counts,
        }
    }

    pub fn is_up_to_date(&self) -> bool {
        self.status == CheckStatus::UpToDate
    }
}
