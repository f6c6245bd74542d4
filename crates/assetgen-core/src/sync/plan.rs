//! In-memory plan of every file a sync would write

use assetgen_fs::{NormalizedPath, io};
use similar::TextDiff;

use crate::Result;
use crate::ident::AssetModel;
use crate::reconcile::Reconciliation;

/// Proposed content for one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePlan {
    pub path: NormalizedPath,
    /// Project-relative path used in reports
    pub display: String,
    /// Content currently on disk, `None` when the file does not exist
    pub current: Option<String>,
    pub proposed: String,
}

impl FilePlan {
    pub fn is_changed(&self) -> bool {
        self.current.as_deref() != Some(self.proposed.as_str())
    }

    /// Unified diff from the current content to the proposed content.
    pub fn diff(&self) -> String {
        let current = self.current.as_deref().unwrap_or("");
        TextDiff::from_lines(current, self.proposed.as_str())
            .unified_diff()
            .context_radius(3)
            .header(&format!("a/{}", self.display), &format!("b/{}", self.display))
            .to_string()
    }

    /// Write the proposed content if it differs from disk.
    pub fn write(&self) -> Result<bool> {
        if !self.is_changed() {
            return Ok(false);
        }
        Ok(io::write_text_if_changed(&self.path, &self.proposed)?)
    }
}

/// Everything computed by one pipeline run, before any write.
#[derive(Debug, Clone)]
pub struct SyncPlan {
    pub reconciliation: Reconciliation,
    pub model: AssetModel,
    pub document: FilePlan,
    /// `None` when code generation is disabled
    pub source: Option<FilePlan>,
}

impl SyncPlan {
    /// Output files in write order.
    pub fn files(&self) -> impl Iterator<Item = &FilePlan> {
        std::iter::once(&self.document).chain(self.source.as_ref())
    }

    /// Output files whose content would change.
    pub fn changed_files(&self) -> impl Iterator<Item = &FilePlan> {
        self.files().filter(|f| f.is_changed())
    }

    pub fn is_up_to_date(&self) -> bool {
        self.changed_files().next().is_none()
    }
}
