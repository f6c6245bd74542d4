//! SyncEngine: scan, reconcile, generate, write

use assetgen_fs::{DirectoryScan, io};
use serde::Serialize;

use super::check::CheckReport;
use super::plan::{FilePlan, SyncPlan};
use crate::codegen::{DartRenderer, is_generated};
use crate::config::ResolvedConfig;
use crate::document::PubspecDocument;
use crate::ident::{AssetModel, build_model_for_class};
use crate::index::ResourceIndex;
use crate::reconcile::{ChangeCounts, ReconciliationEngine};
use crate::{Error, Result};

/// Report from a sync operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub counts: ChangeCounts,
    /// Actions taken, or that would be taken in a dry run
    pub actions: Vec<String>,
    /// Project-relative paths written to disk
    pub written: Vec<String>,
    pub empty_directories: Vec<String>,
    /// Font family names found on disk
    pub families: Vec<String>,
    /// Number of generated file constants
    pub constants: usize,
    pub dry_run: bool,
}

impl SyncReport {
    fn from_plan(plan: &SyncPlan, dry_run: bool) -> Self {
        Self {
            counts: plan.reconciliation.counts,
            actions: Vec::new(),
            written: Vec::new(),
            empty_directories: plan.reconciliation.empty_directories.clone(),
            families: plan
                .reconciliation
                .families
                .iter()
                .map(|f| f.name.clone())
                .collect(),
            constants: plan.model.constant_count(),
            dry_run,
        }
    }

    pub fn with_action(mut self, action: String) -> Self {
        self.actions.push(action);
        self
    }

    /// Whether the run changed (or would change) anything on disk.
    pub fn has_changes(&self) -> bool {
        !self.actions.is_empty()
    }
}

/// Options for sync operations
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// If true, compute everything but leave the filesystem untouched.
    /// Actions are prefixed with "[dry-run] Would ..."
    pub dry_run: bool,
}

/// Engine keeping the manifest and generated source in step with the
/// resource tree.
///
/// Every output is computed in memory first; nothing is written unless the
/// whole pipeline succeeds.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    config: ResolvedConfig,
}

impl SyncEngine {
    pub fn new(config: ResolvedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Scan the resource root.
    pub fn scan(&self) -> Result<ResourceIndex> {
        let scan = DirectoryScan::scan(
            &self.config.project_root,
            &self.config.resource_dir,
            self.config.scan_options(),
        )?;
        Ok(ResourceIndex::from_scan(&scan))
    }

    /// Load the project manifest.
    pub fn load_document(&self) -> Result<(PubspecDocument, String)> {
        PubspecDocument::load_with_source(&self.config.pubspec_path())
    }

    /// Run the pipeline without writing anything.
    ///
    /// # Errors
    ///
    /// Fails on a missing or malformed manifest, an identifier collision, or
    /// an output path holding a file that was not generated by this tool.
    pub fn plan(&self) -> Result<SyncPlan> {
        let (mut document, source) = self.load_document()?;
        let index = self.scan()?;
        if !index.exists() {
            tracing::debug!("No resource root at {}", self.config.resource_dir);
        }

        let existing = document.fragment()?;
        let reconciliation = ReconciliationEngine::new(self.config.layout())
            .with_fonts(self.config.fonts)
            .reconcile(&existing, &index);

        for dir in &reconciliation.empty_directories {
            tracing::warn!("{dir} contains no files");
        }

        let before = document.render()?;
        document.apply_assets(&reconciliation.merged.assets)?;
        if self.config.fonts {
            document.apply_fonts(&reconciliation.merged.fonts)?;
        }
        let after = document.render()?;
        // Untouched manifests keep their exact bytes, comments included
        let proposed = if before == after { source.clone() } else { after };

        let document = FilePlan {
            path: self.config.pubspec_path(),
            display: self.config.pubspec.clone(),
            current: Some(source),
            proposed,
        };

        let (model, source) = if self.config.codegen {
            let model = build_model_for_class(
                &index,
                &reconciliation.families,
                &self.config.class_name,
            )?;
            let plan = self.plan_source(&model)?;
            (model, Some(plan))
        } else {
            (AssetModel::default(), None)
        };

        Ok(SyncPlan {
            reconciliation,
            model,
            document,
            source,
        })
    }

    fn plan_source(&self, model: &AssetModel) -> Result<FilePlan> {
        let path = self.config.output_path();
        let current = io::read_text_opt(&path)?;

        if let Some(current) = &current
            && !is_generated(current)
        {
            return Err(Error::UnmanagedOutput {
                path: path.to_native(),
            });
        }

        Ok(FilePlan {
            path,
            display: self.config.output.clone(),
            current,
            proposed: DartRenderer::new(self.config.class_name.as_str()).render(model),
        })
    }

    /// Compare what a sync would produce with what is on disk.
    pub fn check(&self) -> Result<CheckReport> {
        let plan = self.plan()?;
        let stale: Vec<String> = plan.changed_files().map(|f| f.display.clone()).collect();

        if stale.is_empty() {
            Ok(CheckReport::up_to_date())
        } else {
            Ok(CheckReport::stale(stale, plan.reconciliation.counts))
        }
    }

    /// Synchronize outputs with options
    ///
    /// When `options.dry_run` is true, reports what would change without
    /// writing.
    pub fn sync_with_options(&self, options: SyncOptions) -> Result<SyncReport> {
        let plan = self.plan()?;
        self.execute(&plan, options)
    }

    /// Write the files of a computed plan.
    ///
    /// The manifest is written before the generated source.
    pub fn execute(&self, plan: &SyncPlan, options: SyncOptions) -> Result<SyncReport> {
        let mut report = SyncReport::from_plan(plan, options.dry_run);

        for file in plan.changed_files() {
            let verb = if file.current.is_some() { "update" } else { "create" };
            if options.dry_run {
                report = report.with_action(format!("[dry-run] Would {verb} {}", file.display));
                continue;
            }
            if file.write()? {
                tracing::info!("Wrote {}", file.path);
                report.written.push(file.display.clone());
                let done = if file.current.is_some() { "Updated" } else { "Created" };
                report = report.with_action(format!("{done} {}", file.display));
            }
        }

        Ok(report)
    }

    /// Synchronize outputs with the resource tree.
    pub fn sync(&self) -> Result<SyncReport> {
        self.sync_with_options(SyncOptions::default())
    }
}
