//! Reconciliation of the manifest against the scanned resource tree
//!
//! The engine is pure: it takes the manifest fragment as currently stored
//! and a [`ResourceIndex`] built from disk, and returns the merged fragment
//! together with change counts. Nothing here touches the filesystem.
//!
//! Only *owned* entries are managed. An asset declaration is owned when it
//! points under the resource root; a font asset is owned when it points
//! under the fonts directory. Everything else passes through in place.

use std::collections::{BTreeMap, HashSet};

use assetgen_fs::NormalizedPath;
use serde::Serialize;

use crate::document::{AssetEntry, FontAsset, FontFamilyBlock, ManifestFragment};
use crate::family::{FontFamily, group_families};
use crate::index::{ResourceIndex, ResourceLayout};

/// What a reconciliation changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeCounts {
    pub added: usize,
    pub removed: usize,
    pub fonts_added: usize,
    pub fonts_removed: usize,
}

impl ChangeCounts {
    pub fn is_empty(&self) -> bool {
        self.added == 0 && self.removed == 0 && self.fonts_added == 0 && self.fonts_removed == 0
    }
}

/// Result of one reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub merged: ManifestFragment,
    pub counts: ChangeCounts,
    /// Declared directories with no file beneath them
    pub empty_directories: Vec<String>,
    /// Font families found on disk
    pub families: Vec<FontFamily>,
}

/// Merges fresh disk state into an existing manifest fragment.
#[derive(Debug, Clone)]
pub struct ReconciliationEngine {
    layout: ResourceLayout,
    fonts: bool,
}

impl ReconciliationEngine {
    pub fn new(layout: ResourceLayout) -> Self {
        Self { layout, fonts: true }
    }

    /// Enable or disable font family reconciliation.
    ///
    /// When disabled, `flutter.fonts` is carried over unchanged.
    pub fn with_fonts(mut self, fonts: bool) -> Self {
        self.fonts = fonts;
        self
    }

    pub fn layout(&self) -> &ResourceLayout {
        &self.layout
    }

    pub fn reconcile(&self, existing: &ManifestFragment, fresh: &ResourceIndex) -> Reconciliation {
        let mut counts = ChangeCounts::default();

        let assets = self.merge_directories(&existing.assets, fresh, &mut counts);

        let (fonts, families) = if self.fonts {
            let families =
                group_families(fresh.font_files(&self.layout).map(|f| f.path.as_str()));
            let fonts = self.merge_families(&existing.fonts, &families, &mut counts);
            (fonts, families)
        } else {
            (existing.fonts.clone(), Vec::new())
        };

        tracing::debug!(
            added = counts.added,
            removed = counts.removed,
            fonts_added = counts.fonts_added,
            fonts_removed = counts.fonts_removed,
            "Reconciled manifest"
        );

        Reconciliation {
            merged: ManifestFragment { assets, fonts },
            counts,
            empty_directories: fresh
                .empty_directories()
                .into_iter()
                .map(str::to_string)
                .collect(),
            families,
        }
    }

    fn merge_directories(
        &self,
        existing: &[AssetEntry],
        fresh: &ResourceIndex,
        counts: &mut ChangeCounts,
    ) -> Vec<AssetEntry> {
        let fresh_dirs: HashSet<&str> = fresh.directories().iter().map(|d| d.path.as_str()).collect();
        let fresh_files: HashSet<&str> = fresh.files().iter().map(|f| f.path.as_str()).collect();

        let mut declared: HashSet<String> = HashSet::new();
        let mut merged = Vec::with_capacity(existing.len() + fresh.directories().len());

        for entry in existing {
            let AssetEntry::Path(raw) = entry else {
                merged.push(entry.clone());
                continue;
            };
            let path = NormalizedPath::new(raw).clean_relative();
            if !self.layout.owns_asset(&path) {
                merged.push(entry.clone());
                continue;
            }

            // Directory entries are sometimes written without the slash
            let canonical = if path.is_dir_form() || fresh_dirs.contains(path.as_dir().as_str()) {
                path.as_dir().into_string()
            } else {
                path.into_string()
            };

            let present = fresh_dirs.contains(canonical.as_str())
                || fresh_files.contains(canonical.as_str());
            if present && declared.insert(canonical.clone()) {
                merged.push(AssetEntry::Path(canonical));
            } else {
                tracing::debug!("Retiring asset declaration {raw}");
                counts.removed += 1;
            }
        }

        for dir in fresh.directories() {
            if declared.insert(dir.path.clone()) {
                tracing::debug!("Declaring {}", dir.path);
                merged.push(AssetEntry::Path(dir.path.clone()));
                counts.added += 1;
            }
        }

        merged
    }

    fn merge_families(
        &self,
        existing: &[FontFamilyBlock],
        families: &[FontFamily],
        counts: &mut ChangeCounts,
    ) -> Vec<FontFamilyBlock> {
        let fresh: BTreeMap<&str, &FontFamily> =
            families.iter().map(|f| (f.name.as_str(), f)).collect();

        // Everything already declared under its own family, across all blocks
        let declared: HashSet<String> = existing
            .iter()
            .flat_map(|block| {
                block.fonts.iter().filter_map(|font| {
                    let path = NormalizedPath::new(&font.asset).clean_relative();
                    let family = fresh.get(block.family.as_str())?;
                    family.contains(path.as_str()).then(|| path.into_string())
                })
            })
            .collect();

        let mut claimed: HashSet<String> = HashSet::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut merged = Vec::with_capacity(existing.len() + families.len());

        for block in existing {
            let family = fresh.get(block.family.as_str()).copied();
            let mut fonts = Vec::with_capacity(block.fonts.len());

            for font in &block.fonts {
                let path = NormalizedPath::new(&font.asset).clean_relative();
                if !self.layout.owns_font(&path) {
                    fonts.push(font.clone());
                    continue;
                }
                let on_disk = family.is_some_and(|f| f.contains(path.as_str()));
                if on_disk && claimed.insert(path.as_str().to_string()) {
                    fonts.push(font.with_asset(path.into_string()));
                } else {
                    tracing::debug!("Retiring font asset {} from {}", font.asset, block.family);
                    counts.fonts_removed += 1;
                }
            }

            if let Some(family) = family
                && seen.insert(family.name.as_str())
            {
                for asset in &family.assets {
                    if !declared.contains(asset) && claimed.insert(asset.clone()) {
                        fonts.push(FontAsset::new(asset.as_str()));
                        counts.fonts_added += 1;
                    }
                }
            }

            if fonts.is_empty() {
                tracing::debug!("Dropping empty font family {}", block.family);
            } else {
                merged.push(block.with_fonts(fonts));
            }
        }

        for family in families {
            if seen.contains(family.name.as_str()) {
                continue;
            }
            let fonts: Vec<FontAsset> = family
                .assets
                .iter()
                .filter(|asset| claimed.insert((*asset).clone()))
                .map(|asset| FontAsset::new(asset.as_str()))
                .collect();
            if fonts.is_empty() {
                continue;
            }
            tracing::debug!("Declaring font family {}", family.name);
            counts.fonts_added += fonts.len();
            merged.push(FontFamilyBlock::new(family.name.as_str(), fonts));
        }

        merged
    }
}

/// Reconcile with the default options for `layout`.
pub fn reconcile(
    existing: &ManifestFragment,
    fresh: &ResourceIndex,
    layout: &ResourceLayout,
) -> Reconciliation {
    ReconciliationEngine::new(layout.clone()).reconcile(existing, fresh)
}
