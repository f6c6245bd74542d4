//! Resource directory scanner
//!
//! Walks the resource root and reports what it finds as top-level groups,
//! each with its nested directories and files in discovery order. Siblings
//! are visited in file-name order, so two scans of the same tree always
//! produce the same listing.

use std::collections::BTreeMap;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::{Error, NormalizedPath, Result};

/// Options controlling the directory walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Include entries whose name starts with `.`
    pub include_hidden: bool,
}

/// One top-level folder of the resource root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedGroup {
    /// Folder name, or the empty string for files placed directly in the root
    pub name: String,
    /// Nested subdirectories relative to the resource root (no trailing slash)
    pub directories: Vec<String>,
    /// Files relative to the resource root
    pub files: Vec<String>,
}

impl ScannedGroup {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether this group holds the loose files of the resource root.
    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }
}

/// Result of scanning a resource root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryScan {
    /// Resource root relative to the project root, e.g. `resources`
    pub resource_dir: String,
    /// Whether the resource root exists on disk
    pub exists: bool,
    /// Groups in discovery order; the root group, if any, comes first
    pub groups: Vec<ScannedGroup>,
}

impl DirectoryScan {
    /// A scan of a resource root that does not exist.
    pub fn absent(resource_dir: &str) -> Self {
        Self {
            resource_dir: clean_dir(resource_dir),
            exists: false,
            groups: Vec::new(),
        }
    }

    /// Walk `<project_root>/<resource_dir>`.
    ///
    /// A missing resource root is not an error: it yields an empty scan.
    pub fn scan(
        project_root: &NormalizedPath,
        resource_dir: &str,
        options: ScanOptions,
    ) -> Result<Self> {
        let resource_dir = clean_dir(resource_dir);
        let root = project_root.join(&resource_dir).to_native();

        if !root.is_dir() {
            tracing::debug!("Resource root {} not found, nothing to scan", root.display());
            return Ok(Self::absent(&resource_dir));
        }

        let mut builder = ScanBuilder::default();
        let walker = WalkDir::new(&root)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || options.include_hidden || !is_hidden(entry));

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(e, &root))?;
            let Ok(relative) = entry.path().strip_prefix(&root) else {
                continue;
            };
            let relative = NormalizedPath::new(relative).into_string();
            builder.push(&relative, entry.file_type().is_dir());
        }

        let scan = Self {
            resource_dir,
            exists: true,
            groups: builder.finish(),
        };
        tracing::debug!(
            "Scanned {}: {} groups, {} files",
            scan.resource_dir,
            scan.groups.len(),
            scan.file_count()
        );
        Ok(scan)
    }

    /// Build a scan from an in-memory listing relative to the resource root.
    ///
    /// Entries ending in `/` are directories; parent directories of every
    /// entry are implied. The listing is ordered as a name-sorted walk would
    /// order it, regardless of input order.
    pub fn from_listing<I, S>(resource_dir: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree: BTreeMap<Vec<String>, bool> = BTreeMap::new();
        for entry in entries {
            let path = NormalizedPath::new(entry.as_ref()).clean_relative();
            let is_dir = path.is_dir_form();
            let segments: Vec<String> = path
                .as_str()
                .trim_end_matches('/')
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if segments.is_empty() {
                continue;
            }
            for depth in 1..segments.len() {
                tree.insert(segments[..depth].to_vec(), true);
            }
            tree.entry(segments).or_insert(is_dir);
        }

        let mut builder = ScanBuilder::default();
        for (segments, is_dir) in &tree {
            builder.push(&segments.join("/"), *is_dir);
        }

        Self {
            resource_dir: clean_dir(resource_dir),
            exists: true,
            groups: builder.finish(),
        }
    }

    /// Total number of files across all groups.
    pub fn file_count(&self) -> usize {
        self.groups.iter().map(|g| g.files.len()).sum()
    }

    /// Whether the scan found no directories or files at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[derive(Debug, Default)]
struct ScanBuilder {
    root_files: Vec<String>,
    groups: Vec<ScannedGroup>,
}

impl ScanBuilder {
    fn push(&mut self, relative: &str, is_dir: bool) {
        let Some((top, _)) = relative.split_once('/') else {
            if is_dir {
                self.groups.push(ScannedGroup::new(relative));
            } else {
                self.root_files.push(relative.to_string());
            }
            return;
        };

        if self.groups.last().is_none_or(|g| g.name != top) {
            self.groups.push(ScannedGroup::new(top));
        }
        if let Some(group) = self.groups.last_mut() {
            if is_dir {
                group.directories.push(relative.to_string());
            } else {
                group.files.push(relative.to_string());
            }
        }
    }

    fn finish(mut self) -> Vec<ScannedGroup> {
        if !self.root_files.is_empty() {
            let root = ScannedGroup {
                name: String::new(),
                directories: Vec::new(),
                files: self.root_files,
            };
            self.groups.insert(0, root);
        }
        self.groups
    }
}

fn clean_dir(resource_dir: &str) -> String {
    NormalizedPath::new(resource_dir)
        .clean_relative()
        .as_str()
        .trim_end_matches('/')
        .to_string()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn walk_error(error: walkdir::Error, root: &Path) -> Error {
    let path = error
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    Error::io(path, error.into())
}
