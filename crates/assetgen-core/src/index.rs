//! Canonical in-memory model of the scanned resource tree
//!
//! [`ResourceIndex`] turns a raw [`DirectoryScan`] into the directory
//! declarations and file list the rest of the pipeline works from. All paths
//! here are project-relative and carry the resource directory as their first
//! segment, e.g. `resources/images/logo.png`.

use assetgen_fs::{DirectoryScan, NormalizedPath, ProjectPath};

/// Extension filter for font files when none is configured. Empty means
/// every file under the fonts directory is a font.
pub const DEFAULT_FONT_EXTENSIONS: &[&str] = &[];

/// Where resources live inside the project and which files count as fonts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLayout {
    resource_dir: String,
    fonts_dir: String,
    font_extensions: Vec<String>,
}

impl Default for ResourceLayout {
    fn default() -> Self {
        Self::new(ProjectPath::ResourceDir.as_str(), ProjectPath::FontsDir.as_str())
    }
}

impl ResourceLayout {
    /// Create a layout with the default font extensions.
    pub fn new(resource_dir: &str, fonts_dir: &str) -> Self {
        Self {
            resource_dir: trim_dir(resource_dir),
            fonts_dir: trim_dir(fonts_dir),
            font_extensions: DEFAULT_FONT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Only treat files with these extensions as fonts.
    ///
    /// An empty set lifts the filter.
    pub fn with_font_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.font_extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    pub fn resource_dir(&self) -> &str {
        &self.resource_dir
    }

    pub fn fonts_dir(&self) -> &str {
        &self.fonts_dir
    }

    pub fn font_extensions(&self) -> &[String] {
        &self.font_extensions
    }

    /// The declaration for loose files in the resource root, e.g. `resources/`.
    pub fn root_declaration(&self) -> String {
        format!("{}/", self.resource_dir)
    }

    /// Project-relative fonts directory, e.g. `resources/fonts`.
    pub fn fonts_path(&self) -> String {
        format!("{}/{}", self.resource_dir, self.fonts_dir)
    }

    /// Whether an asset declaration falls under the resource root.
    pub fn owns_asset(&self, path: &NormalizedPath) -> bool {
        path.strip_dir_prefix(&self.resource_dir).is_some()
    }

    /// Whether a font asset path falls under the fonts directory.
    pub fn owns_font(&self, path: &NormalizedPath) -> bool {
        path.strip_dir_prefix(&self.fonts_path())
            .is_some_and(|rest| !rest.is_empty())
    }

    /// Whether a file under the fonts directory passes the extension filter.
    pub fn is_font_file(&self, path: &NormalizedPath) -> bool {
        if !self.owns_font(path) {
            return false;
        }
        if self.font_extensions.is_empty() {
            return true;
        }
        path.extension().is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            self.font_extensions.iter().any(|known| *known == ext)
        })
    }
}

/// A directory to declare in the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryDeclaration {
    /// Project-relative path in directory form, e.g. `resources/images/`
    pub path: String,
    /// True when no file exists anywhere beneath the directory
    pub is_empty: bool,
}

/// A discovered resource file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFile {
    /// Top-level group, empty for loose root files
    pub group: String,
    /// Project-relative path, e.g. `resources/images/logo.png`
    pub path: String,
    /// Path relative to the resource root, e.g. `images/logo.png`
    pub relative: String,
}

/// Normalized view of the resource tree for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceIndex {
    resource_dir: String,
    exists: bool,
    groups: Vec<String>,
    directories: Vec<DirectoryDeclaration>,
    files: Vec<ResourceFile>,
}

impl ResourceIndex {
    /// Build the index from a scan.
    ///
    /// Declarations come out in discovery order: the resource root itself
    /// when it holds loose files, then every top-level directory followed by
    /// its nested subdirectories.
    pub fn from_scan(scan: &DirectoryScan) -> Self {
        let prefix = NormalizedPath::new(&scan.resource_dir);
        let mut groups = Vec::with_capacity(scan.groups.len());
        let mut declared = Vec::new();
        let mut files = Vec::with_capacity(scan.file_count());

        for group in &scan.groups {
            groups.push(group.name.clone());

            if group.is_root() {
                declared.push(prefix.as_dir().into_string());
            } else {
                declared.push(prefix.join(&group.name).as_dir().into_string());
                for dir in &group.directories {
                    declared.push(prefix.join(dir).as_dir().into_string());
                }
            }

            for file in &group.files {
                files.push(ResourceFile {
                    group: group.name.clone(),
                    path: prefix.join(file).into_string(),
                    relative: file.clone(),
                });
            }
        }

        let directories = declared
            .into_iter()
            .map(|path| {
                let is_empty = !files.iter().any(|f| f.path.starts_with(&path));
                DirectoryDeclaration { path, is_empty }
            })
            .collect();

        Self {
            resource_dir: scan.resource_dir.clone(),
            exists: scan.exists,
            groups,
            directories,
            files,
        }
    }

    /// An index for a project without a resource root.
    pub fn empty(resource_dir: &str) -> Self {
        Self {
            resource_dir: trim_dir(resource_dir),
            ..Self::default()
        }
    }

    pub fn resource_dir(&self) -> &str {
        &self.resource_dir
    }

    /// Whether the resource root existed when scanned.
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Group names in first-discovery order.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn directories(&self) -> &[DirectoryDeclaration] {
        &self.directories
    }

    pub fn files(&self) -> &[ResourceFile] {
        &self.files
    }

    /// Files belonging to one group, in discovery order.
    pub fn files_in<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a ResourceFile> + 'a {
        self.files.iter().filter(move |f| f.group == group)
    }

    /// Directory declarations with no file beneath them.
    pub fn empty_directories(&self) -> Vec<&str> {
        self.directories
            .iter()
            .filter(|d| d.is_empty)
            .map(|d| d.path.as_str())
            .collect()
    }

    /// Font files under the layout's fonts directory.
    pub fn font_files<'a>(&'a self, layout: &'a ResourceLayout) -> impl Iterator<Item = &'a ResourceFile> + 'a {
        self.files
            .iter()
            .filter(move |f| layout.is_font_file(&NormalizedPath::new(&f.path)))
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}

fn trim_dir(dir: &str) -> String {
    NormalizedPath::new(dir)
        .clean_relative()
        .as_str()
        .trim_end_matches('/')
        .to_string()
}
