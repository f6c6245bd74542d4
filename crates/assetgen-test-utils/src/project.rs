//! [`TestProject`] builder for assetgen test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A small but complete `pubspec.yaml` with keys the tool does not own.
pub const MINIMAL_PUBSPEC: &str = "\
name: demo_app
description: A demo application
version: 1.0.0+1

environment:
  sdk: '>=3.0.0 <4.0.0'

dependencies:
  flutter:
    sdk: flutter

flutter:
  uses-material-design: true
";

/// A temporary Flutter-style project with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use assetgen_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_pubspec(assetgen_test_utils::MINIMAL_PUBSPEC);
/// project.add_file("resources/images/logo.png", "png");
/// project.assert_file_exists("resources/images/logo.png");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a project holding [`MINIMAL_PUBSPEC`].
    pub fn with_pubspec() -> Self {
        let project = Self::new();
        project.write_pubspec(MINIMAL_PUBSPEC);
        project
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a project-relative path.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write_pubspec(&self, content: &str) {
        self.add_file("pubspec.yaml", content);
    }

    /// Write a file, creating parent directories.
    pub fn add_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {e}", path.display()));
    }

    /// Create a directory, including parents.
    pub fn add_dir(&self, relative: &str) {
        fs::create_dir_all(self.path(relative)).unwrap();
    }

    pub fn remove_file(&self, relative: &str) {
        let path = self.path(relative);
        fs::remove_file(&path)
            .unwrap_or_else(|e| panic!("Could not remove {}: {e}", path.display()));
    }

    /// Read a project file as text.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Parse `pubspec.yaml` into a YAML value.
    pub fn pubspec_value(&self) -> serde_yaml::Value {
        serde_yaml::from_str(&self.read("pubspec.yaml")).unwrap()
    }

    /// Plain string entries of `flutter.assets`.
    pub fn declared_assets(&self) -> Vec<String> {
        self.pubspec_value()
            .get("flutter")
            .and_then(|f| f.get("assets"))
            .and_then(|a| a.as_sequence())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
