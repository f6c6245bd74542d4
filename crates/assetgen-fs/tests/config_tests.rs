use assetgen_fs::{ConfigStore, NormalizedPath};
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct TestConfig {
    resource_dir: String,
    fonts: bool,
}

#[test]
fn test_load_toml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("assetgen.toml");
    fs::write(&file_path, "resource_dir = \"assets\"\nfonts = false\n").unwrap();

    let store = ConfigStore::new();
    let config: TestConfig = store.load(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(config.resource_dir, "assets");
    assert!(!config.fonts);
}

#[test]
fn test_load_yaml() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("assetgen.yaml");
    fs::write(&file_path, "resource_dir: assets\nfonts: true\n").unwrap();

    let store = ConfigStore::new();
    let config: TestConfig = store.load(&NormalizedPath::new(&file_path)).unwrap();

    assert_eq!(config.resource_dir, "assets");
    assert!(config.fonts);
}

#[test]
fn test_parse_error_carries_path_and_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("assetgen.toml");
    fs::write(&file_path, "resource_dir = [unclosed").unwrap();

    let store = ConfigStore::new();
    let err = store
        .load::<TestConfig>(&NormalizedPath::new(&file_path))
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("TOML"), "got: {message}");
    assert!(message.contains("assetgen.toml"), "got: {message}");
}

#[test]
fn test_unsupported_format() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("assetgen.ini");
    fs::write(&file_path, "data").unwrap();

    let store = ConfigStore::new();
    let result: assetgen_fs::Result<TestConfig> = store.load(&NormalizedPath::new(&file_path));

    assert!(matches!(
        result,
        Err(assetgen_fs::Error::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("assetgen.json");
    fs::write(&file_path, r#"{ "resource_dir": "res", "fonts": false }"#).unwrap();

    let config: TestConfig = ConfigStore::new()
        .load(&NormalizedPath::new(&file_path))
        .unwrap();

    assert_eq!(
        config,
        TestConfig {
            resource_dir: "res".into(),
            fonts: false,
        }
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("assetgen.toml"));

    let err = ConfigStore::new().load::<TestConfig>(&path).unwrap_err();
    assert!(err.is_not_found(), "got: {err}");
}
