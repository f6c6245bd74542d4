use assetgen_fs::{NormalizedPath, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_write_atomic_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("test.txt"));

    io::write_atomic(&path, b"hello world").unwrap();

    let content = fs::read_to_string(path.to_native()).unwrap();
    assert_eq!(content, "hello world");
}

#[test]
fn test_write_atomic_creates_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("lib/generated/assets.dart"));

    io::write_atomic(&path, b"// generated").unwrap();

    assert!(path.is_file());
}

#[test]
fn test_write_atomic_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("test.txt");
    fs::write(&file_path, "original").unwrap();

    let path = NormalizedPath::new(&file_path);
    io::write_atomic(&path, b"updated").unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "updated");
}

#[test]
fn test_write_atomic_leaves_no_temp_files() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("pubspec.yaml"));

    io::write_atomic(&path, b"name: app\n").unwrap();

    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec!["pubspec.yaml".to_string()]);
}

#[test]
fn test_read_text_nonexistent_file() {
    let path = NormalizedPath::new("/nonexistent/file.txt");
    let result = io::read_text(&path);
    assert!(result.unwrap_err().is_not_found());
}

#[test]
fn test_read_text_opt_missing_is_none() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("missing.txt"));
    assert_eq!(io::read_text_opt(&path).unwrap(), None);
}

#[test]
fn test_write_text_if_changed_skips_identical_content() {
    let temp = TempDir::new().unwrap();
    let path = NormalizedPath::new(temp.path().join("assets.dart"));

    assert!(io::write_text_if_changed(&path, "a").unwrap());
    assert!(!io::write_text_if_changed(&path, "a").unwrap());
    assert!(io::write_text_if_changed(&path, "b").unwrap());

    assert_eq!(io::read_text(&path).unwrap(), "b");
}
