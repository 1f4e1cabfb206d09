use super::mock::MockFs;
use super::*;

// ========================================
// RealFs tests
// ========================================

#[test]
fn test_real_fs_read_dir_classifies_entries() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("forge-a")).unwrap();
    std::fs::write(dir.path().join("stray.txt"), "x").unwrap();

    let mut entries = RealFs.read_dir(dir.path()).unwrap();
    entries.sort_by(|a, b| a.path.cmp(&b.path));

    assert_eq!(entries.len(), 2);
    assert!(entries[0].is_dir());
    assert_eq!(entries[1].file_type, FsFileType::File);
}

#[test]
fn test_real_fs_read_dir_missing_is_err() {
    let dir = tempfile::tempdir().unwrap();
    assert!(RealFs.read_dir(&dir.path().join("missing")).is_err());
}

#[test]
fn test_real_fs_read_to_string() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pipx_metadata.json");
    std::fs::write(&path, "{}").unwrap();

    assert!(RealFs.exists(&path));
    assert!(!RealFs.is_dir(&path));
    assert_eq!(RealFs.read_to_string(&path).unwrap(), "{}");
}

// ========================================
// MockFs tests
// ========================================

#[test]
fn test_mock_read_dir_only_direct_children() {
    let fs = MockFs::new();
    fs.add_dir("/root/venvs");
    fs.add_dir_with_file("/root/venvs/forge-a", "pipx_metadata.json", "{}");

    let entries = fs.read_dir(Path::new("/root/venvs")).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, PathBuf::from("/root/venvs/forge-a"));
    assert!(entries[0].is_dir());
}

#[test]
fn test_mock_read_to_string_on_dir_is_err() {
    let fs = MockFs::new();
    fs.add_dir("/root/venvs");
    assert!(fs.read_to_string(Path::new("/root/venvs")).is_err());
}

#[test]
fn test_mock_read_dir_on_file_is_err() {
    let fs = MockFs::new();
    fs.add_file("/root/file", "x");
    assert!(fs.read_dir(Path::new("/root/file")).is_err());
}
