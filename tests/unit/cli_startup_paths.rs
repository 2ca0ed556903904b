use tempfile::tempdir;

#[test]
fn resolve_open_paths_accepts_no_args() {
    let dir = tempdir().unwrap();

    let paths = super::resolve_open_paths(dir.path(), &[]).unwrap();
    assert!(paths.is_empty());
}

#[test]
fn resolve_open_paths_joins_relative_paths_with_cwd() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();

    let workspace = cwd.join("workspace");
    std::fs::create_dir_all(&workspace).unwrap();
    let file = workspace.join("a.txt");
    std::fs::write(&file, "hello\n").unwrap();

    let paths = super::resolve_open_paths(cwd, &["workspace/a.txt".to_string()]).unwrap();
    assert_eq!(paths, vec![file]);
}

#[test]
fn resolve_open_paths_keeps_absolute_paths() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();

    let file = cwd.join("main.rs");
    std::fs::write(&file, "fn main() {}\n").unwrap();
    let abs = file.canonicalize().unwrap();
    let raw = abs.to_string_lossy().to_string();

    let other = tempdir().unwrap();
    let paths = super::resolve_open_paths(other.path(), &[raw]).unwrap();
    assert_eq!(paths, vec![abs]);
}

#[test]
fn resolve_open_paths_errors_for_missing_path() {
    let dir = tempdir().unwrap();

    let err = super::resolve_open_paths(dir.path(), &["nope".to_string()]).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn resolve_open_paths_rejects_directories() {
    let dir = tempdir().unwrap();
    let cwd = dir.path();
    std::fs::create_dir_all(cwd.join("workspace")).unwrap();

    let err = super::resolve_open_paths(cwd, &["workspace".to_string()]).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}
