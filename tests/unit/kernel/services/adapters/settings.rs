use super::*;
use crate::kernel::services::ports::config::CloseActivation;
use tempfile::tempdir;

#[test]
fn ensure_settings_file_writes_defaults_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join(SETTINGS_FILE);

    ensure_settings_file_at(&path).unwrap();
    assert_eq!(load_settings_from(&path).unwrap(), Settings::default());

    std::fs::write(&path, r#"{"session":{"activate_on_create":false}}"#).unwrap();
    ensure_settings_file_at(&path).unwrap();
    assert!(!load_settings_from(&path).unwrap().session.activate_on_create);
}

#[test]
fn load_settings_from_reads_all_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(
        &path,
        r#"{
            "session": {"activate_on_create": false, "close_activation": "right_neighbor"},
            "icons_dir": "/opt/icons"
        }"#,
    )
    .unwrap();

    let settings = load_settings_from(&path).unwrap();
    assert!(!settings.session.activate_on_create);
    assert_eq!(
        settings.session.close_activation,
        CloseActivation::RightNeighbor
    );
    assert_eq!(settings.icons_dir, Some(PathBuf::from("/opt/icons")));
}

#[test]
fn load_settings_from_reports_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        load_settings_from(&path),
        Err(SettingsError::Parse { .. })
    ));
}

#[test]
fn settings_path_lives_under_app_dir() {
    if let Some(path) = get_settings_path() {
        assert!(path.ends_with(Path::new(SETTINGS_DIR).join(SETTINGS_FILE)));
    }
}
