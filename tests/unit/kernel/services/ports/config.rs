use super::*;

#[test]
fn test_default_config() {
    let config = SessionConfig::default();
    assert!(config.activate_on_create);
    assert_eq!(config.close_activation, CloseActivation::LeftNeighbor);
}

#[test]
fn test_partial_settings_fill_defaults() {
    let settings: Settings =
        serde_json::from_str(r#"{"session":{"close_activation":"right_neighbor"}}"#).unwrap();
    assert!(settings.session.activate_on_create);
    assert_eq!(
        settings.session.close_activation,
        CloseActivation::RightNeighbor
    );
    assert_eq!(settings.icons_dir, None);
}

#[test]
fn test_settings_round_trip_omits_unset_icons_dir() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(!json.contains("icons_dir"));

    let parsed: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, Settings::default());
}
