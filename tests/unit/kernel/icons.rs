use super::*;
use tempfile::tempdir;

const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path d="M0 0h16v16H0z"/></svg>"#;

#[test]
fn load_all_registers_svg_files_by_stem() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("python.svg"), SVG).unwrap();
    std::fs::write(dir.path().join("rust.SVG"), SVG).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not an icon").unwrap();
    std::fs::create_dir(dir.path().join("nested.svg")).unwrap();

    let registry = IconRegistry::load_all(dir.path()).unwrap();

    assert_eq!(registry.names(), vec!["python", "rust"]);
    let python = registry.lookup("python").unwrap();
    assert_eq!(python.name, "python");
    assert_eq!(&*python.svg, SVG);
}

#[test]
fn load_all_skips_files_without_svg_root() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("broken.svg"), "<html></html>").unwrap();
    std::fs::write(dir.path().join("ok.svg"), SVG).unwrap();

    let registry = IconRegistry::load_all(dir.path()).unwrap();

    assert!(registry.contains("ok"));
    assert!(!registry.contains("broken"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn load_all_reports_missing_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    let err = IconRegistry::load_all(&missing).unwrap_err();
    assert!(matches!(err, IconError::Io { ref path, .. } if path == &missing));
}

#[test]
fn missing_names_are_not_fatal() {
    let registry = IconRegistry::from_entries([("file", SVG)]);

    assert!(registry.lookup("does-not-exist").is_none());
    assert!(matches!(
        registry.get("does-not-exist"),
        Err(IconError::AssetMissing(name)) if name == "does-not-exist"
    ));
    assert!(registry.get("file").is_ok());
}

#[test]
fn bundled_icons_cover_language_defaults() {
    let registry = IconRegistry::load_all(&bundled_icons_dir()).unwrap();

    for lang in crate::kernel::language::LanguageId::ALL {
        let icon = lang.defaults().icon_name;
        assert!(registry.contains(icon), "missing bundled icon {icon}");
    }
}
