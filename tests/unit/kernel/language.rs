use super::*;

#[test]
fn resolve_maps_common_extensions() {
    let cases = [
        ("main.rs", LanguageId::Rust),
        ("main.py", LanguageId::Python),
        ("stub.pyi", LanguageId::Python),
        ("index.js", LanguageId::JavaScript),
        ("App.tsx", LanguageId::TypeScript),
        ("lib.ts", LanguageId::TypeScript),
        ("a.c", LanguageId::C),
        ("a.hpp", LanguageId::Cpp),
        ("Main.java", LanguageId::Java),
        ("data.json", LanguageId::Json),
        ("ci.yml", LanguageId::Yaml),
        ("page.htm", LanguageId::Html),
        ("style.scss", LanguageId::Scss),
        ("README.md", LanguageId::Markdown),
        ("build.sh", LanguageId::Shell),
        ("notes.txt", LanguageId::PlainText),
    ];

    for (name, expected) in cases {
        assert_eq!(resolve(name).language, expected, "{name}");
    }
}

#[test]
fn python_file_gets_non_generic_display_defaults() {
    let resolved = resolve("main.py");
    assert_eq!(resolved.language.as_str(), "python");
    assert_eq!(resolved.icon_name, "python");
    assert_ne!(resolved.icon_color, GENERIC_COLOR);
    assert!(!resolved.is_generic());
}

#[test]
fn text_and_unknown_files_resolve_to_plain_text() {
    for name in ["notes.txt", "LICENSE", "archive.unknownext", ".rs", ""] {
        let resolved = resolve(name);
        assert_eq!(resolved.language, LanguageId::PlainText, "{name:?}");
        assert_eq!(resolved.icon_name, GENERIC_ICON);
        assert!(resolved.is_generic());
    }
}

#[test]
fn longest_pattern_wins() {
    assert_eq!(resolve("index.d.ts").icon_name, "typescript-def");
    assert_eq!(resolve("index.ts").icon_name, "typescript");

    let manifest = resolve("package.json");
    assert_eq!(manifest.language, LanguageId::Json);
    assert_eq!(manifest.icon_name, "npm");
    assert_eq!(resolve("other.json").icon_name, "json");

    assert_eq!(resolve("Cargo.toml").icon_name, "cargo");
    assert_eq!(resolve("rustfmt.toml").icon_name, "toml");
}

#[test]
fn exact_names_and_suffixes_ignore_case_and_directories() {
    assert_eq!(resolve("dockerfile").language, LanguageId::Dockerfile);
    assert_eq!(resolve("docker/Dockerfile").language, LanguageId::Dockerfile);
    assert_eq!(resolve("src/MAIN.RS").language, LanguageId::Rust);
    assert_eq!(resolve("Makefile").language, LanguageId::Makefile);
}

#[test]
fn resolve_is_deterministic() {
    for name in ["a.rs", "package.json", "x.d.ts", "nothing"] {
        assert_eq!(resolve(name), resolve(name));
    }
}

#[test]
fn language_names_round_trip_through_engine_ids() {
    for lang in LanguageId::ALL {
        assert_eq!(LanguageId::from_name(lang.as_str()), Some(lang));
    }
    assert_eq!(LanguageId::from_name(" Rust "), Some(LanguageId::Rust));
    assert_eq!(LanguageId::from_name("klingon"), None);
}

#[test]
fn language_defaults_use_the_generic_form_of_the_language() {
    assert_eq!(LanguageId::Toml.defaults().icon_name, "toml");
    assert_eq!(LanguageId::Json.defaults().icon_name, "json");
    assert_eq!(LanguageId::Rust.defaults().icon_name, "rust");
    assert_eq!(LanguageId::PlainText.defaults().icon_name, GENERIC_ICON);
}
