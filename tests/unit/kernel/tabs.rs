use super::*;
use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::config::CloseActivation;

fn store_with(names: &[&str]) -> (TabStore, Vec<TabId>) {
    let mut store = TabStore::new();
    let ids = names
        .iter()
        .map(|name| {
            let id = store.alloc_id();
            store.push(Tab::new(id, name, String::new()));
            id
        })
        .collect();
    (store, ids)
}

#[test]
fn ids_are_monotonic_and_never_reused() {
    let (mut store, ids) = store_with(&["a", "b"]);
    assert_eq!(ids, vec![TabId::new(1), TabId::new(2)]);

    store.remove(ids[1]).unwrap();
    let next = store.alloc_id();
    assert_eq!(next, TabId::new(3));
}

#[test]
fn language_is_derived_from_name_on_every_read() {
    let mut tab = Tab::new(TabId::new(1), "main.py", String::new());
    assert_eq!(tab.language(), LanguageId::Python);
    assert_eq!(tab.icon_name(), "python");

    tab.set_name("main.rs");
    assert_eq!(tab.language(), LanguageId::Rust);
    assert_eq!(tab.icon_name(), "rust");
}

#[test]
fn language_override_survives_rename_and_drives_icon_defaults() {
    let mut tab = Tab::new(TabId::new(1), "notes.txt", String::new());
    tab.set_language_override(Some(LanguageId::Rust));

    tab.set_name("script.py");
    assert_eq!(tab.language(), LanguageId::Rust);
    assert_eq!(tab.icon_name(), "rust");
    assert_eq!(tab.icon_color(), LanguageId::Rust.defaults().icon_color);

    tab.set_language_override(None);
    assert_eq!(tab.language(), LanguageId::Python);
}

#[test]
fn icon_override_wins_and_keeps_default_color_when_unset() {
    let mut tab = Tab::new(TabId::new(1), "main.go", String::new());
    tab.set_icon_override(Some(IconOverride {
        name: "star".to_string(),
        color: None,
    }));
    assert_eq!(tab.icon_name(), "star");
    assert_eq!(tab.icon_color(), "#00add8");

    tab.set_icon_override(Some(IconOverride {
        name: "star".to_string(),
        color: Some("#ff0000".to_string()),
    }));
    tab.set_name("main.py");
    assert_eq!(tab.icon_name(), "star");
    assert_eq!(tab.icon_color(), "#ff0000");
    assert_eq!(tab.language(), LanguageId::Python);
}

#[test]
fn successor_after_close_prefers_left_neighbor() {
    let (mut store, ids) = store_with(&["a", "b", "c"]);

    let (index, _) = store.remove(ids[1]).unwrap();
    assert_eq!(
        store.successor_after_close(index, CloseActivation::LeftNeighbor),
        Some(ids[0])
    );
    assert_eq!(
        store.successor_after_close(index, CloseActivation::RightNeighbor),
        Some(ids[2])
    );
}

#[test]
fn successor_after_closing_first_or_last_tab() {
    let (mut store, ids) = store_with(&["a", "b", "c"]);

    let (index, _) = store.remove(ids[0]).unwrap();
    assert_eq!(
        store.successor_after_close(index, CloseActivation::LeftNeighbor),
        Some(ids[1])
    );

    let (index, _) = store.remove(ids[2]).unwrap();
    assert_eq!(
        store.successor_after_close(index, CloseActivation::RightNeighbor),
        Some(ids[1])
    );

    store.remove(ids[1]).unwrap();
    assert_eq!(
        store.successor_after_close(0, CloseActivation::LeftNeighbor),
        None
    );
}

#[test]
fn move_tab_reorders_and_clamps() {
    let (mut store, ids) = store_with(&["a", "b", "c"]);

    assert!(store.move_tab(ids[0], 99));
    assert_eq!(store.ids(), vec![ids[1], ids[2], ids[0]]);
    assert!(!store.move_tab(ids[0], 2));
    assert!(store.move_tab(ids[0], 0));
    assert_eq!(store.ids(), ids);
    assert!(!store.move_tab(TabId::new(42), 0));
}

#[test]
fn neighbor_wraps_around() {
    let (store, ids) = store_with(&["a", "b", "c"]);

    assert_eq!(store.neighbor(ids[2], 1), Some(ids[0]));
    assert_eq!(store.neighbor(ids[0], -1), Some(ids[2]));
    assert_eq!(store.neighbor(ids[1], 1), Some(ids[2]));
    assert_eq!(store.neighbor(TabId::new(9), 1), None);
}
