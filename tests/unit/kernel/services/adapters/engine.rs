use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn recording_listener(engine: &mut HeadlessEngine) -> (ListenerId, Rc<RefCell<Vec<String>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let id = engine.on_did_change_content(Box::new(move |change: &ContentChange| {
        sink.borrow_mut().push(change.text.clone());
    }));
    (id, seen)
}

#[test]
fn detached_engine_rejects_reads_and_edits() {
    let mut engine = HeadlessEngine::new();
    assert_eq!(engine.value(), Err(EngineError::Detached));
    assert_eq!(engine.type_text("x"), Err(EngineError::Detached));
    assert_eq!(engine.set_language(LanguageId::Rust), Err(EngineError::Detached));
    assert_eq!(engine.language(), None);
}

#[test]
fn set_model_replaces_buffer_without_notifying() {
    let mut engine = HeadlessEngine::new();
    let (_, seen) = recording_listener(&mut engine);

    engine.set_model("fn main() {}", LanguageId::Rust).unwrap();

    assert_eq!(engine.value().unwrap(), "fn main() {}");
    assert_eq!(engine.language(), Some(LanguageId::Rust));
    assert!(seen.borrow().is_empty());
}

#[test]
fn edits_notify_listeners_with_full_text() {
    let mut engine = HeadlessEngine::new();
    engine.set_model("", LanguageId::PlainText).unwrap();
    let (_, seen) = recording_listener(&mut engine);

    engine.type_text("he").unwrap();
    engine.type_text("llo").unwrap();
    engine.backspace().unwrap();
    engine.insert(0, ">").unwrap();
    engine.delete_range(0..1).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec!["he", "hello", "hell", ">hell", "hell"]
    );
}

#[test]
fn no_op_edits_do_not_notify() {
    let mut engine = HeadlessEngine::new();
    engine.set_model("same", LanguageId::PlainText).unwrap();
    let (_, seen) = recording_listener(&mut engine);

    engine.set_value("same").unwrap();
    engine.type_text("").unwrap();
    engine.delete_range(2..2).unwrap();
    engine.set_cursor(0).unwrap();
    assert!(!engine.backspace().unwrap());

    assert!(seen.borrow().is_empty());
}

#[test]
fn removed_listener_stops_receiving() {
    let mut engine = HeadlessEngine::new();
    engine.set_model("", LanguageId::PlainText).unwrap();
    let (id, seen) = recording_listener(&mut engine);

    engine.type_text("a").unwrap();
    assert!(engine.remove_listener(id));
    assert!(!engine.remove_listener(id));
    engine.type_text("b").unwrap();

    assert_eq!(*seen.borrow(), vec!["a"]);
    assert_eq!(engine.listener_count(), 0);
}

#[test]
fn unsupported_language_is_rejected_and_model_kept() {
    let mut engine = HeadlessEngine::new().with_unsupported_language(LanguageId::Sql);
    engine.set_model("keep", LanguageId::PlainText).unwrap();

    assert_eq!(
        engine.set_model("select 1", LanguageId::Sql),
        Err(EngineError::UnsupportedLanguage(LanguageId::Sql))
    );
    assert_eq!(
        engine.set_language(LanguageId::Sql),
        Err(EngineError::UnsupportedLanguage(LanguageId::Sql))
    );
    assert_eq!(engine.value().unwrap(), "keep");
    assert_eq!(engine.language(), Some(LanguageId::PlainText));
}

#[test]
fn workers_start_lazily_per_language_family() {
    let mut engine = HeadlessEngine::new();
    assert!(engine.started_workers().is_empty());

    engine.set_model("{}", LanguageId::Json).unwrap();
    engine.set_model("a {}", LanguageId::Scss).unwrap();
    engine.set_model("b {}", LanguageId::Css).unwrap();
    engine.set_language(LanguageId::TypeScript).unwrap();

    assert_eq!(
        engine.started_workers(),
        vec![WorkerKind::Json, WorkerKind::Css, WorkerKind::TypeScript]
    );
}

#[test]
fn clear_detaches_model() {
    let mut engine = HeadlessEngine::new();
    engine.set_model("x", LanguageId::PlainText).unwrap();
    engine.clear();
    assert!(!engine.has_model());
    assert_eq!(engine.value(), Err(EngineError::Detached));
}
