//! Contract of the embedded text-editing engine.
//!
//! The engine renders and edits exactly one buffer at a time. The session
//! binder multiplexes it across tabs through this trait.

use crate::kernel::language::LanguageId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("engine does not support language {0}")]
    UnsupportedLanguage(LanguageId),
    #[error("engine has no model attached")]
    Detached,
    #[error("engine rejected request: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Full-text change notification. `version` increases with every change of
/// the live buffer, including model swaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChange {
    pub text: String,
    pub version: u64,
}

pub type ChangeListener = Box<dyn FnMut(&ContentChange)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

pub trait EditorEngine {
    /// Replaces the live buffer and language. Must not notify listeners.
    fn set_model(&mut self, content: &str, language: LanguageId) -> Result<()>;

    /// Changes the language of the current model, keeping its content.
    fn set_language(&mut self, language: LanguageId) -> Result<()>;

    fn language(&self) -> Option<LanguageId>;

    /// Live content of the current model.
    fn value(&self) -> Result<String>;

    /// Replaces the live content as an edit; listeners are notified.
    fn set_value(&mut self, text: &str) -> Result<()>;

    fn on_did_change_content(&mut self, listener: ChangeListener) -> ListenerId;

    fn remove_listener(&mut self, id: ListenerId) -> bool;

    /// Drops the current model. `value` reports `Detached` afterwards.
    fn clear(&mut self);
}

/// Background worker serving a family of languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WorkerKind {
    Editor,
    Json,
    Css,
    Html,
    TypeScript,
}

impl WorkerKind {
    pub fn for_language(language: LanguageId) -> Self {
        match language {
            LanguageId::Json => Self::Json,
            LanguageId::Css | LanguageId::Scss | LanguageId::Less => Self::Css,
            LanguageId::Html => Self::Html,
            LanguageId::TypeScript | LanguageId::JavaScript => Self::TypeScript,
            _ => Self::Editor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Editor => "editor",
            Self::Json => "json",
            Self::Css => "css",
            Self::Html => "html",
            Self::TypeScript => "typescript",
        }
    }
}
