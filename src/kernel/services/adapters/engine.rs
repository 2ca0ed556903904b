//! In-process editing engine.
//!
//! Holds one live [`TextBuffer`] and notifies listeners synchronously after
//! every edit. Language workers are started lazily the first time a model of
//! their language is attached.

use rustc_hash::FxHashSet;

use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::engine::{
    ChangeListener, ContentChange, EditorEngine, EngineError, ListenerId, Result, WorkerKind,
};
use crate::models::TextBuffer;

struct Model {
    buffer: TextBuffer,
    language: LanguageId,
}

pub struct HeadlessEngine {
    model: Option<Model>,
    version: u64,
    listeners: Vec<(ListenerId, ChangeListener)>,
    next_listener_id: u64,
    workers: FxHashSet<WorkerKind>,
    unsupported: FxHashSet<LanguageId>,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self {
            model: None,
            version: 0,
            listeners: Vec::new(),
            next_listener_id: 1,
            workers: FxHashSet::default(),
            unsupported: FxHashSet::default(),
        }
    }

    /// Makes the engine reject `language` in `set_model`/`set_language`.
    pub fn with_unsupported_language(mut self, language: LanguageId) -> Self {
        self.unsupported.insert(language);
        self
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.model.as_ref().map(|m| m.buffer.cursor())
    }

    pub fn set_cursor(&mut self, char_offset: usize) -> Result<()> {
        self.model_mut()?.buffer.set_cursor(char_offset);
        Ok(())
    }

    /// Started workers in a stable order.
    pub fn started_workers(&self) -> Vec<WorkerKind> {
        let mut workers: Vec<_> = self.workers.iter().copied().collect();
        workers.sort_unstable();
        workers
    }

    /// Inserts at the caret, as typing does.
    pub fn type_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.model_mut()?.buffer.insert_at_cursor(text);
        self.emit_change();
        Ok(())
    }

    pub fn insert(&mut self, char_offset: usize, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.model_mut()?.buffer.insert(char_offset, text);
        self.emit_change();
        Ok(())
    }

    pub fn delete_range(&mut self, range: std::ops::Range<usize>) -> Result<String> {
        let removed = self.model_mut()?.buffer.remove(range);
        if !removed.is_empty() {
            self.emit_change();
        }
        Ok(removed)
    }

    pub fn backspace(&mut self) -> Result<bool> {
        let removed = self.model_mut()?.buffer.delete_backward();
        if removed.is_some() {
            self.emit_change();
        }
        Ok(removed.is_some())
    }

    fn model_mut(&mut self) -> Result<&mut Model> {
        self.model.as_mut().ok_or(EngineError::Detached)
    }

    fn check_language(&self, language: LanguageId) -> Result<()> {
        if self.unsupported.contains(&language) {
            return Err(EngineError::UnsupportedLanguage(language));
        }
        Ok(())
    }

    fn ensure_worker(&mut self, language: LanguageId) {
        let kind = WorkerKind::for_language(language);
        if self.workers.insert(kind) {
            tracing::debug!(worker = kind.label(), language = %language, "worker started");
        }
    }

    fn emit_change(&mut self) {
        self.version = self.version.saturating_add(1);
        let Some(model) = self.model.as_ref() else {
            return;
        };
        let change = ContentChange {
            text: model.buffer.text(),
            version: self.version,
        };
        for (_, listener) in &mut self.listeners {
            listener(&change);
        }
    }
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorEngine for HeadlessEngine {
    fn set_model(&mut self, content: &str, language: LanguageId) -> Result<()> {
        self.check_language(language)?;
        self.ensure_worker(language);
        self.model = Some(Model {
            buffer: TextBuffer::from_text(content),
            language,
        });
        self.version = self.version.saturating_add(1);
        Ok(())
    }

    fn set_language(&mut self, language: LanguageId) -> Result<()> {
        self.check_language(language)?;
        if self.model.is_none() {
            return Err(EngineError::Detached);
        }
        self.ensure_worker(language);
        self.model_mut()?.language = language;
        Ok(())
    }

    fn language(&self) -> Option<LanguageId> {
        self.model.as_ref().map(|m| m.language)
    }

    fn value(&self) -> Result<String> {
        self.model
            .as_ref()
            .map(|m| m.buffer.text())
            .ok_or(EngineError::Detached)
    }

    fn set_value(&mut self, text: &str) -> Result<()> {
        let model = self.model_mut()?;
        if model.buffer.rope() == text {
            return Ok(());
        }
        model.buffer.set_text(text);
        self.emit_change();
        Ok(())
    }

    fn on_did_change_content(&mut self, listener: ChangeListener) -> ListenerId {
        let id = ListenerId::new(self.next_listener_id);
        self.next_listener_id = self.next_listener_id.saturating_add(1);
        self.listeners.push((id, listener));
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn clear(&mut self) {
        self.model = None;
        self.version = self.version.saturating_add(1);
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/engine.rs"]
mod tests;
