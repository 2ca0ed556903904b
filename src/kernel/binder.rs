//! Multiplexes the single editing engine across tabs.
//!
//! The binder owns the engine and an exclusive-owner handle naming the tab
//! whose content is currently live in it. Ownership moves only through
//! [`SessionBinder::rebind`]: commit the old owner's live text, detach its
//! listener, load the new owner's model, attach a listener tagged with the
//! new owner's id.

use crate::kernel::error::{Result, SessionError};
use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::engine::{
    ChangeListener, ContentChange, EditorEngine, EngineError, ListenerId,
};
use crate::kernel::services::{KernelBusSender, KernelMessage};
use crate::kernel::tabs::{TabId, TabStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Binding {
    tab: TabId,
    listener: ListenerId,
    language: LanguageId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebindOutcome {
    /// Tab whose live content was committed before the switch.
    pub committed: Option<TabId>,
    /// Language the engine was configured with.
    pub language: LanguageId,
    /// The tab's language was rejected and plain text was used instead.
    pub fell_back: bool,
}

pub struct SessionBinder<E> {
    engine: E,
    binding: Option<Binding>,
    bus: KernelBusSender,
}

impl<E: EditorEngine> SessionBinder<E> {
    pub fn new(engine: E, bus: KernelBusSender) -> Self {
        Self {
            engine,
            binding: None,
            bus,
        }
    }

    pub fn bound_tab(&self) -> Option<TabId> {
        self.binding.map(|b| b.tab)
    }

    pub fn bound_language(&self) -> Option<LanguageId> {
        self.binding.map(|b| b.language)
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Direct engine access for editing. Swapping the engine's model from
    /// outside breaks the binding; use the session operations for that.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Live text of `tab` if it is the bound tab.
    pub fn live_content(&self, tab: TabId) -> Option<String> {
        if self.bound_tab() != Some(tab) {
            return None;
        }
        match self.engine.value() {
            Ok(text) => Some(text),
            Err(error) => {
                tracing::warn!(tab = %tab, error = %error, "live content unavailable");
                None
            }
        }
    }

    /// Moves the engine to `target`. `Ok(None)` when `target` is already
    /// bound; nothing is touched in that case.
    ///
    /// On failure the previous binding is restored and the error returned.
    pub fn rebind(&mut self, tabs: &mut TabStore, target: TabId) -> Result<Option<RebindOutcome>> {
        if self.bound_tab() == Some(target) {
            return Ok(None);
        }
        let tab = tabs.get(target).ok_or(SessionError::NotFound(target))?;
        let content = tab.content().to_string();
        let language = tab.language();

        let committed = self.commit(tabs)?;
        let previous = self.detach();

        match self.attach(target, &content, language) {
            Ok((configured, fell_back)) => {
                tracing::debug!(
                    from = ?committed,
                    to = %target,
                    language = %configured,
                    "engine rebound"
                );
                Ok(Some(RebindOutcome {
                    committed,
                    language: configured,
                    fell_back,
                }))
            }
            Err(source) => {
                tracing::error!(tab = %target, language = %language, error = %source, "engine bind failed");
                if let Some(previous) = previous {
                    self.restore(tabs, previous);
                }
                Err(SessionError::EngineBindFailure {
                    tab: target,
                    language,
                    source,
                })
            }
        }
    }

    /// Writes the engine's live text into the bound tab's stored content.
    pub fn commit(&mut self, tabs: &mut TabStore) -> Result<Option<TabId>> {
        let Some(binding) = self.binding else {
            return Ok(None);
        };
        let text = self
            .engine
            .value()
            .map_err(|source| SessionError::CommitFailed {
                tab: binding.tab,
                source,
            })?;
        if let Some(tab) = tabs.get_mut(binding.tab) {
            tab.content = text;
        }
        Ok(Some(binding.tab))
    }

    /// Commits, then leaves the engine without a model.
    pub fn unbind(&mut self, tabs: &mut TabStore) -> Result<Option<TabId>> {
        let committed = self.commit(tabs)?;
        self.release();
        Ok(committed)
    }

    /// Detaches and clears the engine without committing.
    pub fn release(&mut self) -> Option<TabId> {
        let released = self.detach().map(|b| b.tab);
        self.engine.clear();
        released
    }

    /// Programmatic edit of the bound tab's live buffer.
    pub fn push_content(&mut self, text: &str) -> std::result::Result<(), EngineError> {
        if self.binding.is_none() {
            return Err(EngineError::Detached);
        }
        self.engine.set_value(text)
    }

    /// Switches the bound model's language in place, falling back to plain
    /// text. Returns the configured language, `None` when nothing is bound.
    pub fn reconfigure_language(
        &mut self,
        language: LanguageId,
    ) -> std::result::Result<Option<LanguageId>, EngineError> {
        let Some(binding) = self.binding.as_mut() else {
            return Ok(None);
        };
        let configured = match self.engine.set_language(language) {
            Ok(()) => language,
            Err(error) if language != LanguageId::PlainText => {
                tracing::warn!(tab = %binding.tab, language = %language, error = %error, "language rejected, using plain text");
                self.engine.set_language(LanguageId::PlainText)?;
                LanguageId::PlainText
            }
            Err(error) => return Err(error),
        };
        binding.language = configured;
        Ok(Some(configured))
    }

    fn detach(&mut self) -> Option<Binding> {
        let binding = self.binding.take()?;
        self.engine.remove_listener(binding.listener);
        Some(binding)
    }

    fn attach(
        &mut self,
        tab: TabId,
        content: &str,
        language: LanguageId,
    ) -> std::result::Result<(LanguageId, bool), EngineError> {
        let (configured, fell_back) = match self.engine.set_model(content, language) {
            Ok(()) => (language, false),
            Err(error) if language != LanguageId::PlainText => {
                tracing::warn!(tab = %tab, language = %language, error = %error, "language rejected, using plain text");
                self.engine.set_model(content, LanguageId::PlainText)?;
                (LanguageId::PlainText, true)
            }
            Err(error) => return Err(error),
        };

        let listener = self.engine.on_did_change_content(self.listener_for(tab));
        self.binding = Some(Binding {
            tab,
            listener,
            language: configured,
        });
        Ok((configured, fell_back))
    }

    fn restore(&mut self, tabs: &TabStore, previous: Binding) {
        let Some(tab) = tabs.get(previous.tab) else {
            self.engine.clear();
            return;
        };
        let content = tab.content().to_string();
        if let Err(error) = self.attach(previous.tab, &content, previous.language) {
            tracing::error!(tab = %previous.tab, error = %error, "could not restore previous binding");
            self.engine.clear();
        }
    }

    fn listener_for(&self, tab: TabId) -> ChangeListener {
        let bus = self.bus.clone();
        Box::new(move |change: &ContentChange| {
            let msg = KernelMessage::ContentChanged {
                tab,
                text: change.text.clone(),
                version: change.version,
            };
            if bus.send(msg).is_err() {
                tracing::warn!(tab = %tab, "kernel bus closed, dropping content change");
            }
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/binder.rs"]
mod tests;
