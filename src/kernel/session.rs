//! Tab session: the public, invariant-preserving operations.
//!
//! Every operation first drains pending engine change events from the kernel
//! bus, so stored content is current before anything is mutated. Reads of the
//! bound tab go straight to the engine.

use std::sync::Arc;

use crate::kernel::binder::SessionBinder;
use crate::kernel::error::{Result, SessionError};
use crate::kernel::icons::{IconAsset, IconRegistry};
use crate::kernel::language::{LanguageId, GENERIC_ICON};
use crate::kernel::services::ports::config::SessionConfig;
use crate::kernel::services::ports::EditorEngine;
use crate::kernel::services::{kernel_bus, KernelBusReceiver, KernelMessage};
use crate::kernel::tabs::{IconOverride, Tab, TabId, TabStore};
use crate::kernel::{Action, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
    pub error: Option<SessionError>,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
            error: None,
        }
    }

    fn from_result(result: Result<bool>) -> Self {
        match result {
            Ok(changed) => Self::changed(changed),
            Err(error) => Self {
                effects: Vec::new(),
                state_changed: false,
                error: Some(error),
            },
        }
    }
}

pub struct Session<E: EditorEngine> {
    tabs: TabStore,
    binder: SessionBinder<E>,
    bus: KernelBusReceiver,
    icons: Arc<IconRegistry>,
    config: SessionConfig,
}

impl<E: EditorEngine> Session<E> {
    pub fn new(engine: E, icons: Arc<IconRegistry>, config: SessionConfig) -> Self {
        let (tx, rx) = kernel_bus();
        Self {
            tabs: TabStore::new(),
            binder: SessionBinder::new(engine, tx),
            bus: rx,
            icons,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn icons(&self) -> &IconRegistry {
        &self.icons
    }

    pub fn engine(&self) -> &E {
        self.binder.engine()
    }

    /// Editing access to the engine (keystrokes, cursor moves).
    pub fn engine_mut(&mut self) -> &mut E {
        self.binder.engine_mut()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_tab_id(&self) -> Option<TabId> {
        self.tabs.active()
    }

    pub fn bound_tab_id(&self) -> Option<TabId> {
        self.binder.bound_tab()
    }

    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.ids()
    }

    /// Snapshot of a tab with its live content.
    pub fn tab(&self, id: TabId) -> Option<Tab> {
        let mut tab = self.tabs.get(id)?.clone();
        if let Some(live) = self.binder.live_content(id) {
            tab.content = live;
        }
        Some(tab)
    }

    /// Snapshots of all tabs in order.
    pub fn tabs(&self) -> Vec<Tab> {
        self.tabs
            .iter()
            .filter_map(|tab| self.tab(tab.id()))
            .collect()
    }

    pub fn content(&self, id: TabId) -> Result<String> {
        let tab = self.tabs.get(id).ok_or(SessionError::NotFound(id))?;
        Ok(self
            .binder
            .live_content(id)
            .unwrap_or_else(|| tab.content().to_string()))
    }

    /// Icon asset for the tab: its own icon, else its language's default,
    /// else the generic file icon. `Ok(None)` if none of them is registered.
    pub fn icon_for(&self, id: TabId) -> Result<Option<&IconAsset>> {
        let tab = self.tabs.get(id).ok_or(SessionError::NotFound(id))?;
        let candidates = [
            tab.icon_name(),
            tab.language().defaults().icon_name,
            GENERIC_ICON,
        ];
        for name in candidates {
            match self.icons.get(name) {
                Ok(asset) => return Ok(Some(asset)),
                Err(error) => tracing::debug!(tab = %id, error = %error, "icon fallback"),
            }
        }
        Ok(None)
    }

    /// Applies queued engine change events to their tabs. Returns how many
    /// events were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.bus.try_recv() {
            match msg {
                KernelMessage::ContentChanged { tab, text, version } => {
                    match self.tabs.get_mut(tab) {
                        Some(target) => {
                            target.content = text;
                            applied += 1;
                        }
                        None => {
                            tracing::debug!(tab = %tab, version, "dropping change for closed tab");
                        }
                    }
                }
            }
        }
        applied
    }

    /// Appends a tab and activates it per the session config. If the new tab
    /// cannot be bound it is removed again only when no other tab is active;
    /// otherwise it is kept inactive.
    pub fn create_tab(&mut self, name: &str, initial_content: Option<&str>) -> Result<TabId> {
        self.pump();
        let id = self.tabs.alloc_id();
        self.tabs.push(Tab::new(
            id,
            name,
            initial_content.unwrap_or_default().to_string(),
        ));
        tracing::debug!(tab = %id, name, "tab created");

        let must_activate = self.tabs.active().is_none();
        if !must_activate && !self.config.activate_on_create {
            return Ok(id);
        }
        match self.switch_to(id) {
            Ok(()) => Ok(id),
            Err(error) if must_activate => {
                self.tabs.remove(id);
                tracing::warn!(tab = %id, error = %error, "tab creation rolled back");
                Err(error)
            }
            Err(error) => {
                // The previous tab keeps the engine; the new tab stays inactive
                // with its initial content.
                tracing::warn!(tab = %id, error = %error, "new tab left inactive");
                Ok(id)
            }
        }
    }

    /// Closes `id` and returns it with its final content. Unknown ids are a
    /// no-op (`Ok(None)`).
    pub fn close_tab(&mut self, id: TabId) -> Result<Option<Tab>> {
        self.pump();
        if !self.tabs.contains(id) {
            return Ok(None);
        }

        let bound = self.binder.bound_tab() == Some(id);
        if bound {
            self.binder.commit(&mut self.tabs)?;
        }
        let Some((index, tab)) = self.tabs.remove(id) else {
            return Ok(None);
        };
        if bound {
            self.binder.release();
        }
        tracing::debug!(tab = %id, "tab closed");

        if self.tabs.active() == Some(id) {
            let successor = self
                .tabs
                .successor_after_close(index, self.config.close_activation);
            self.tabs.set_active(successor);
            if let Some(next) = successor {
                if let Err(error) = self.binder.rebind(&mut self.tabs, next) {
                    // The successor stays active with its stored content; a
                    // later activation retries the bind.
                    tracing::error!(tab = %next, error = %error, "successor left unbound");
                }
            }
        }
        Ok(Some(tab))
    }

    pub fn activate_tab(&mut self, id: TabId) -> Result<()> {
        self.pump();
        if !self.tabs.contains(id) {
            return Err(SessionError::NotFound(id));
        }
        if self.tabs.active() == Some(id) && self.binder.bound_tab() == Some(id) {
            return Ok(());
        }
        self.switch_to(id)?;
        Ok(())
    }

    pub fn next_tab(&mut self) -> Result<Option<TabId>> {
        self.cycle(1)
    }

    pub fn prev_tab(&mut self) -> Result<Option<TabId>> {
        self.cycle(-1)
    }

    /// Renames the tab. Derived language/icon follow the new name unless
    /// they were set explicitly.
    pub fn rename_tab(&mut self, id: TabId, new_name: &str) -> Result<()> {
        self.pump();
        let tab = self.tabs.get_mut(id).ok_or(SessionError::NotFound(id))?;
        let before = tab.language();
        tab.set_name(new_name);
        let after = tab.language();
        tracing::debug!(tab = %id, name = new_name, language = %after, "tab renamed");

        if before != after {
            self.sync_engine_language(id, after);
        }
        Ok(())
    }

    /// Sets or clears an explicit language.
    pub fn set_language(&mut self, id: TabId, language: Option<LanguageId>) -> Result<()> {
        self.pump();
        let tab = self.tabs.get_mut(id).ok_or(SessionError::NotFound(id))?;
        let before = tab.language();
        tab.set_language_override(language);
        let after = tab.language();

        if before != after {
            self.sync_engine_language(id, after);
        }
        Ok(())
    }

    /// Sets or clears an explicit icon.
    pub fn set_icon(&mut self, id: TabId, icon: Option<IconOverride>) -> Result<()> {
        self.pump();
        let tab = self.tabs.get_mut(id).ok_or(SessionError::NotFound(id))?;
        tab.set_icon_override(icon);
        Ok(())
    }

    /// Replaces a tab's content. For the bound tab the text is pushed into the
    /// engine first; if the engine refuses, nothing changes.
    pub fn update_content(&mut self, id: TabId, text: &str) -> Result<()> {
        self.pump();
        if !self.tabs.contains(id) {
            return Err(SessionError::NotFound(id));
        }

        if self.binder.bound_tab() == Some(id) {
            self.binder
                .push_content(text)
                .map_err(|source| SessionError::EditRejected { tab: id, source })?;
            self.pump();
        }
        if let Some(tab) = self.tabs.get_mut(id) {
            tab.content = text.to_string();
        }
        Ok(())
    }

    pub fn move_tab(&mut self, id: TabId, to_index: usize) -> Result<bool> {
        self.pump();
        if !self.tabs.contains(id) {
            return Err(SessionError::NotFound(id));
        }
        Ok(self.tabs.move_tab(id, to_index))
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::CreateTab { name, content } => {
                match self.create_tab(&name, content.as_deref()) {
                    Ok(id) => DispatchResult {
                        effects: vec![Effect::TabOpened(id)],
                        state_changed: true,
                        error: None,
                    },
                    Err(error) => DispatchResult::from_result(Err(error)),
                }
            }
            Action::OpenPath(path) => DispatchResult {
                effects: vec![Effect::LoadFile(path)],
                state_changed: false,
                error: None,
            },
            Action::CloseTab(id) => {
                DispatchResult::from_result(self.close_tab(id).map(|closed| closed.is_some()))
            }
            Action::ActivateTab(id) => {
                let prev = self.active_tab_id();
                DispatchResult::from_result(
                    self.activate_tab(id)
                        .map(|()| self.active_tab_id() != prev),
                )
            }
            Action::NextTab => {
                DispatchResult::from_result(self.next_tab().map(|next| next.is_some()))
            }
            Action::PrevTab => {
                DispatchResult::from_result(self.prev_tab().map(|prev| prev.is_some()))
            }
            Action::RenameTab { id, name } => {
                DispatchResult::from_result(self.rename_tab(id, &name).map(|()| true))
            }
            Action::UpdateContent { id, text } => {
                DispatchResult::from_result(self.update_content(id, &text).map(|()| true))
            }
            Action::SetLanguage { id, language } => {
                DispatchResult::from_result(self.set_language(id, language).map(|()| true))
            }
            Action::SetIcon { id, icon } => {
                DispatchResult::from_result(self.set_icon(id, icon).map(|()| true))
            }
            Action::MoveTab { id, to_index } => {
                DispatchResult::from_result(self.move_tab(id, to_index))
            }
        }
    }

    fn switch_to(&mut self, id: TabId) -> Result<()> {
        self.binder.rebind(&mut self.tabs, id)?;
        self.tabs.set_active(Some(id));
        Ok(())
    }

    fn cycle(&mut self, offset: isize) -> Result<Option<TabId>> {
        self.pump();
        let Some(active) = self.tabs.active() else {
            return Ok(None);
        };
        match self.tabs.neighbor(active, offset) {
            Some(next) if next != active => {
                self.activate_tab(next)?;
                Ok(Some(next))
            }
            _ => Ok(None),
        }
    }

    fn sync_engine_language(&mut self, id: TabId, language: LanguageId) {
        if self.binder.bound_tab() != Some(id) {
            return;
        }
        if let Err(error) = self.binder.reconfigure_language(language) {
            tracing::error!(tab = %id, language = %language, error = %error, "engine language unchanged");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
