use compact_str::CompactString;

use crate::kernel::language::{self, LanguageId, Resolution};
use crate::kernel::services::ports::config::CloseActivation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl TabId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TabId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Explicit icon choice that survives renames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOverride {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    id: TabId,
    name: CompactString,
    pub(crate) content: String,
    language_override: Option<LanguageId>,
    icon_override: Option<IconOverride>,
}

impl Tab {
    pub fn new(id: TabId, name: &str, content: String) -> Self {
        Self {
            id,
            name: CompactString::new(name),
            content,
            language_override: None,
            icon_override: None,
        }
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stored content. For the tab bound to the engine this may trail the
    /// live buffer; read through the session for the live value.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> LanguageId {
        self.display_defaults().language
    }

    pub fn icon_name(&self) -> &str {
        match &self.icon_override {
            Some(icon) => icon.name.as_str(),
            None => self.display_defaults().icon_name,
        }
    }

    pub fn icon_color(&self) -> &str {
        match &self.icon_override {
            Some(IconOverride {
                color: Some(color), ..
            }) => color.as_str(),
            _ => self.display_defaults().icon_color,
        }
    }

    pub fn language_override(&self) -> Option<LanguageId> {
        self.language_override
    }

    pub fn icon_override(&self) -> Option<&IconOverride> {
        self.icon_override.as_ref()
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = CompactString::new(name);
    }

    pub(crate) fn set_language_override(&mut self, language: Option<LanguageId>) {
        self.language_override = language;
    }

    pub(crate) fn set_icon_override(&mut self, icon: Option<IconOverride>) {
        self.icon_override = icon;
    }

    /// Resolved fresh on every call: an explicit language takes its own
    /// defaults, otherwise the file name decides.
    fn display_defaults(&self) -> Resolution {
        match self.language_override {
            Some(language) => language.defaults(),
            None => language::resolve(&self.name),
        }
    }
}

/// Ordered tab collection with active-tab bookkeeping.
///
/// Pure data: binding tabs to the engine is the binder's job.
#[derive(Debug)]
pub struct TabStore {
    tabs: Vec<Tab>,
    active: Option<TabId>,
    next_tab_id: u64,
}

impl TabStore {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active: None,
            next_tab_id: 1,
        }
    }

    /// Ids are never reused, even after the tab is closed.
    pub fn alloc_id(&mut self) -> TabId {
        let id = TabId::new(self.next_tab_id);
        self.next_tab_id = self.next_tab_id.saturating_add(1);
        id
    }

    pub fn push(&mut self, tab: Tab) {
        debug_assert!(!self.contains(tab.id()));
        self.tabs.push(tab);
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.iter()
    }

    pub fn ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(Tab::id).collect()
    }

    pub fn index_of(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }

    pub fn active(&self) -> Option<TabId> {
        self.active
    }

    pub fn set_active(&mut self, id: Option<TabId>) {
        debug_assert!(id.map_or(true, |id| self.contains(id)));
        self.active = id;
    }

    /// Removes the tab and returns it with its former index. Does not touch
    /// the active marker.
    pub fn remove(&mut self, id: TabId) -> Option<(usize, Tab)> {
        let index = self.index_of(id)?;
        Some((index, self.tabs.remove(index)))
    }

    /// Tab to activate after the tab at `removed_index` was removed.
    pub fn successor_after_close(
        &self,
        removed_index: usize,
        policy: CloseActivation,
    ) -> Option<TabId> {
        if self.tabs.is_empty() {
            return None;
        }
        let index = match policy {
            CloseActivation::LeftNeighbor => removed_index.saturating_sub(1),
            CloseActivation::RightNeighbor => removed_index.min(self.tabs.len() - 1),
        };
        self.tabs.get(index).map(Tab::id)
    }

    /// Moves a tab to `to_index` (clamped). Returns whether the order changed.
    pub fn move_tab(&mut self, id: TabId, to_index: usize) -> bool {
        let Some(from) = self.index_of(id) else {
            return false;
        };
        let to = to_index.min(self.tabs.len() - 1);
        if from == to {
            return false;
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
        true
    }

    /// Tab `offset` positions away from `id`, wrapping around.
    pub fn neighbor(&self, id: TabId, offset: isize) -> Option<TabId> {
        let index = self.index_of(id)?;
        let len = self.tabs.len() as isize;
        let target = (index as isize + offset).rem_euclid(len);
        self.tabs.get(target as usize).map(Tab::id)
    }
}

impl Default for TabStore {
    fn default() -> Self {
        Self::new()
    }
}
