use std::path::PathBuf;

use crate::kernel::language::LanguageId;
use crate::kernel::tabs::{IconOverride, TabId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateTab {
        name: String,
        content: Option<String>,
    },
    OpenPath(PathBuf),
    CloseTab(TabId),
    ActivateTab(TabId),
    NextTab,
    PrevTab,
    RenameTab {
        id: TabId,
        name: String,
    },
    UpdateContent {
        id: TabId,
        text: String,
    },
    SetLanguage {
        id: TabId,
        language: Option<LanguageId>,
    },
    SetIcon {
        id: TabId,
        icon: Option<IconOverride>,
    },
    MoveTab {
        id: TabId,
        to_index: usize,
    },
}
