use std::path::PathBuf;

use crate::kernel::tabs::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the file and open it with `Action::CreateTab`.
    LoadFile(PathBuf),
    /// A tab was created; hosts may want to report the id.
    TabOpened(TabId),
}
