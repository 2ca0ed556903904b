use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which tab takes over when the active tab is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseActivation {
    /// The tab left of the closed one, or the new first tab.
    #[default]
    LeftNeighbor,
    /// The tab right of the closed one, or the new last tab.
    RightNeighbor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub activate_on_create: bool,
    pub close_activation: CloseActivation,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            activate_on_create: true,
            close_activation: CloseActivation::LeftNeighbor,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icons_dir: Option<PathBuf>,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/config.rs"]
mod tests;
