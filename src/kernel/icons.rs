//! Icon registry.
//!
//! All `*.svg` assets of a directory are read once at startup into an
//! immutable map keyed by file stem. The registry is shared as
//! `Arc<IconRegistry>` and never mutated afterwards.

use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const ICON_EXTENSION: &str = "svg";

#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("failed to read icon assets from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("icon not registered: {0}")]
    AssetMissing(String),
}

pub type Result<T> = std::result::Result<T, IconError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAsset {
    pub name: String,
    pub svg: Arc<str>,
}

#[derive(Debug, Default)]
pub struct IconRegistry {
    icons: FxHashMap<String, IconAsset>,
}

impl IconRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Eagerly loads every `*.svg` file directly inside `dir`.
    ///
    /// Files that are unreadable or do not contain an `<svg` element are
    /// skipped with a warning; only a failure to list `dir` is an error.
    pub fn load_all(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|source| IconError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut icons = FxHashMap::default();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    tracing::warn!(dir = %dir.display(), error = %error, "skip icon entry");
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() || !has_icon_extension(&path) {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let svg = match std::fs::read_to_string(&path) {
                Ok(svg) => svg,
                Err(error) => {
                    tracing::warn!(path = %path.display(), error = %error, "skip unreadable icon");
                    continue;
                }
            };
            if !svg.contains("<svg") {
                tracing::warn!(path = %path.display(), "skip icon without <svg> root");
                continue;
            }

            icons.insert(
                name.to_string(),
                IconAsset {
                    name: name.to_string(),
                    svg: Arc::from(svg),
                },
            );
        }

        tracing::info!(dir = %dir.display(), count = icons.len(), "icons loaded");
        Ok(Self { icons })
    }

    pub fn from_entries<I, N, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<Arc<str>>,
    {
        let icons = entries
            .into_iter()
            .map(|(name, svg)| {
                let name = name.into();
                let asset = IconAsset {
                    name: name.clone(),
                    svg: svg.into(),
                };
                (name, asset)
            })
            .collect();
        Self { icons }
    }

    pub fn lookup(&self, name: &str) -> Option<&IconAsset> {
        self.icons.get(name)
    }

    pub fn get(&self, name: &str) -> Result<&IconAsset> {
        self.lookup(name)
            .ok_or_else(|| IconError::AssetMissing(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.icons.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn has_icon_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ICON_EXTENSION))
}

/// Icon directory bundled with the crate.
pub fn bundled_icons_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join("icons")
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/icons.rs"]
mod tests;
