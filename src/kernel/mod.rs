//! Headless session core: tabs, language/icon resolution and the engine binder.

pub mod action;
pub mod binder;
pub mod effect;
pub mod error;
pub mod icons;
pub mod language;
pub mod services;
pub mod session;
pub mod tabs;

pub use action::Action;
pub use binder::{RebindOutcome, SessionBinder};
pub use effect::Effect;
pub use error::SessionError;
pub use icons::{IconAsset, IconError, IconRegistry};
pub use language::{resolve, LanguageId, Resolution};
pub use session::{DispatchResult, Session};
pub use tabs::{IconOverride, Tab, TabId, TabStore};
