//! Service ports: traits + data contracts.

pub mod config;
pub mod engine;

pub use config::{CloseActivation, SessionConfig, Settings};
pub use engine::{
    ChangeListener, ContentChange, EditorEngine, EngineError, ListenerId, WorkerKind,
};
