//! tabshell - multi-tab editing session over a single embedded engine.
//!
//! Modules:
//! - kernel: tabs, language/icon resolution, engine binder, session operations
//! - models: text buffer used by the headless engine
//! - shell: line-oriented host driving a session

pub mod kernel;
pub mod models;
pub mod shell;
