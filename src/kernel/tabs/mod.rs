//! Tab domain: ids, tab records and the ordered store.

mod state;

pub use state::{IconOverride, Tab, TabId, TabStore};

#[cfg(test)]
#[path = "../../../tests/unit/kernel/tabs.rs"]
mod tests;
