use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::EngineError;
use crate::kernel::tabs::TabId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("tab {0} not found")]
    NotFound(TabId),
    #[error("engine could not bind tab {tab} as {language}: {source}")]
    EngineBindFailure {
        tab: TabId,
        language: LanguageId,
        #[source]
        source: EngineError,
    },
    #[error("engine rejected edit of tab {tab}: {source}")]
    EditRejected {
        tab: TabId,
        #[source]
        source: EngineError,
    },
    #[error("could not commit live content of tab {tab}: {source}")]
    CommitFailed {
        tab: TabId,
        #[source]
        source: EngineError,
    },
}

pub type Result<T> = std::result::Result<T, SessionError>;
