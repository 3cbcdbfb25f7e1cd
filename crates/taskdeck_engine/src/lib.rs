//! Taskdeck engine: backend client and effect execution.
mod backend;
mod engine;
mod types;

pub use backend::{
    Backend, BackendSettings, ReqwestBackend, SCRAPE_PATH, SUMMARIZE_PATH, TRANSCRIBE_PATH,
};
pub use engine::{EngineError, EngineHandle};
pub use types::{
    BackendError, CommentPayload, EngineEvent, FailureKind, PostPayload, RequestId, ScrapeRequest,
};
