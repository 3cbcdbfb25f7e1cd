use std::fmt;

use serde::{Deserialize, Serialize};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    TranscribeCompleted {
        request_id: RequestId,
        result: Result<String, BackendError>,
    },
    SummarizeCompleted {
        request_id: RequestId,
        result: Result<String, BackendError>,
    },
    ScrapeCompleted {
        request_id: RequestId,
        result: Result<Vec<PostPayload>, BackendError>,
    },
}

impl EngineEvent {
    pub fn request_id(&self) -> RequestId {
        match self {
            EngineEvent::TranscribeCompleted { request_id, .. }
            | EngineEvent::SummarizeCompleted { request_id, .. }
            | EngineEvent::ScrapeCompleted { request_id, .. } => *request_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TranscribeRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SummarizeRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequest {
    pub post_limit: u32,
    pub comment_limit_per_post: u32,
}

/// Post as sent by the service. Field names follow the service's camelCase
/// and also accept the raw forum names.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(alias = "selftext")]
    pub body: Option<String>,
    pub url: Option<String>,
    /// Epoch seconds; the forum reports fractional seconds.
    #[serde(alias = "created_utc")]
    pub created_at: Option<f64>,
    pub comments: Option<Vec<CommentPayload>>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPayload {
    pub id: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub score: Option<i64>,
    #[serde(alias = "created_utc")]
    pub created_at: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct BackendError {
    pub kind: FailureKind,
    pub message: String,
}

impl BackendError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The service answered with an explicit error payload.
    pub fn is_service_error(&self) -> bool {
        self.kind == FailureKind::Service
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    /// Body was not the JSON shape the endpoint promises.
    Decode,
    Service,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::Service => write!(f, "service error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
