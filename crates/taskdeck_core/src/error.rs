use thiserror::Error;

/// Shown for transport failures, whose details are only logged.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";
/// Shown when the service reports an error without saying what went wrong.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Failure recorded on a task. Never propagated past the task boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// Service unreachable, non-2xx without an error payload, or a body that
    /// could not be decoded.
    #[error("transport error: {detail}")]
    Transport { detail: String },
    /// Service reached and answered with an explicit error payload.
    #[error("service error: {message}")]
    Service { message: String },
    /// A dependent operation was requested before its prerequisite succeeded.
    #[error("{operation} requires {prerequisite} to succeed first")]
    PreconditionFailed {
        operation: &'static str,
        prerequisite: &'static str,
    },
}

impl TaskError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self::Transport {
            detail: detail.into(),
        }
    }

    pub fn service(message: impl Into<String>) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    /// Text the view displays for this error.
    pub fn user_message(&self) -> String {
        match self {
            TaskError::Transport { .. } => NETWORK_ERROR_MESSAGE.to_string(),
            TaskError::Service { message } if message.trim().is_empty() => {
                UNKNOWN_ERROR_MESSAGE.to_string()
            }
            TaskError::Service { message } => message.clone(),
            TaskError::PreconditionFailed { .. } => self.to_string(),
        }
    }
}
