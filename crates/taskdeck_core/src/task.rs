use deck_logging::deck_debug;

use crate::TaskError;

/// Monotonic token identifying the most recently issued call of a task.
pub type RequestId = u64;

/// Lifecycle of one task. Illegal combinations such as "pending with an
/// error" cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskState<O> {
    Idle,
    /// A call is outstanding. `previous` holds the output of the run this
    /// submission replaced, so a view can keep it on screen while refreshing.
    Pending {
        previous: Option<O>,
    },
    Succeeded(O),
    Failed(TaskError),
}

impl<O> Default for TaskState<O> {
    fn default() -> Self {
        TaskState::Idle
    }
}

/// Payload-free view of [`TaskState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// State tracking of one asynchronous external call.
///
/// `submit` hands back the [`RequestId`] the caller must attach to the call;
/// `complete` only accepts the outcome carrying the current id while the task
/// is pending. Anything else is a superseded call and is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTask<I, O> {
    name: &'static str,
    state: TaskState<O>,
    input: Option<I>,
    request_id: RequestId,
}

impl<I, O> RequestTask<I, O> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: TaskState::Idle,
            input: None,
            request_id: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> &TaskState<O> {
        &self.state
    }

    pub fn status(&self) -> TaskStatus {
        match self.state {
            TaskState::Idle => TaskStatus::Idle,
            TaskState::Pending { .. } => TaskStatus::Pending,
            TaskState::Succeeded(_) => TaskStatus::Succeeded,
            TaskState::Failed(_) => TaskStatus::Failed,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status() == TaskStatus::Pending
    }

    pub fn input(&self) -> Option<&I> {
        self.input.as_ref()
    }

    pub fn output(&self) -> Option<&O> {
        match &self.state {
            TaskState::Succeeded(output) => Some(output),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&TaskError> {
        match &self.state {
            TaskState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Output of the run being refreshed, while a new call is outstanding.
    pub fn previous_output(&self) -> Option<&O> {
        match &self.state {
            TaskState::Pending { previous } => previous.as_ref(),
            _ => None,
        }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Starts a new call. Returns `None` without touching state if a call is
    /// already outstanding.
    pub fn submit(&mut self, input: I) -> Option<RequestId> {
        if self.is_pending() {
            deck_debug!(
                "{}: submit rejected, request {} still pending",
                self.name,
                self.request_id
            );
            return None;
        }
        self.request_id += 1;
        let previous = match std::mem::take(&mut self.state) {
            TaskState::Succeeded(output) => Some(output),
            _ => None,
        };
        self.state = TaskState::Pending { previous };
        self.input = Some(input);
        deck_debug!("{}: request {} pending", self.name, self.request_id);
        Some(self.request_id)
    }

    /// Records the outcome of call `request_id`. Returns `false` when the
    /// call was superseded or the task was reset in the meantime.
    pub fn complete(&mut self, request_id: RequestId, result: Result<O, TaskError>) -> bool {
        if request_id != self.request_id || !self.is_pending() {
            deck_debug!(
                "{}: dropping stale result for request {} (current {}, {:?})",
                self.name,
                request_id,
                self.request_id,
                self.status()
            );
            return false;
        }
        self.state = match result {
            Ok(output) => TaskState::Succeeded(output),
            Err(err) => {
                deck_debug!("{}: request {} failed: {}", self.name, request_id, err);
                TaskState::Failed(err)
            }
        };
        true
    }

    /// Returns to `Idle`. An outstanding call keeps running but its result
    /// will be discarded.
    pub fn reset(&mut self) {
        if self.is_pending() {
            deck_debug!(
                "{}: reset while request {} pending",
                self.name,
                self.request_id
            );
        }
        self.state = TaskState::Idle;
        self.input = None;
    }
}
