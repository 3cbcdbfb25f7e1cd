use deck_logging::deck_debug;

use crate::{RequestId, RequestTask, TaskError, TaskStatus};

/// Two tasks where the secondary consumes the primary's successful output.
///
/// Accepting a new primary submission resets the secondary at once, so a
/// secondary result is never shown next to a primary output it was not
/// computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentTaskChain<I, T, S> {
    primary: RequestTask<I, T>,
    secondary: RequestTask<T, S>,
}

impl<I, T: Clone, S> DependentTaskChain<I, T, S> {
    pub fn new(primary: RequestTask<I, T>, secondary: RequestTask<T, S>) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &RequestTask<I, T> {
        &self.primary
    }

    pub fn secondary(&self) -> &RequestTask<T, S> {
        &self.secondary
    }

    pub fn submit_primary(&mut self, input: I) -> Option<RequestId> {
        let request_id = self.primary.submit(input)?;
        self.secondary.reset();
        Some(request_id)
    }

    /// Submits the primary output to the secondary task.
    ///
    /// `Ok(None)` means the secondary already has a call outstanding.
    pub fn submit_secondary(&mut self) -> Result<Option<(RequestId, T)>, TaskError> {
        let Some(output) = self.primary.output().cloned() else {
            deck_debug!(
                "{} rejected: {} is {:?}",
                self.secondary.name(),
                self.primary.name(),
                self.primary.status()
            );
            return Err(TaskError::PreconditionFailed {
                operation: self.secondary.name(),
                prerequisite: self.primary.name(),
            });
        };
        Ok(self
            .secondary
            .submit(output.clone())
            .map(|request_id| (request_id, output)))
    }

    pub fn complete_primary(&mut self, request_id: RequestId, result: Result<T, TaskError>) -> bool {
        self.primary.complete(request_id, result)
    }

    pub fn complete_secondary(
        &mut self,
        request_id: RequestId,
        result: Result<S, TaskError>,
    ) -> bool {
        // A secondary result only lands while its primary output is current.
        if self.primary.status() != TaskStatus::Succeeded {
            return false;
        }
        self.secondary.complete(request_id, result)
    }

    pub fn reset(&mut self) {
        self.primary.reset();
        self.secondary.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> DependentTaskChain<String, String, String> {
        DependentTaskChain::new(RequestTask::new("transcribe"), RequestTask::new("summarize"))
    }

    #[test]
    fn secondary_receives_primary_output() {
        let mut chain = chain();
        let id = chain.submit_primary("u".to_string()).unwrap();
        chain.complete_primary(id, Ok("text".to_string()));

        let (_, input) = chain.submit_secondary().unwrap().unwrap();
        assert_eq!(input, "text");
        assert_eq!(chain.secondary().input().map(String::as_str), Some("text"));
    }

    #[test]
    fn rejected_primary_keeps_secondary() {
        let mut chain = chain();
        let id = chain.submit_primary("u".to_string()).unwrap();
        chain.complete_primary(id, Ok("text".to_string()));
        let (sid, _) = chain.submit_secondary().unwrap().unwrap();
        chain.complete_secondary(sid, Ok("sum".to_string()));

        let id = chain.submit_primary("v".to_string()).unwrap();
        assert_eq!(chain.secondary().status(), TaskStatus::Idle);
        // Already pending: rejected, nothing else changes.
        assert_eq!(chain.submit_primary("w".to_string()), None);
        assert_eq!(chain.primary().request_id(), id);
    }
}
