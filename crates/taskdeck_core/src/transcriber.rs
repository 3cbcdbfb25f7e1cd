use deck_logging::{deck_debug, deck_warn};

use crate::view_model::{TaskView, TranscriberView};
use crate::{DependentTaskChain, Effect, RequestId, RequestTask, TaskError, TaskStatus};

pub type TranscriptionChain = DependentTaskChain<String, String, String>;

/// Drives the transcribe → summarize workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriberController {
    url_input: String,
    chain: TranscriptionChain,
    notice: Option<TaskError>,
}

impl Default for TranscriberController {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriberController {
    pub fn new() -> Self {
        Self {
            url_input: String::new(),
            chain: DependentTaskChain::new(
                RequestTask::new("transcribe"),
                RequestTask::new("summarize"),
            ),
            notice: None,
        }
    }

    pub fn chain(&self) -> &TranscriptionChain {
        &self.chain
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn set_url_input(&mut self, text: String) -> bool {
        if self.url_input == text {
            return false;
        }
        self.url_input = text;
        true
    }

    /// Blank input is ignored; the form field is required.
    pub fn submit(&mut self) -> Option<Effect> {
        let url = self.url_input.trim().to_string();
        if url.is_empty() {
            deck_debug!("transcribe ignored: empty url");
            return None;
        }
        let request_id = self.chain.submit_primary(url.clone())?;
        self.notice = None;
        Some(Effect::Transcribe { request_id, url })
    }

    pub fn summarize(&mut self) -> (bool, Option<Effect>) {
        match self.chain.submit_secondary() {
            Ok(Some((request_id, text))) => {
                self.notice = None;
                (true, Some(Effect::Summarize { request_id, text }))
            }
            Ok(None) => (false, None),
            Err(err) => {
                deck_warn!("summarize rejected: {}", err);
                let changed = self.notice.as_ref() != Some(&err);
                self.notice = Some(err);
                (changed, None)
            }
        }
    }

    pub fn transcription_done(
        &mut self,
        request_id: RequestId,
        result: Result<String, TaskError>,
    ) -> bool {
        let applied = self.chain.complete_primary(request_id, result);
        if applied {
            // The precondition notice only describes a transcript that is not there yet.
            self.notice = None;
        }
        applied
    }

    pub fn summary_done(&mut self, request_id: RequestId, result: Result<String, TaskError>) -> bool {
        self.chain.complete_secondary(request_id, result)
    }

    /// Drops all view state, as when the view is cleared or unmounted.
    pub fn clear(&mut self) {
        self.chain.reset();
        self.url_input.clear();
        self.notice = None;
    }

    pub fn view(&self) -> TranscriberView {
        let transcribing = self.chain.primary().is_pending();
        let summary_status = self.chain.secondary().status();
        let summarize_label = match summary_status {
            TaskStatus::Pending => "Summarizing...",
            TaskStatus::Succeeded | TaskStatus::Failed => "Summarize Again",
            TaskStatus::Idle => "Summarize",
        };
        TranscriberView {
            url_input: self.url_input.clone(),
            transcript: TaskView::of(self.chain.primary()),
            summary: TaskView::of(self.chain.secondary()),
            submit_label: if transcribing {
                "Transcribing..."
            } else {
                "Transcribe"
            },
            submit_enabled: !transcribing,
            summarize_available: self.chain.primary().status() == TaskStatus::Succeeded,
            summarize_label,
            notice: self.notice.as_ref().map(TaskError::user_message),
        }
    }
}
