use std::time::Duration;

use deck_logging::{deck_info, deck_warn};
use taskdeck_core::{Effect, Msg, TaskError, UpstreamComment, UpstreamPost};
use taskdeck_engine::{
    BackendError, CommentPayload, EngineEvent, EngineHandle, PostPayload, ScrapeRequest,
};

/// Executes core effects on the engine and turns engine events back into
/// messages for `update`.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Transcribe { request_id, url } => {
                    deck_info!("Transcribe request_id={} url={}", request_id, url);
                    self.engine.transcribe(request_id, url);
                }
                Effect::Summarize { request_id, text } => {
                    deck_info!(
                        "Summarize request_id={} text_len={}",
                        request_id,
                        text.len()
                    );
                    self.engine.summarize(request_id, text);
                }
                Effect::Scrape { request_id, params } => {
                    deck_info!(
                        "Scrape request_id={} post_limit={} comment_limit_per_post={}",
                        request_id,
                        params.post_limit,
                        params.comment_limit_per_post
                    );
                    self.engine.scrape(
                        request_id,
                        ScrapeRequest {
                            post_limit: params.post_limit,
                            comment_limit_per_post: params.comment_limit_per_post,
                        },
                    );
                }
            }
        }
    }

    pub fn try_next(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }

    pub fn next_timeout(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

pub fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::TranscribeCompleted { request_id, result } => Msg::TranscriptionDone {
            request_id,
            result: result.map_err(|err| map_error("transcribe", request_id, err)),
        },
        EngineEvent::SummarizeCompleted { request_id, result } => Msg::SummaryDone {
            request_id,
            result: result.map_err(|err| map_error("summarize", request_id, err)),
        },
        EngineEvent::ScrapeCompleted { request_id, result } => Msg::ScrapeDone {
            request_id,
            result: result
                .map(|posts| posts.into_iter().map(map_post).collect())
                .map_err(|err| map_error("scrape", request_id, err)),
        },
    }
}

fn map_error(operation: &str, request_id: u64, err: BackendError) -> TaskError {
    deck_warn!("{} request {} failed: {}", operation, request_id, err);
    if err.is_service_error() {
        TaskError::service(err.message)
    } else {
        TaskError::transport(err.to_string())
    }
}

fn map_post(post: PostPayload) -> UpstreamPost {
    UpstreamPost {
        id: post.id,
        title: post.title,
        body: post.body,
        url: post.url,
        created_at: post.created_at.map(|secs| secs as i64),
        comments: post
            .comments
            .map(|comments| comments.into_iter().map(map_comment).collect()),
    }
}

fn map_comment(comment: CommentPayload) -> UpstreamComment {
    UpstreamComment {
        id: comment.id,
        body: comment.body,
        author: comment.author,
        score: comment.score,
        created_at: comment.created_at.map(|secs| secs as i64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use taskdeck_engine::FailureKind;

    fn failure(kind: FailureKind, message: &str) -> BackendError {
        BackendError {
            kind,
            message: message.to_string(),
        }
    }

    #[test]
    fn service_errors_keep_their_message() {
        let msg = map_event(EngineEvent::TranscribeCompleted {
            request_id: 3,
            result: Err(failure(FailureKind::Service, "Video download failed")),
        });
        assert_eq!(
            msg,
            Msg::TranscriptionDone {
                request_id: 3,
                result: Err(TaskError::service("Video download failed")),
            }
        );
    }

    #[test]
    fn other_failures_become_transport_errors() {
        let msg = map_event(EngineEvent::SummarizeCompleted {
            request_id: 1,
            result: Err(failure(FailureKind::HttpStatus(502), "502 Bad Gateway")),
        });
        let Msg::SummaryDone {
            result: Err(err), ..
        } = msg
        else {
            panic!("expected failed summary");
        };
        assert!(matches!(err, TaskError::Transport { .. }));
        assert_eq!(err.user_message(), "Network error");
    }

    struct CannedBackend;

    #[async_trait::async_trait]
    impl taskdeck_engine::Backend for CannedBackend {
        async fn transcribe(&self, url: &str) -> Result<String, BackendError> {
            if url.contains("slow") {
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            Ok(format!("hello world from {url}"))
        }

        async fn summarize(&self, _text: &str) -> Result<String, BackendError> {
            Ok("- hi".to_string())
        }

        async fn scrape(
            &self,
            _request: &ScrapeRequest,
        ) -> Result<Vec<PostPayload>, BackendError> {
            Err(failure(FailureKind::Service, "rate limited"))
        }
    }

    fn runner() -> EffectRunner {
        deck_logging::initialize_for_tests();
        let engine = EngineHandle::with_backend(std::sync::Arc::new(CannedBackend))
            .expect("engine");
        EffectRunner::new(engine)
    }

    fn step(
        runner: &EffectRunner,
        state: taskdeck_core::AppState,
        msg: Msg,
    ) -> taskdeck_core::AppState {
        let (state, effects) = taskdeck_core::update(state, msg);
        runner.enqueue(effects);
        state
    }

    fn settle(runner: &EffectRunner, state: taskdeck_core::AppState) -> taskdeck_core::AppState {
        let msg = runner
            .next_timeout(Duration::from_secs(5))
            .expect("engine reply");
        step(runner, state, msg)
    }

    #[test]
    fn transcribe_and_summarize_through_engine() {
        use taskdeck_core::{AppState, TaskView};

        let runner = runner();
        let state = step(&runner, AppState::new(), Msg::UrlInputChanged("x".into()));
        let state = step(&runner, state, Msg::TranscribeSubmitted);
        let state = settle(&runner, state);
        assert_eq!(
            state.view().transcriber.transcript,
            TaskView::Ready("hello world from x".to_string())
        );

        let state = step(&runner, state, Msg::SummarizeClicked);
        let state = settle(&runner, state);
        assert_eq!(
            state.view().transcriber.summary,
            TaskView::Ready("- hi".to_string())
        );
    }

    #[test]
    fn late_reply_for_unmounted_view_is_dropped() {
        use taskdeck_core::{AppState, TaskStatus};

        let runner = runner();
        let state = step(&runner, AppState::new(), Msg::UrlInputChanged("slow".into()));
        let state = step(&runner, state, Msg::TranscribeSubmitted);
        let state = step(&runner, state, Msg::Navigated("/reddit-scraper".into()));
        let state = step(&runner, state, Msg::ScrapeClicked);

        // Scrape failure arrives first, then the stale transcription.
        let state = settle(&runner, state);
        assert_eq!(
            state.view().scraper.content,
            taskdeck_core::ScraperContent::Error("rate limited".to_string())
        );
        let mut state = settle(&runner, state);
        state.consume_dirty();
        assert_eq!(
            state.transcriber().chain().primary().status(),
            TaskStatus::Idle
        );
        assert!(!state.has_pending());
    }

    #[test]
    fn posts_are_mapped_with_truncated_timestamps() {
        let msg = map_event(EngineEvent::ScrapeCompleted {
            request_id: 2,
            result: Ok(vec![PostPayload {
                id: Some("p1".to_string()),
                created_at: Some(1_700_000_000.9),
                comments: Some(vec![CommentPayload {
                    score: Some(5),
                    ..CommentPayload::default()
                }]),
                ..PostPayload::default()
            }]),
        });
        let Msg::ScrapeDone {
            result: Ok(posts), ..
        } = msg
        else {
            panic!("expected posts");
        };
        assert_eq!(posts[0].created_at, Some(1_700_000_000));
        let comments = posts[0].comments.as_ref().expect("comments");
        assert_eq!(comments[0].score, Some(5));
        assert_eq!(comments[0].id, None);
    }
}
