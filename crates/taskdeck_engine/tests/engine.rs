use std::sync::Arc;
use std::time::Duration;

use taskdeck_engine::{
    Backend, BackendError, EngineEvent, EngineHandle, PostPayload, ScrapeRequest,
};

/// Answers after a delay encoded in the input, e.g. `"slow"` or `"fast"`.
struct ScriptedBackend;

fn delay_for(input: &str) -> Duration {
    if input.starts_with("slow") {
        Duration::from_millis(300)
    } else {
        Duration::from_millis(10)
    }
}

#[async_trait::async_trait]
impl Backend for ScriptedBackend {
    async fn transcribe(&self, url: &str) -> Result<String, BackendError> {
        tokio::time::sleep(delay_for(url)).await;
        Ok(format!("transcript of {url}"))
    }

    async fn summarize(&self, text: &str) -> Result<String, BackendError> {
        tokio::time::sleep(delay_for(text)).await;
        Ok(format!("- {text}"))
    }

    async fn scrape(&self, request: &ScrapeRequest) -> Result<Vec<PostPayload>, BackendError> {
        Ok((0..request.post_limit)
            .map(|n| PostPayload {
                id: Some(format!("p{n}")),
                ..PostPayload::default()
            })
            .collect())
    }
}

fn engine() -> EngineHandle {
    deck_logging::initialize_for_tests();
    EngineHandle::with_backend(Arc::new(ScriptedBackend)).expect("engine")
}

fn next_event(engine: &EngineHandle) -> EngineEvent {
    engine
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event")
}

#[test]
fn completions_arrive_in_completion_order_with_request_ids() {
    let engine = engine();
    engine.transcribe(1, "slow-video");
    engine.transcribe(2, "fast-video");

    let first = next_event(&engine);
    let second = next_event(&engine);

    assert_eq!(first.request_id(), 2);
    assert_eq!(second.request_id(), 1);
    assert_eq!(
        first,
        EngineEvent::TranscribeCompleted {
            request_id: 2,
            result: Ok("transcript of fast-video".to_string()),
        }
    );
}

#[test]
fn summarize_and_scrape_report_their_own_events() {
    let engine = engine();
    engine.summarize(4, "fast text");
    assert_eq!(
        next_event(&engine),
        EngineEvent::SummarizeCompleted {
            request_id: 4,
            result: Ok("- fast text".to_string()),
        }
    );

    engine.scrape(
        9,
        ScrapeRequest {
            post_limit: 2,
            comment_limit_per_post: 0,
        },
    );
    match next_event(&engine) {
        EngineEvent::ScrapeCompleted { request_id, result } => {
            assert_eq!(request_id, 9);
            assert_eq!(result.expect("posts").len(), 2);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn try_recv_is_empty_when_nothing_completed() {
    let engine = engine();
    assert!(engine.try_recv().is_none());
}
