use std::sync::Once;

use taskdeck_core::{RequestTask, TaskError, TaskState, TaskStatus};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(deck_logging::initialize_for_tests);
}

fn task() -> RequestTask<String, String> {
    RequestTask::new("transcribe")
}

#[test]
fn new_task_is_idle() {
    let task = task();
    assert_eq!(task.status(), TaskStatus::Idle);
    assert_eq!(task.request_id(), 0);
    assert!(task.input().is_none());
    assert!(task.output().is_none());
    assert!(task.error().is_none());
}

#[test]
fn at_most_one_call_in_flight() {
    init_logging();
    let mut task = task();
    let first = task.submit("a".to_string()).expect("first submit accepted");

    assert_eq!(task.submit("b".to_string()), None);
    assert_eq!(task.submit("c".to_string()), None);
    assert_eq!(task.request_id(), first);
    assert_eq!(task.input().map(String::as_str), Some("a"));

    assert!(task.complete(first, Ok("A".to_string())));
    assert_eq!(task.output().map(String::as_str), Some("A"));
    // The rejected submissions never produced a call to complete.
    assert!(!task.complete(first + 1, Ok("B".to_string())));
    assert_eq!(task.output().map(String::as_str), Some("A"));
}

#[test]
fn out_of_order_completion_keeps_latest_result() {
    init_logging();
    let mut task = task();
    let a = task.submit("a".to_string()).unwrap();
    // Superseding A: logical cancel via reset, then B.
    task.reset();
    let b = task.submit("b".to_string()).unwrap();
    assert!(b > a);

    // B resolves before A.
    assert!(task.complete(b, Ok("from b".to_string())));
    assert!(!task.complete(a, Ok("from a".to_string())));

    assert_eq!(task.status(), TaskStatus::Succeeded);
    assert_eq!(task.output().map(String::as_str), Some("from b"));
    assert_eq!(task.input().map(String::as_str), Some("b"));
}

#[test]
fn stale_failure_does_not_clobber_pending_call() {
    init_logging();
    let mut task = task();
    let a = task.submit("a".to_string()).unwrap();
    task.reset();
    let b = task.submit("b".to_string()).unwrap();

    assert!(!task.complete(a, Err(TaskError::transport("connection reset"))));
    assert_eq!(task.status(), TaskStatus::Pending);
    assert!(task.error().is_none());

    assert!(task.complete(b, Err(TaskError::service("bad url"))));
    assert_eq!(task.error(), Some(&TaskError::service("bad url")));
}

#[test]
fn failure_is_terminal_for_submission_only() {
    let mut task = task();
    let id = task.submit("a".to_string()).unwrap();
    task.complete(id, Err(TaskError::transport("unreachable")));
    assert_eq!(task.status(), TaskStatus::Failed);

    let retry = task.submit("a".to_string()).unwrap();
    assert_eq!(task.status(), TaskStatus::Pending);
    assert!(task.error().is_none());
    assert!(task.complete(retry, Ok("ok".to_string())));
    assert_eq!(task.status(), TaskStatus::Succeeded);
}

#[test]
fn resubmit_exposes_previous_output_while_pending() {
    let mut task = task();
    let id = task.submit("a".to_string()).unwrap();
    task.complete(id, Ok("first".to_string()));

    task.submit("a".to_string()).unwrap();
    assert_eq!(
        task.state(),
        &TaskState::Pending {
            previous: Some("first".to_string())
        }
    );
    assert!(task.output().is_none());
}

#[test]
fn reset_clears_everything() {
    let mut task = task();
    let id = task.submit("a".to_string()).unwrap();
    task.complete(id, Ok("done".to_string()));
    task.reset();

    assert_eq!(task.status(), TaskStatus::Idle);
    assert!(task.input().is_none());
    assert!(task.output().is_none());
    assert!(task.previous_output().is_none());
}

#[test]
fn user_messages_follow_error_kind() {
    assert_eq!(
        TaskError::transport("dns failure").user_message(),
        "Network error"
    );
    assert_eq!(TaskError::service("No URL provided").user_message(), "No URL provided");
    assert_eq!(TaskError::service("  ").user_message(), "Unknown error");
    let precondition = TaskError::PreconditionFailed {
        operation: "summarize",
        prerequisite: "transcribe",
    };
    assert_eq!(
        precondition.user_message(),
        "summarize requires transcribe to succeed first"
    );
}
