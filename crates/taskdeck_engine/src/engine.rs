use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use deck_logging::{deck_debug, deck_warn};
use thiserror::Error;

use crate::backend::{Backend, BackendSettings, ReqwestBackend};
use crate::{BackendError, EngineEvent, RequestId, ScrapeRequest};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("backend setup failed: {0}")]
    Backend(#[from] BackendError),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
}

enum EngineCommand {
    Transcribe { request_id: RequestId, url: String },
    Summarize { request_id: RequestId, text: String },
    Scrape {
        request_id: RequestId,
        request: ScrapeRequest,
    },
}

/// Runs backend calls on a background tokio runtime.
///
/// Calls run concurrently and report back in completion order, which may
/// differ from submission order. Calls are never aborted; dropping the
/// handle stops the runtime once queued commands are drained.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: BackendSettings) -> Result<Self, EngineError> {
        let backend = ReqwestBackend::new(settings)?;
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(backend: Arc<dyn Backend>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .worker_threads(2)
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(backend.as_ref(), command).await;
                    if event_tx.send(event).is_err() {
                        deck_debug!("engine event dropped: receiver gone");
                    }
                });
            }
            deck_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn transcribe(&self, request_id: RequestId, url: impl Into<String>) {
        self.send(EngineCommand::Transcribe {
            request_id,
            url: url.into(),
        });
    }

    pub fn summarize(&self, request_id: RequestId, text: impl Into<String>) {
        self.send(EngineCommand::Summarize {
            request_id,
            text: text.into(),
        });
    }

    pub fn scrape(&self, request_id: RequestId, request: ScrapeRequest) {
        self.send(EngineCommand::Scrape {
            request_id,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            deck_warn!("engine thread is gone; command dropped");
        }
    }
}

async fn handle_command(backend: &dyn Backend, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Transcribe { request_id, url } => EngineEvent::TranscribeCompleted {
            request_id,
            result: backend.transcribe(&url).await,
        },
        EngineCommand::Summarize { request_id, text } => EngineEvent::SummarizeCompleted {
            request_id,
            result: backend.summarize(&text).await,
        },
        EngineCommand::Scrape {
            request_id,
            request,
        } => EngineEvent::ScrapeCompleted {
            request_id,
            result: backend.scrape(&request).await,
        },
    }
}
