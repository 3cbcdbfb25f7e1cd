use std::time::Duration;

use deck_logging::deck_debug;
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::types::{SummarizeRequest, TranscribeRequest};
use crate::{BackendError, FailureKind, PostPayload, ScrapeRequest};

pub const TRANSCRIBE_PATH: &str = "api/transcribe";
pub const SUMMARIZE_PATH: &str = "api/chatgpt_keypoints";
pub const SCRAPE_PATH: &str = "api/scrape_reddit";

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Transcription of long videos takes minutes, so none by default.
    pub request_timeout: Option<Duration>,
    pub max_response_bytes: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_response_bytes: 8 * 1024 * 1024,
        }
    }
}

/// The opaque service behind the dashboard.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn transcribe(&self, url: &str) -> Result<String, BackendError>;

    async fn summarize(&self, text: &str) -> Result<String, BackendError>;

    async fn scrape(&self, request: &ScrapeRequest) -> Result<Vec<PostPayload>, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: BackendSettings,
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let mut base_url = Url::parse(&settings.base_url)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))?;
        // Keep any path prefix when joining endpoint paths.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            base_url,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(StatusCode, Vec<u8>), BackendError> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let payload = serde_json::to_vec(body)
            .map_err(|err| BackendError::new(FailureKind::Decode, err.to_string()))?;

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let max_bytes = self.settings.max_response_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, content_len));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        deck_debug!("POST {} -> {} ({} bytes)", url, status, bytes.len());
        Ok((status, bytes))
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn transcribe(&self, url: &str) -> Result<String, BackendError> {
        let (status, body) = self
            .post_json(TRANSCRIBE_PATH, &TranscribeRequest { url })
            .await?;
        text_reply(status, &body, "transcription")
    }

    async fn summarize(&self, text: &str) -> Result<String, BackendError> {
        let (status, body) = self
            .post_json(SUMMARIZE_PATH, &SummarizeRequest { text })
            .await?;
        text_reply(status, &body, "keypoints")
    }

    async fn scrape(&self, request: &ScrapeRequest) -> Result<Vec<PostPayload>, BackendError> {
        let (status, body) = self.post_json(SCRAPE_PATH, request).await?;
        posts_reply(status, &body)
    }
}

/// Interprets `{ <field>: string } | { error: string }`.
fn text_reply(status: StatusCode, body: &[u8], field: &str) -> Result<String, BackendError> {
    let parsed: Option<Value> = serde_json::from_slice(body).ok();

    if status.is_success() {
        // Empty text counts as absent.
        if let Some(text) = string_field(parsed.as_ref(), field).filter(|text| !text.is_empty()) {
            return Ok(text.to_string());
        }
    }
    if let Some(message) = string_field(parsed.as_ref(), "error") {
        return Err(BackendError::new(FailureKind::Service, message));
    }
    if !status.is_success() {
        return Err(http_status(status));
    }
    match parsed {
        // Well-formed but says nothing; shown as an unknown service error.
        Some(_) => Err(BackendError::new(FailureKind::Service, "")),
        None => Err(BackendError::new(
            FailureKind::Decode,
            "response body is not json",
        )),
    }
}

/// Interprets `[Post] | { message: string }`. Non-2xx is a failure even
/// when the body holds posts.
fn posts_reply(status: StatusCode, body: &[u8]) -> Result<Vec<PostPayload>, BackendError> {
    if status.is_success() {
        if let Ok(posts) = serde_json::from_slice::<Vec<PostPayload>>(body) {
            return Ok(posts);
        }
    }

    let parsed: Option<Value> = serde_json::from_slice(body).ok();
    let message = string_field(parsed.as_ref(), "message")
        .or_else(|| string_field(parsed.as_ref(), "error"));
    match message {
        Some(message) => Err(BackendError::new(FailureKind::Service, message)),
        None if !status.is_success() => Err(http_status(status)),
        None => Err(BackendError::new(
            FailureKind::Decode,
            "response is not a list of posts",
        )),
    }
}

fn string_field<'a>(value: Option<&'a Value>, key: &str) -> Option<&'a str> {
    value?.get(key)?.as_str()
}

fn http_status(status: StatusCode) -> BackendError {
    BackendError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
}

fn too_large(max_bytes: u64, actual: u64) -> BackendError {
    BackendError::new(
        FailureKind::TooLarge {
            max_bytes,
            actual: Some(actual),
        },
        "response too large",
    )
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::new(FailureKind::Timeout, err.to_string());
    }
    BackendError::new(FailureKind::Network, err.to_string())
}
