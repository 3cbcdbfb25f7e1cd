use crate::{RequestId, ScrapeParams, TaskError, UpstreamPost};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the video URL field.
    UrlInputChanged(String),
    /// User submitted the transcriber form (also the retry action).
    TranscribeSubmitted,
    /// User clicked Summarize / Summarize Again.
    SummarizeClicked,
    /// User cleared the transcriber view.
    TranscriberCleared,
    /// Backend answered a transcription request.
    TranscriptionDone {
        request_id: RequestId,
        result: Result<String, TaskError>,
    },
    /// Backend answered a summarize request.
    SummaryDone {
        request_id: RequestId,
        result: Result<String, TaskError>,
    },
    /// User changed the scrape limits.
    ScrapeLimitsChanged(ScrapeParams),
    /// User clicked Scrape (also the retry action).
    ScrapeClicked,
    /// User cleared the scraper view.
    ScraperCleared,
    /// Backend answered a scrape request.
    ScrapeDone {
        request_id: RequestId,
        result: Result<Vec<UpstreamPost>, TaskError>,
    },
    /// Location changed.
    Navigated(String),
}
