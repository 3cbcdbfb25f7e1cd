use crate::{RequestId, ScrapeParams};

/// Outbound calls requested by `update`. Each completion must come back as a
/// `Msg` carrying the same `request_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Transcribe { request_id: RequestId, url: String },
    Summarize { request_id: RequestId, text: String },
    Scrape {
        request_id: RequestId,
        params: ScrapeParams,
    },
}
