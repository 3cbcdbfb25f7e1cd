use crate::view_model::{ScraperContent, ScraperView};
use crate::{
    BatchFetchTask, BatchViewState, Effect, RequestId, ScrapeParams, TaskError, UpstreamPost,
};

/// Drives the batch scrape of posts with nested comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperController {
    defaults: ScrapeParams,
    params: ScrapeParams,
    batch: BatchFetchTask,
}

impl ScraperController {
    pub fn new(defaults: ScrapeParams) -> Self {
        Self {
            defaults,
            params: defaults,
            batch: BatchFetchTask::new("scrape"),
        }
    }

    pub fn batch(&self) -> &BatchFetchTask {
        &self.batch
    }

    pub fn params(&self) -> ScrapeParams {
        self.params
    }

    pub fn set_params(&mut self, params: ScrapeParams) -> bool {
        if self.params == params {
            return false;
        }
        self.params = params;
        true
    }

    pub fn scrape(&mut self) -> Option<Effect> {
        let params = self.params;
        let request_id = self.batch.submit(params)?;
        Some(Effect::Scrape { request_id, params })
    }

    pub fn scrape_done(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<UpstreamPost>, TaskError>,
    ) -> bool {
        self.batch.complete(request_id, result)
    }

    pub fn clear(&mut self) {
        self.batch.reset();
        self.params = self.defaults;
    }

    pub fn view(&self) -> ScraperView {
        let content = match self.batch.view_state() {
            BatchViewState::Pending => ScraperContent::Loading,
            BatchViewState::Empty => ScraperContent::Empty,
            BatchViewState::Populated(posts) => ScraperContent::Posts(posts.to_vec()),
            BatchViewState::Errored(err) => ScraperContent::Error(err.user_message()),
        };
        let loading = content == ScraperContent::Loading;
        ScraperView {
            params: self.params,
            scrape_label: if loading { "Scraping..." } else { "Scrape Reddit" },
            scrape_enabled: !loading,
            content,
        }
    }
}
