use crate::view_model::{AppViewModel, FeatureView};
use crate::{DashboardConfig, NavigationController, ScraperController, TranscriberController};

/// Whole-session state. Each controller exclusively owns its tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    navigation: NavigationController,
    transcriber: TranscriberController,
    scraper: ScraperController,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(&DashboardConfig::default())
    }

    pub fn with_config(config: &DashboardConfig) -> Self {
        Self {
            navigation: NavigationController::new(config),
            transcriber: TranscriberController::new(),
            scraper: ScraperController::new(config.scrape_limits),
            dirty: false,
        }
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn transcriber(&self) -> &TranscriberController {
        &self.transcriber
    }

    pub fn scraper(&self) -> &ScraperController {
        &self.scraper
    }

    pub(crate) fn navigation_mut(&mut self) -> &mut NavigationController {
        &mut self.navigation
    }

    pub(crate) fn transcriber_mut(&mut self) -> &mut TranscriberController {
        &mut self.transcriber
    }

    pub(crate) fn scraper_mut(&mut self) -> &mut ScraperController {
        &mut self.scraper
    }

    /// Whether any task still waits for a completion.
    pub fn has_pending(&self) -> bool {
        let chain = self.transcriber.chain();
        chain.primary().is_pending()
            || chain.secondary().is_pending()
            || self.scraper.batch().task().is_pending()
    }

    pub fn active_view(&self) -> Option<FeatureView> {
        self.navigation.active_view()
    }

    /// Resets the controller behind a view that is no longer shown.
    pub(crate) fn unmount(&mut self, view: FeatureView) {
        match view {
            FeatureView::Transcriber => self.transcriber.clear(),
            FeatureView::Scraper => self.scraper.clear(),
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            navigation: self.navigation.view(),
            transcriber: self.transcriber.view(),
            scraper: self.scraper.view(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
