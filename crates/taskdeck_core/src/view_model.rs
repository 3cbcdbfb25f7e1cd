use crate::{Post, RequestTask, ScrapeParams, TaskState};

/// Placeholder shown in the transcript box before any result.
pub const TRANSCRIPT_PLACEHOLDER: &str = "The transcription will appear here.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub navigation: NavigationView,
    pub transcriber: TranscriberView,
    pub scraper: ScraperView,
    pub dirty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureView {
    Transcriber,
    Scraper,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationView {
    pub location: String,
    pub title: String,
    pub menu: Vec<MenuItemView>,
    pub active_view: Option<FeatureView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItemView {
    pub route_path: String,
    pub label: String,
    pub icon_token: String,
    pub active: bool,
}

/// Render-ready projection of one task.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TaskView<T> {
    #[default]
    Idle,
    /// `previous` is the stale result a view may keep visible while refreshing.
    Pending { previous: Option<T> },
    Ready(T),
    Error(String),
}

impl<T: Clone> TaskView<T> {
    pub(crate) fn of<I>(task: &RequestTask<I, T>) -> Self {
        match task.state() {
            TaskState::Idle => TaskView::Idle,
            TaskState::Pending { previous } => TaskView::Pending {
                previous: previous.clone(),
            },
            TaskState::Succeeded(output) => TaskView::Ready(output.clone()),
            TaskState::Failed(err) => TaskView::Error(err.user_message()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranscriberView {
    pub url_input: String,
    pub transcript: TaskView<String>,
    pub summary: TaskView<String>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    /// Summarize is only offered once a transcript is available.
    pub summarize_available: bool,
    pub summarize_label: &'static str,
    /// Last rejected intent, such as summarizing without a transcript.
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScraperView {
    pub params: ScrapeParams,
    pub scrape_label: &'static str,
    pub scrape_enabled: bool,
    pub content: ScraperContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScraperContent {
    Loading,
    #[default]
    Empty,
    Posts(Vec<Post>),
    Error(String),
}
