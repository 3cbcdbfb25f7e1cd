//! Taskdeck core: pure state machine for the dashboard's request tasks,
//! view controllers and view-model helpers.
mod batch;
mod chain;
mod config;
mod effect;
mod error;
mod msg;
mod navigation;
mod route;
mod scraper;
mod state;
mod task;
mod transcriber;
mod update;
mod view_model;

pub use batch::{
    normalize_posts, normalize_posts_with, BatchFetchTask, BatchViewState, Comment, Post,
    ScrapeParams, UpstreamComment, UpstreamPost,
};
pub use chain::DependentTaskChain;
pub use config::DashboardConfig;
pub use effect::Effect;
pub use error::{TaskError, NETWORK_ERROR_MESSAGE, UNKNOWN_ERROR_MESSAGE};
pub use msg::Msg;
pub use navigation::NavigationController;
pub use route::{resolve, ActiveRouteResolution, MenuEntry, FALLBACK_TITLE, MENU_ENTRIES};
pub use scraper::ScraperController;
pub use state::AppState;
pub use task::{RequestId, RequestTask, TaskState, TaskStatus};
pub use transcriber::{TranscriberController, TranscriptionChain};
pub use update::update;
pub use view_model::{
    AppViewModel, FeatureView, MenuItemView, NavigationView, ScraperContent, ScraperView,
    TaskView, TranscriberView, TRANSCRIPT_PLACEHOLDER,
};
