use crate::{MenuEntry, ScrapeParams, MENU_ENTRIES};

/// Settings owned by the presentation layer and handed to the controllers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Where `/` and unknown locations redirect to.
    pub default_route: String,
    pub scrape_limits: ScrapeParams,
    pub menu: &'static [MenuEntry],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_route: "/transcriber".to_string(),
            scrape_limits: ScrapeParams::default(),
            menu: MENU_ENTRIES,
        }
    }
}
