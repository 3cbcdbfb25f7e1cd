use deck_logging::deck_debug;

use crate::view_model::{FeatureView, MenuItemView, NavigationView};
use crate::{resolve, ActiveRouteResolution, DashboardConfig, MenuEntry};

/// Tracks the current location and derives title and highlighted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationController {
    location: String,
    default_route: String,
    entries: &'static [MenuEntry],
}

impl NavigationController {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            location: config.default_route.clone(),
            default_route: config.default_route.clone(),
            entries: config.menu,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn resolution(&self) -> ActiveRouteResolution<'static> {
        resolve(&self.location, self.entries)
    }

    /// Moves to `path`. The root and locations matching no entry redirect
    /// to the default route. Returns whether the location changed.
    pub fn navigate(&mut self, path: &str) -> bool {
        let path = path.trim();
        let target = if path == "/" || resolve(path, self.entries).matched.is_none() {
            deck_debug!("redirecting {:?} to {}", path, self.default_route);
            self.default_route.as_str()
        } else {
            path
        };
        if target == self.location {
            return false;
        }
        self.location = target.to_string();
        true
    }

    pub fn active_view(&self) -> Option<FeatureView> {
        self.resolution()
            .matched
            .and_then(|entry| feature_for(entry.route_path))
    }

    pub fn view(&self) -> NavigationView {
        let resolution = self.resolution();
        let menu = self
            .entries
            .iter()
            .map(|entry| MenuItemView {
                route_path: entry.route_path.to_string(),
                label: entry.label.to_string(),
                icon_token: entry.icon_token.to_string(),
                active: resolution.matched == Some(entry),
            })
            .collect();
        NavigationView {
            location: self.location.clone(),
            title: resolution.title.to_string(),
            menu,
            active_view: self.active_view(),
        }
    }
}

fn feature_for(route_path: &str) -> Option<FeatureView> {
    match route_path {
        "/transcriber" => Some(FeatureView::Transcriber),
        "/reddit-scraper" => Some(FeatureView::Scraper),
        _ => None,
    }
}
