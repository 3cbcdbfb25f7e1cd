use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use deck_logging::deck_info;
use serde::{Deserialize, Serialize};
use taskdeck_core::{resolve, DashboardConfig, ScrapeParams};
use taskdeck_engine::BackendSettings;

/// On-disk configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub backend_url: String,
    pub connect_timeout_secs: u64,
    /// No request timeout unless set.
    pub request_timeout_secs: Option<u64>,
    pub max_response_bytes: u64,
    pub default_route: String,
    pub post_limit: u32,
    pub comment_limit_per_post: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let backend = BackendSettings::default();
        let dashboard = DashboardConfig::default();
        Self {
            backend_url: backend.base_url,
            connect_timeout_secs: backend.connect_timeout.as_secs(),
            request_timeout_secs: backend.request_timeout.map(|timeout| timeout.as_secs()),
            max_response_bytes: backend.max_response_bytes,
            default_route: dashboard.default_route,
            post_limit: dashboard.scrape_limits.post_limit,
            comment_limit_per_post: dashboard.scrape_limits.comment_limit_per_post,
        }
    }
}

impl AppConfig {
    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            base_url: self.backend_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_response_bytes: self.max_response_bytes,
        }
    }

    /// The start location must belong to a menu entry, since the root
    /// redirects there.
    pub fn validate(&self) -> anyhow::Result<()> {
        let menu = DashboardConfig::default().menu;
        anyhow::ensure!(
            resolve(&self.default_route, menu).matched.is_some(),
            "default_route {:?} matches no menu entry (expected one of: {})",
            self.default_route,
            menu.iter()
                .map(|entry| entry.route_path)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(())
    }

    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            default_route: self.default_route.clone(),
            scrape_limits: ScrapeParams {
                post_limit: self.post_limit,
                comment_limit_per_post: self.comment_limit_per_post,
            },
            ..DashboardConfig::default()
        }
    }
}

/// Reads the config at `path`, falling back to defaults when it is missing.
pub fn load(path: &Path) -> anyhow::Result<AppConfig> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            deck_info!("No config at {:?}; using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read config {}", path.display()))
        }
    };
    let config: AppConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    deck_info!("Loaded config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("absent.ron")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.backend_url, "http://127.0.0.1:5000");
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"(backend_url: "http://backend:8080", post_limit: 25, request_timeout_secs: Some(600))"#
        )
        .unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.backend_url, "http://backend:8080");
        assert_eq!(config.post_limit, 25);
        assert_eq!(config.comment_limit_per_post, 10);

        let settings = config.backend_settings();
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(600)));
        let dashboard = config.dashboard_config();
        assert_eq!(dashboard.scrape_limits.post_limit, 25);
        assert_eq!(dashboard.default_route, "/transcriber");
    }

    #[test]
    fn default_route_outside_the_menu_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"(default_route: "/foo")"#).unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("matches no menu entry"));
    }

    #[test]
    fn default_route_on_the_scraper_is_accepted() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"(default_route: "/reddit-scraper")"#).unwrap();

        let config = load(file.path()).unwrap();
        assert_eq!(config.dashboard_config().default_route, "/reddit-scraper");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "(post_limit: \"many\")").unwrap();
        assert!(load(file.path()).is_err());
    }
}
