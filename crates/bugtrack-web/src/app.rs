// File: src/app.rs
// Purpose: Application bootstrap. Builds everything from an immutable config.

use std::collections::HashMap;

use anyhow::{Context, Result};
use bugtrack_router::RouteTable;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::pages::{route_table, Page};
use crate::theme::ThemePalette;

/// Outcome of navigating to a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub page: Page,
    pub route_name: String,
    pub params: HashMap<String, String>,
}

/// Bootstrapped application. Immutable once built.
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    routes: RouteTable<Page>,
}

impl App {
    /// Validates the config and builds the route table
    pub fn bootstrap(config: AppConfig) -> Result<Self> {
        config
            .theme
            .validate()
            .context("Invalid theme configuration")?;

        let routes = route_table().context("Failed to build route table")?;

        info!(
            app = %config.app.name,
            routes = routes.len(),
            theme = %config.theme.default_theme,
            "application bootstrapped"
        );

        Ok(Self { config, routes })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable<Page> {
        &self.routes
    }

    /// Active theme palette
    pub fn theme(&self) -> &ThemePalette {
        // bootstrap() rejected configs whose default theme is missing
        &self.config.theme.themes[&self.config.theme.default_theme]
    }

    /// Resolves a browser path, stripping `base_url` first when present
    pub fn navigate(&self, path: &str) -> Navigation {
        let local = self.strip_base(path);
        let route_match = self.routes.resolve(local);
        debug!(path, page = %route_match.page(), "navigate");

        Navigation {
            page: *route_match.page(),
            route_name: route_match.name().to_string(),
            params: route_match.params,
        }
    }

    /// Link to a page, prefixed with `base_url`
    pub fn href(&self, page: Page) -> String {
        let path = self
            .routes
            .url_for(page.route_name(), &HashMap::new())
            .unwrap_or_else(|| "/".to_string());
        self.with_base(&path)
    }

    fn base(&self) -> &str {
        self.config.app.base_url.trim_end_matches('/')
    }

    fn with_base(&self, path: &str) -> String {
        let base = self.base();
        if base.is_empty() {
            path.to_string()
        } else if path == "/" {
            format!("{}/", base)
        } else {
            format!("{}{}", base, path)
        }
    }

    fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        let base = self.base();
        if base.is_empty() {
            return path;
        }
        match path.strip_prefix(base) {
            Some(rest) if rest.is_empty() || rest.starts_with(['/', '?', '#']) => rest,
            _ => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app_with_base(base_url: &str) -> App {
        let mut config = AppConfig::default();
        config.app.base_url = base_url.to_string();
        App::bootstrap(config).unwrap()
    }

    #[test]
    fn test_bootstrap_defaults() {
        let app = App::bootstrap(AppConfig::default()).unwrap();
        assert_eq!(app.routes().len(), 5);
        assert_eq!(app.theme(), &ThemePalette::light());
    }

    #[test]
    fn test_bootstrap_rejects_unknown_theme() {
        let mut config = AppConfig::default();
        config.theme.default_theme = "nope".to_string();
        let err = App::bootstrap(config).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid theme configuration"));
    }

    #[test]
    fn test_navigate() {
        let app = app_with_base("/");
        assert_eq!(app.navigate("/login").page, Page::Login);
        assert_eq!(app.navigate("/register/").page, Page::Register);

        let missing = app.navigate("/bugs/12");
        assert_eq!(missing.page, Page::NotFound);
        assert_eq!(missing.route_name, "not-found");
        assert_eq!(missing.params.get("path").map(String::as_str), Some("bugs/12"));
    }

    #[test]
    fn test_href() {
        let app = app_with_base("/");
        assert_eq!(app.href(Page::Home), "/");
        assert_eq!(app.href(Page::ForgotPassword), "/forgot-password");
    }

    #[test]
    fn test_base_url() {
        let app = app_with_base("/tracker/");
        assert_eq!(app.href(Page::Login), "/tracker/login");
        assert_eq!(app.href(Page::Home), "/tracker/");

        assert_eq!(app.navigate("/tracker/login").page, Page::Login);
        assert_eq!(app.navigate("/tracker").page, Page::Home);
        assert_eq!(app.navigate("/trackerx/login").page, Page::NotFound);
    }
}
