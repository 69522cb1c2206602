// File: src/theme.rs
// Purpose: Theme palettes handed to the UI library (data only, never rendered here)

use std::collections::BTreeMap;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Named colors of one theme, as `#RRGGBB`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemePalette {
    pub background: String,
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_lighten: Option<String>,
    pub secondary: String,
    pub error: String,
    pub info: String,
    pub success: String,
    pub warning: String,
}

impl ThemePalette {
    /// Built-in light palette
    pub fn light() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            primary: "#1867C0".to_string(),
            primary_lighten: None,
            secondary: "#48A9A6".to_string(),
            error: "#B00020".to_string(),
            info: "#2196F3".to_string(),
            success: "#4CAF50".to_string(),
            warning: "#FB8C00".to_string(),
        }
    }

    /// The app's custom dark palette
    pub fn custom_dark() -> Self {
        Self {
            background: "#161616".to_string(),
            primary: "#6200EE".to_string(),
            primary_lighten: Some("#8F7FF3".to_string()),
            secondary: "#03DAC6".to_string(),
            error: "#B00020".to_string(),
            info: "#2196F3".to_string(),
            success: "#4CAF50".to_string(),
            warning: "#FB8C00".to_string(),
        }
    }

    fn colors(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("background", Some(self.background.as_str())),
            ("primary", Some(self.primary.as_str())),
            ("primary-lighten", self.primary_lighten.as_deref()),
            ("secondary", Some(self.secondary.as_str())),
            ("error", Some(self.error.as_str())),
            ("info", Some(self.info.as_str())),
            ("success", Some(self.success.as_str())),
            ("warning", Some(self.warning.as_str())),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Theme section of the app config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme")]
    pub default_theme: String,

    #[serde(default = "default_themes")]
    pub themes: BTreeMap<String, ThemePalette>,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_themes() -> BTreeMap<String, ThemePalette> {
    let mut themes = BTreeMap::new();
    themes.insert("light".to_string(), ThemePalette::light());
    themes.insert("custom-dark".to_string(), ThemePalette::custom_dark());
    themes
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
            themes: default_themes(),
        }
    }
}

impl ThemeConfig {
    /// Palette selected by `default_theme`
    pub fn active(&self) -> Option<&ThemePalette> {
        self.themes.get(&self.default_theme)
    }

    /// Rejects an unknown default theme and malformed colors
    pub fn validate(&self) -> Result<()> {
        if self.active().is_none() {
            bail!(
                "default theme '{}' is not defined (available: {})",
                self.default_theme,
                self.themes.keys().cloned().collect::<Vec<_>>().join(", ")
            );
        }

        for (theme, palette) in &self.themes {
            if let Some((name, value)) = palette.colors().find(|(_, v)| !is_hex_color(v)) {
                bail!("theme '{}': color '{}' = '{}' is not #RRGGBB", theme, name, value);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_light() {
        let config = ThemeConfig::default();
        assert_eq!(config.default_theme, "light");
        assert_eq!(config.active(), Some(&ThemePalette::light()));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_dark_palette() {
        let config = ThemeConfig::default();
        let dark = &config.themes["custom-dark"];
        assert_eq!(dark.background, "#161616");
        assert_eq!(dark.primary_lighten.as_deref(), Some("#8F7FF3"));
    }

    #[test]
    fn test_unknown_default_rejected() {
        let config = ThemeConfig {
            default_theme: "solarized".to_string(),
            ..ThemeConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("solarized"));
        assert!(err.contains("custom-dark"));
    }

    #[test]
    fn test_bad_color_rejected() {
        let mut config = ThemeConfig::default();
        config.themes.get_mut("light").unwrap().primary = "blue".to_string();
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("primary"));
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#6200EE"));
        assert!(is_hex_color("#abcdef"));
        assert!(!is_hex_color("6200EE"));
        assert!(!is_hex_color("#FFF"));
        assert!(!is_hex_color("#GGGGGG"));
    }
}
