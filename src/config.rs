//! Site configuration module.
//!
//! Handles loading and validating `config.toml`. Configuration is
//! optional: the site builds with stock defaults when no file exists, and
//! a file needs only the values it wants to override.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "ExpressKit"                 # Site name (browser title, header brand)
//! tagline = "The Express.js Toolkit for Developers"
//! repository = "https://github.com/expresskit/expresskit"
//!
//! [colors]
//! background = "#0f172a"    # Page background
//! surface = "#1e293b"       # Cards, code blocks
//! border = "#334155"        # Card and section borders
//! text = "#f8fafc"          # Headings, primary text
//! text_muted = "#cbd5e1"    # Body text, footer
//! accent = "#38bdf8"        # Links, section headings, rules
//! accent_hover = "#7dd3fc"  # Link hover state
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity: title, tagline, repository link.
    pub site: SiteInfo,
    /// Color theme injected into the generated CSS.
    pub colors: ColorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    pub tagline: String,
    pub repository: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "ExpressKit".to_string(),
            tagline: "The Express.js Toolkit for Developers".to_string(),
            repository: "https://github.com/expresskit/expresskit".to_string(),
        }
    }
}

/// Theme colors. Defaults reproduce the stock dark slate + sky palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: String,
    pub surface: String,
    pub border: String,
    pub text: String,
    pub text_muted: String,
    pub accent: String,
    pub accent_hover: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#0f172a".to_string(),
            surface: "#1e293b".to_string(),
            border: "#334155".to_string(),
            text: "#f8fafc".to_string(),
            text_muted: "#cbd5e1".to_string(),
            accent: "#38bdf8".to_string(),
            accent_hover: "#7dd3fc".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load config from a file, or return stock defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let config: SiteConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        for (name, value) in [
            ("colors.background", &self.colors.background),
            ("colors.surface", &self.colors.surface),
            ("colors.border", &self.colors.border),
            ("colors.text", &self.colors.text),
            ("colors.text_muted", &self.colors.text_muted),
            ("colors.accent", &self.colors.accent),
            ("colors.accent_hover", &self.colors.accent_hover),
        ] {
            if !is_hex_color(value) {
                return Err(ConfigError::Validation(format!(
                    "{name} must be a hex color like #0f172a, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Generate CSS custom properties from the configured colors.
///
/// Prepended to the embedded stylesheet, which references these variables.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n  --color-background: {};\n  --color-surface: {};\n  --color-border: {};\n  --color-text: {};\n  --color-text-muted: {};\n  --color-accent: {};\n  --color-accent-hover: {};\n}}",
        colors.background,
        colors.surface,
        colors.border,
        colors.text,
        colors.text_muted,
        colors.accent,
        colors.accent_hover,
    )
}

/// Stock `config.toml` with all options documented, for `gen-config`.
pub fn stock_config_toml() -> String {
    r##"# ExpressKit site configuration.
# All options are optional - the values below are the defaults.

[site]
title = "ExpressKit"
tagline = "The Express.js Toolkit for Developers"
repository = "https://github.com/expresskit/expresskit"

[colors]
background = "#0f172a"    # Page background
surface = "#1e293b"       # Cards, code blocks
border = "#334155"        # Card and section borders
text = "#f8fafc"          # Headings, primary text
text_muted = "#cbd5e1"    # Body text, footer
accent = "#38bdf8"        # Links, section headings, rules
accent_hover = "#7dd3fc"  # Link hover state
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn stock_config_round_trips() {
        let config: SiteConfig = toml::from_str(&stock_config_toml()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.site.title, "ExpressKit");
        assert_eq!(config.colors.accent, "#38bdf8");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: SiteConfig = toml::from_str("[colors]\naccent = \"#fff\"\n").unwrap();
        assert_eq!(config.colors.accent, "#fff");
        assert_eq!(config.colors.background, "#0f172a");
        assert_eq!(config.site.title, "ExpressKit");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = toml::from_str::<SiteConfig>("[colors]\naccnet = \"#fff\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn malformed_color_fails_validation() {
        let config: SiteConfig = toml::from_str("[colors]\naccent = \"sky\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("colors.accent"));
    }

    #[test]
    fn empty_title_fails_validation() {
        let config: SiteConfig = toml::from_str("[site]\ntitle = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn color_css_contains_variables() {
        let css = generate_color_css(&ColorConfig::default());
        assert!(css.contains("--color-background: #0f172a"));
        assert!(css.contains("--color-accent: #38bdf8"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let config = SiteConfig::load(Path::new("/nonexistent/config.toml")).unwrap();
        assert_eq!(config.site.title, "ExpressKit");
    }
}
