//! Theme configuration (`[theme_config]`).
//!
//! These values are passed through to the client unchanged, apart from the
//! navbar targets which take part in broken link detection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, require_non_empty};

/// Theme configuration.
///
/// Read with the snake_case keys of `docnav.toml`, written camelCase like the
/// rest of the generated client data.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct ThemeConfig {
    /// Light/dark mode behavior.
    pub color_mode: ColorModeConfig,
    /// Top navigation bar.
    pub navbar: NavbarConfig,
    /// Page footer.
    pub footer: FooterConfig,
    /// Code block highlighting.
    pub prism: PrismConfig,
}

impl ThemeConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (i, item) in self.navbar.items.iter().enumerate() {
            let field = format!("theme_config.navbar.items[{i}]");
            require_non_empty(&item.label, &format!("{field}.label"))?;
            match (&item.to, &item.href) {
                (Some(to), None) => require_non_empty(to, &format!("{field}.to"))?,
                (None, Some(href)) => require_non_empty(href, &format!("{field}.href"))?,
                _ => {
                    return Err(ConfigError::Validation(format!(
                        "{field} must set exactly one of 'to' or 'href'"
                    )));
                }
            }
        }

        if let Some(logo) = &self.navbar.logo {
            require_non_empty(&logo.src, "theme_config.navbar.logo.src")?;
        }

        if self.prism.additional_languages.iter().any(String::is_empty) {
            return Err(ConfigError::Validation(
                "theme_config.prism.additional_languages cannot contain empty tags".to_owned(),
            ));
        }

        Ok(())
    }
}

/// Color scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Color mode configuration.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct ColorModeConfig {
    /// Initial color mode.
    pub default_mode: ColorMode,
    /// Hide the light/dark switch.
    pub disable_switch: bool,
    /// Follow the system preference instead of `default_mode`.
    pub respect_prefers_color_scheme: bool,
}

impl Default for ColorModeConfig {
    fn default() -> Self {
        Self {
            default_mode: ColorMode::Light,
            disable_switch: false,
            respect_prefers_color_scheme: false,
        }
    }
}

/// Navbar configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct NavbarConfig {
    /// Title shown next to the logo.
    pub title: Option<String>,
    /// Hide the navbar while scrolling down.
    pub hide_on_scroll: bool,
    /// Navbar logo.
    pub logo: Option<LogoConfig>,
    /// Ordered navbar links.
    pub items: Vec<NavbarItem>,
}

/// Navbar logo.
#[derive(Debug, Deserialize, Serialize)]
pub struct LogoConfig {
    /// Alternative text.
    #[serde(default)]
    pub alt: Option<String>,
    /// Image path.
    pub src: String,
    /// Link target when the logo is clicked.
    #[serde(default)]
    pub href: Option<String>,
}

/// Side of the navbar an item is placed on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// Navbar link.
///
/// `to` is a site path checked against generated routes; `href` is an
/// external URL and is never checked.
#[derive(Debug, Deserialize, Serialize)]
pub struct NavbarItem {
    /// Internal site path (without `base_url`).
    #[serde(default)]
    pub to: Option<String>,
    /// External URL.
    #[serde(default)]
    pub href: Option<String>,
    /// Display label.
    pub label: String,
    /// Placement.
    #[serde(default)]
    pub position: NavbarPosition,
}

/// Footer style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// Footer configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Footer color style.
    pub style: FooterStyle,
    /// Copyright template; `{year}` is substituted by the client.
    pub copyright: Option<String>,
}

/// Syntax highlighting configuration.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, rename_all(serialize = "camelCase"))]
pub struct PrismConfig {
    /// Light mode theme name.
    pub theme: String,
    /// Dark mode theme name.
    pub dark_theme: Option<String>,
    /// Extra language tags to load. Duplicates collapse.
    pub additional_languages: BTreeSet<String>,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".to_owned(),
            dark_theme: None,
            additional_languages: BTreeSet::new(),
        }
    }
}
