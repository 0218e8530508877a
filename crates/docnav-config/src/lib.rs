//! Site configuration for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `url`
//! - `base_url`
//! - `organization_name`
//! - `project_name`
//! - `presets[].docs.edit_url`
//!
//! Deployments that differ only in `base_url` or `organization_name` share one
//! config file and select their values through expansion or CLI overrides.

mod expand;
mod theme;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use theme::{
    ColorMode, ColorModeConfig, FooterConfig, FooterStyle, LogoConfig, NavbarConfig, NavbarItem,
    NavbarPosition, PrismConfig, ThemeConfig,
};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override the site base URL.
    pub base_url: Option<String>,
    /// Override the broken link policy.
    pub on_broken_links: Option<ReportingPolicy>,
    /// Override the broken markdown link policy.
    pub on_broken_markdown_links: Option<ReportingPolicy>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Name of the only preset that provides documentation options.
const CLASSIC_PRESET: &str = "classic";

/// How a detected broken link is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPolicy {
    /// Abort the build.
    Throw,
    /// Log a warning and continue.
    Warn,
    /// Continue silently.
    Ignore,
}

impl fmt::Display for ReportingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Throw => "throw",
            Self::Warn => "warn",
            Self::Ignore => "ignore",
        };
        f.write_str(name)
    }
}

/// Error returned when a reporting policy name is not recognized.
#[derive(Debug, thiserror::Error)]
#[error("unknown reporting policy '{0}' (expected throw, warn or ignore)")]
pub struct ParsePolicyError(String);

impl FromStr for ReportingPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "throw" => Ok(Self::Throw),
            "warn" => Ok(Self::Warn),
            "ignore" => Ok(Self::Ignore),
            other => Err(ParsePolicyError(other.to_owned())),
        }
    }
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site title.
    pub title: String,
    /// Short description shown under the title.
    pub tagline: String,
    /// Deployment origin (scheme and host).
    pub url: String,
    /// Path prefix the site is served under. Starts and ends with `/`.
    pub base_url: String,
    /// Policy for sidebar and navbar targets with no page.
    pub on_broken_links: ReportingPolicy,
    /// Policy for in-content links to missing markdown files.
    pub on_broken_markdown_links: ReportingPolicy,
    /// Favicon path relative to the static directory.
    pub favicon: Option<String>,
    /// Hosting organization (e.g. GitHub user).
    pub organization_name: Option<String>,
    /// Hosting project (e.g. repository name).
    pub project_name: Option<String>,
    /// Whether framework debug routes are generated.
    pub debug: bool,
    /// Preset list; the classic preset carries the docs options.
    presets: Vec<PresetConfigRaw>,
    /// Theme configuration.
    pub theme_config: ThemeConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    #[allow(clippy::derivable_impls)]
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw preset entry as parsed from TOML.
#[derive(Debug, Deserialize)]
struct PresetConfigRaw {
    name: String,
    docs: Option<DocsConfigRaw>,
    #[serde(default)]
    blog: bool,
    #[serde(default)]
    theme: PresetThemeRaw,
}

/// Raw preset theme options (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PresetThemeRaw {
    custom_css: Option<String>,
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    sidebar_path: Option<String>,
    route_base_path: Option<String>,
    edit_url: Option<String>,
    home_sidebar: Option<String>,
    include: Option<Vec<String>>,
    exclude: Option<Vec<String>>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
    /// Sidebar definition file (YAML or JSON).
    pub sidebar_path: PathBuf,
    /// Project directory for docnav data (.docnav/).
    pub project_dir: PathBuf,
    /// URL prefix of docs routes below `base_url`. Starts with `/`.
    pub route_base_path: String,
    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
    /// Sidebar whose first document is the landing page (default: first sidebar).
    pub home_sidebar: Option<String>,
    /// Glob patterns selecting content files.
    pub include: Vec<String>,
    /// Glob patterns removing content files from the selection.
    pub exclude: Vec<String>,
    /// Whether the preset enables the blog.
    pub blog: bool,
    /// Custom stylesheet shipped with the theme.
    pub custom_css: Option<PathBuf>,
}

impl DocsConfig {
    /// Output directory for generated artifacts (.docnav/generated/).
    #[must_use]
    pub fn generated_dir(&self) -> PathBuf {
        self.project_dir.join("generated")
    }

    fn defaults(base: &Path) -> Self {
        Self {
            source_dir: base.join("docs"),
            sidebar_path: base.join("sidebars.yaml"),
            project_dir: base.join(".docnav"),
            route_base_path: "/".to_owned(),
            edit_url: None,
            home_sidebar: None,
            include: default_include(),
            exclude: Vec::new(),
            blog: false,
            custom_css: None,
        }
    }
}

fn default_include() -> Vec<String> {
    vec!["**/*.md".to_owned(), "**/*.mdx".to_owned()]
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`base_url`").
        field: String,
        /// Error message (e.g., "${`BASE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated after overrides are applied.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the effective configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML text, resolving paths against `config_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion, or validation fails.
    pub fn from_toml_str(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_paths(config_dir)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(base_url) = &settings.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(policy) = settings.on_broken_links {
            self.on_broken_links = policy;
        }
        if let Some(policy) = settings.on_broken_markdown_links {
            self.on_broken_markdown_links = policy;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            title: "Documentation".to_owned(),
            tagline: String::new(),
            url: "http://localhost".to_owned(),
            base_url: "/".to_owned(),
            on_broken_links: ReportingPolicy::Throw,
            on_broken_markdown_links: ReportingPolicy::Warn,
            favicon: None,
            organization_name: None,
            project_name: None,
            debug: true,
            presets: Vec::new(),
            theme_config: ThemeConfig::default(),
            docs_resolved: DocsConfig::defaults(base),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically by [`Config::load`] after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_docs()?;
        self.theme_config.validate()?;
        Ok(())
    }

    /// Validate site-level fields.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.url, "url")?;
        require_http_url(&self.url, "url")?;

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(format!(
                "base_url must start and end with '/' (got '{}')",
                self.base_url
            )));
        }

        Ok(())
    }

    /// Validate resolved docs configuration.
    fn validate_docs(&self) -> Result<(), ConfigError> {
        let docs = &self.docs_resolved;
        if !docs.route_base_path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "docs.route_base_path must start with '/' (got '{}')",
                docs.route_base_path
            )));
        }
        if docs.include.is_empty() {
            return Err(ConfigError::Validation(
                "docs.include cannot be empty".to_owned(),
            ));
        }
        if let Some(edit_url) = &docs.edit_url {
            require_http_url(edit_url, "docs.edit_url")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.url = expand::expand_env(&self.url, "url")?;
        self.base_url = expand::expand_env(&self.base_url, "base_url")?;

        if let Some(ref name) = self.organization_name {
            self.organization_name = Some(expand::expand_env(name, "organization_name")?);
        }
        if let Some(ref name) = self.project_name {
            self.project_name = Some(expand::expand_env(name, "project_name")?);
        }

        for preset in &mut self.presets {
            if let Some(ref mut docs) = preset.docs
                && let Some(ref url) = docs.edit_url
            {
                docs.edit_url = Some(expand::expand_env(url, "docs.edit_url")?);
            }
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// Validates that exactly one preset carries docs options. A config
    /// without presets gets the classic preset with default docs options.
    fn resolve_paths(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let mut docs_presets = self.presets.iter().filter(|p| p.docs.is_some());
        let preset = docs_presets.next();
        if docs_presets.next().is_some() {
            return Err(ConfigError::Validation(
                "only one preset may configure docs".to_owned(),
            ));
        }

        let Some(preset) = preset else {
            if self.presets.is_empty() {
                self.docs_resolved = DocsConfig::defaults(config_dir);
                return Ok(());
            }
            return Err(ConfigError::Validation(
                "presets must include a docs section".to_owned(),
            ));
        };

        if preset.name != CLASSIC_PRESET {
            return Err(ConfigError::Validation(format!(
                "unknown preset '{}' (only '{CLASSIC_PRESET}' provides docs)",
                preset.name
            )));
        }

        let docs = preset.docs.as_ref().unwrap_or(&EMPTY_DOCS);
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(docs.source_dir.as_deref(), "docs"),
            sidebar_path: resolve(docs.sidebar_path.as_deref(), "sidebars.yaml"),
            project_dir: config_dir.join(".docnav"),
            route_base_path: docs
                .route_base_path
                .clone()
                .unwrap_or_else(|| "/".to_owned()),
            edit_url: docs.edit_url.clone(),
            home_sidebar: docs.home_sidebar.clone(),
            include: docs.include.clone().unwrap_or_else(default_include),
            exclude: docs.exclude.clone().unwrap_or_default(),
            blog: preset.blog,
            custom_css: preset.theme.custom_css.as_deref().map(|p| config_dir.join(p)),
        };

        Ok(())
    }
}

static EMPTY_DOCS: DocsConfigRaw = DocsConfigRaw {
    source_dir: None,
    sidebar_path: None,
    route_base_path: None,
    edit_url: None,
    home_sidebar: None,
    include: None,
    exclude: None,
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DSA_CONFIG: &str = r#"
title = "DSA Notes"
tagline = "Clean & Clear Data Structures and Algorithms Notes"
url = "https://example.github.io"
base_url = "/"
on_broken_links = "throw"
on_broken_markdown_links = "warn"
favicon = "img/favicon.ico"
organization_name = "example"
project_name = "my-dsa-notes"

[[presets]]
name = "classic"
blog = false

[presets.docs]
sidebar_path = "sidebars.yaml"
route_base_path = "/"
edit_url = "https://github.com/example/my-dsa-notes/tree/main/"

[presets.theme]
custom_css = "src/css/custom.css"

[theme_config.color_mode]
default_mode = "dark"
disable_switch = false
respect_prefers_color_scheme = true

[theme_config.navbar]
title = "DSA Notes"
hide_on_scroll = false
logo = { alt = "Logo", src = "img/logo.png" }
items = [{ to = "/intro", label = "Home", position = "left" }]

[theme_config.footer]
style = "dark"
copyright = "Copyright © {year} DSA Notes"

[theme_config.prism]
theme = "github"
dark_theme = "dracula"
additional_languages = ["cpp", "java", "python", "bash"]
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.base_url, "/");
        assert_eq!(config.on_broken_links, ReportingPolicy::Throw);
        assert_eq!(config.on_broken_markdown_links, ReportingPolicy::Warn);
        assert!(config.debug);
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(
            config.docs_resolved.sidebar_path,
            PathBuf::from("/test/sidebars.yaml")
        );
        assert_eq!(
            config.docs_resolved.generated_dir(),
            PathBuf::from("/test/.docnav/generated")
        );
        assert_eq!(config.docs_resolved.route_base_path, "/");
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::from_toml_str("", Path::new("/project")).unwrap();
        assert_eq!(config.title, "Documentation");
        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/docs")
        );
        assert_eq!(config.docs_resolved.include, default_include());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml_str(DSA_CONFIG, Path::new("/project")).unwrap();

        assert_eq!(config.title, "DSA Notes");
        assert_eq!(config.url, "https://example.github.io");
        assert_eq!(config.favicon.as_deref(), Some("img/favicon.ico"));
        assert_eq!(config.organization_name.as_deref(), Some("example"));
        assert_eq!(config.project_name.as_deref(), Some("my-dsa-notes"));

        let docs = &config.docs_resolved;
        assert_eq!(docs.sidebar_path, PathBuf::from("/project/sidebars.yaml"));
        assert_eq!(
            docs.edit_url.as_deref(),
            Some("https://github.com/example/my-dsa-notes/tree/main/")
        );
        assert_eq!(
            docs.custom_css,
            Some(PathBuf::from("/project/src/css/custom.css"))
        );
        assert!(!docs.blog);

        let theme = &config.theme_config;
        assert_eq!(theme.color_mode.default_mode, ColorMode::Dark);
        assert!(theme.color_mode.respect_prefers_color_scheme);
        assert_eq!(theme.navbar.items.len(), 1);
        assert_eq!(theme.navbar.items[0].to.as_deref(), Some("/intro"));
        assert_eq!(theme.navbar.items[0].position, NavbarPosition::Left);
        assert_eq!(theme.footer.style, FooterStyle::Dark);
        assert_eq!(
            theme
                .prism
                .additional_languages
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>(),
            vec!["bash", "cpp", "java", "python"]
        );
    }

    #[test]
    fn test_parse_policy_values() {
        let toml = r#"
on_broken_links = "warn"
on_broken_markdown_links = "ignore"
"#;
        let config = Config::from_toml_str(toml, Path::new("/project")).unwrap();
        assert_eq!(config.on_broken_links, ReportingPolicy::Warn);
        assert_eq!(config.on_broken_markdown_links, ReportingPolicy::Ignore);
    }

    #[test]
    fn test_parse_unknown_policy_fails() {
        let result = Config::from_toml_str(r#"on_broken_links = "explode""#, Path::new("/p"));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("throw".parse::<ReportingPolicy>().unwrap(), ReportingPolicy::Throw);
        assert_eq!("warn".parse::<ReportingPolicy>().unwrap(), ReportingPolicy::Warn);
        assert_eq!("ignore".parse::<ReportingPolicy>().unwrap(), ReportingPolicy::Ignore);
        let err = "loud".parse::<ReportingPolicy>().unwrap_err();
        assert!(err.to_string().contains("loud"));
        assert_eq!(ReportingPolicy::Warn.to_string(), "warn");
    }

    #[test]
    fn test_resolve_paths_custom_docs() {
        let toml = r#"
[[presets]]
name = "classic"

[presets.docs]
source_dir = "content"
sidebar_path = "nav/sidebars.json"
route_base_path = "/docs"
home_sidebar = "dsa"
exclude = ["**/drafts/**"]
"#;
        let config = Config::from_toml_str(toml, Path::new("/project")).unwrap();
        let docs = &config.docs_resolved;
        assert_eq!(docs.source_dir, PathBuf::from("/project/content"));
        assert_eq!(docs.sidebar_path, PathBuf::from("/project/nav/sidebars.json"));
        assert_eq!(docs.project_dir, PathBuf::from("/project/.docnav"));
        assert_eq!(docs.route_base_path, "/docs");
        assert_eq!(docs.home_sidebar.as_deref(), Some("dsa"));
        assert_eq!(docs.exclude, vec!["**/drafts/**".to_owned()]);
    }

    #[test]
    fn test_preset_without_docs_section_fails() {
        let toml = r#"
[[presets]]
name = "classic"
blog = true
"#;
        let err = Config::from_toml_str(toml, Path::new("/p")).unwrap_err();
        assert!(err.to_string().contains("docs section"));
    }

    #[test]
    fn test_two_docs_presets_fail() {
        let toml = r#"
[[presets]]
name = "classic"
[presets.docs]

[[presets]]
name = "classic"
[presets.docs]
"#;
        let err = Config::from_toml_str(toml, Path::new("/p")).unwrap_err();
        assert!(err.to_string().contains("only one preset"));
    }

    #[test]
    fn test_unknown_docs_preset_fails() {
        let toml = r#"
[[presets]]
name = "custom"
[presets.docs]
"#;
        let err = Config::from_toml_str(toml, Path::new("/p")).unwrap_err();
        assert!(err.to_string().contains("custom"));
    }

    #[test]
    fn test_apply_cli_settings_base_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            base_url: Some("/markdown-web-app/".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.base_url, "/markdown-web-app/");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
    }

    #[test]
    fn test_apply_cli_settings_policies() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            on_broken_links: Some(ReportingPolicy::Warn),
            on_broken_markdown_links: Some(ReportingPolicy::Throw),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.on_broken_links, ReportingPolicy::Warn);
        assert_eq!(config.on_broken_markdown_links, ReportingPolicy::Throw);
    }

    #[test]
    fn test_apply_cli_settings_source_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            source_dir: Some(PathBuf::from("/custom/docs")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/custom/docs")
        );
        assert_eq!(
            config.docs_resolved.project_dir,
            PathBuf::from("/test/.docnav")
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.base_url, "/");
        assert_eq!(config.on_broken_links, ReportingPolicy::Throw);
    }

    #[test]
    fn test_expand_env_vars_base_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TEST_DOCNAV_BASE_URL", "/markdown-web-app/");
            std::env::remove_var("TEST_DOCNAV_ORG");
        }

        let toml = r#"
base_url = "${TEST_DOCNAV_BASE_URL}"
organization_name = "${TEST_DOCNAV_ORG:-Kalyxon}"
"#;
        let config = Config::from_toml_str(toml, Path::new("/p")).unwrap();

        assert_eq!(config.base_url, "/markdown-web-app/");
        assert_eq!(config.organization_name.as_deref(), Some("Kalyxon"));

        unsafe {
            std::env::remove_var("TEST_DOCNAV_BASE_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_edit_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("TEST_DOCNAV_REPO", "notes");
        }

        let toml = r#"
[[presets]]
name = "classic"
[presets.docs]
edit_url = "https://github.com/org/${TEST_DOCNAV_REPO}/tree/main/"
"#;
        let config = Config::from_toml_str(toml, Path::new("/p")).unwrap();
        assert_eq!(
            config.docs_resolved.edit_url.as_deref(),
            Some("https://github.com/org/notes/tree/main/")
        );

        unsafe {
            std::env::remove_var("TEST_DOCNAV_REPO");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_DOCNAV_URL");
        }

        let err = Config::from_toml_str(r#"url = "${MISSING_DOCNAV_URL}""#, Path::new("/p"))
            .unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_DOCNAV_URL"));
        assert!(err.to_string().contains("url"));
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let result = config.validate();
        assert!(result.is_err(), "Expected validation to fail");
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_base_url_requires_slashes() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.base_url = "/markdown-web-app".to_owned();
        assert_validation_error(&config, &["base_url", "/markdown-web-app"]);

        config.base_url = "markdown-web-app/".to_owned();
        assert_validation_error(&config, &["base_url"]);
    }

    #[test]
    fn test_validate_url_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.url = "example.github.io".to_owned();
        assert_validation_error(&config, &["url", "http"]);
    }

    #[test]
    fn test_validate_empty_title() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.title = String::new();
        assert_validation_error(&config, &["title"]);
    }

    #[test]
    fn test_validate_route_base_path() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.docs_resolved.route_base_path = "docs".to_owned();
        assert_validation_error(&config, &["route_base_path"]);
    }

    #[test]
    fn test_validate_edit_url_scheme() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.docs_resolved.edit_url = Some("github.com/org/repo".to_owned());
        assert_validation_error(&config, &["docs.edit_url"]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, DSA_CONFIG).unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.docs_resolved.source_dir, dir.path().join("docs"));
    }

    #[test]
    fn test_load_applies_and_validates_cli_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, DSA_CONFIG).unwrap();

        let bad = CliSettings {
            base_url: Some("/no-trailing-slash".to_owned()),
            ..Default::default()
        };
        let err = Config::load(Some(&path), Some(&bad)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let good = CliSettings {
            base_url: Some("/markdown-web-app/".to_owned()),
            ..Default::default()
        };
        let config = Config::load(Some(&path), Some(&good)).unwrap();
        assert_eq!(config.base_url, "/markdown-web-app/");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/docnav.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
