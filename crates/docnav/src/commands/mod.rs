//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod routes;

use std::path::{Path, PathBuf};

use clap::Args;
use docnav_config::{CliSettings, Config, ReportingPolicy};

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use routes::RoutesArgs;

use crate::error::CliError;

/// Arguments shared by every command that loads a site.
#[derive(Args, Debug)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site base URL, e.g. `/markdown-web-app/` (overrides config).
    #[arg(long, env = "DOCNAV_BASE_URL")]
    base_url: Option<String>,

    /// Policy for sidebar and navbar links without a page.
    #[arg(long, value_name = "POLICY")]
    on_broken_links: Option<ReportingPolicy>,

    /// Policy for in-content links to missing markdown files.
    #[arg(long, value_name = "POLICY")]
    on_broken_markdown_links: Option<ReportingPolicy>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    fn cli_settings(&self) -> CliSettings {
        CliSettings {
            source_dir: self.source_dir.clone(),
            base_url: self.base_url.clone(),
            on_broken_links: self.on_broken_links,
            on_broken_markdown_links: self.on_broken_markdown_links,
        }
    }

    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        Ok(Config::load(
            self.config.as_deref(),
            Some(&self.cli_settings()),
        )?)
    }
}

/// Ensure the `.docnav/` project directory exists with a `.gitignore`.
pub(crate) fn ensure_project_dir(project_dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(project_dir)?;

    let gitignore_path = project_dir.join(".gitignore");
    if !gitignore_path.exists() {
        let _ = std::fs::write(&gitignore_path, "# Automatically created by docnav\n*\n");
    }

    Ok(())
}
