//! `docnav build` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_site::SiteBuilder;

use super::{SiteArgs, ensure_project_dir};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Output directory for generated files (default: .docnav/generated/).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config()?;
        let docs = &config.docs_resolved;

        output.info(&format!("Source: {}", docs.source_dir.display()));
        output.info(&format!("Sidebars: {}", docs.sidebar_path.display()));

        let site = SiteBuilder::new(&config).build()?;

        let out_dir = match self.out_dir {
            Some(dir) => dir,
            None => {
                ensure_project_dir(&docs.project_dir)?;
                docs.generated_dir()
            }
        };
        let written = site.write_artifacts(&out_dir)?;

        if !site.broken_links().is_empty() {
            output.warning(&format!(
                "{} broken link(s) tolerated by policy",
                site.broken_links().len()
            ));
        }
        output.success(&format!(
            "Wrote {} files to {} ({} routed documents)",
            written.len(),
            out_dir.display(),
            site.metadata().len()
        ));
        Ok(())
    }
}
