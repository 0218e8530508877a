//! `docnav check` command implementation.

use clap::Args;
use docnav_site::SiteBuilder;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config()?;
        let site = SiteBuilder::new(&config).build()?;

        output.info(&format!("Sidebars: {}", site.sidebars().len()));
        output.info(&format!("Documents: {}", site.content().len()));
        output.info(&format!("Routes: {}", site.manifest().leaves().len()));

        for link in site.broken_links() {
            output.warning(&format!("{}: {link}", link.kind));
        }

        output.success("Site is valid");
        Ok(())
    }
}
