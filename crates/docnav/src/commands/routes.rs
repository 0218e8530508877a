//! `docnav routes` command implementation.

use std::io::Write;

use clap::Args;
use docnav_site::{SiteBuilder, SiteError};

use super::SiteArgs;
use crate::error::CliError;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl RoutesArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = self.site.load_config()?;
        let site = SiteBuilder::new(&config).build()?;
        let json = site.manifest().to_json().map_err(SiteError::from)?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(json.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
