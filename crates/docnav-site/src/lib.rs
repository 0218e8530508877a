//! Site validation and artifact generation for docnav.
//!
//! [`SiteBuilder`] ties the pieces together:
//!
//! 1. load the sidebars and scan the docs directory
//! 2. report broken markdown links and broken sidebar links per policy
//! 3. generate routes, then report broken navbar links
//! 4. derive doc metadata and the sidebar UI state
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docnav_config::Config;
//! use docnav_site::SiteBuilder;
//!
//! let config = Config::load(None, None)?;
//! let site = SiteBuilder::new(&config).build()?;
//! site.write_artifacts(&config.docs_resolved.generated_dir())?;
//! # Ok(())
//! # }
//! ```

mod artifacts;
mod error;
mod links;
mod site;

pub use error::SiteError;
pub use links::{BrokenLink, BrokenLinkKind};
pub use site::{Site, SiteBuilder, SiteData};
