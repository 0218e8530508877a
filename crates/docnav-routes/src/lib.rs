//! Route table generation for docnav.
//!
//! Derives the route manifest consumed by the client-side router from the
//! sidebars and the scanned content:
//!
//! ```text
//! [debug routes]                      (when enabled)
//! <docs root>   @theme/DocsRoot
//!   <docs root>   @theme/DocVersionRoot
//!     <docs root>   @theme/DocRoot
//!       <docs root>      landing doc   exact
//!       <docs root>/<slug>  doc         exact, sidebar
//!       ...
//! *             @theme/NotFound
//! ```
//!
//! Output is deterministic: identical inputs give byte-identical JSON.

mod component;
mod error;
mod generator;
mod metadata;
mod route;
mod url;

pub use component::{ComponentKey, component_ref};
pub use error::RouteError;
pub use generator::{RouteGenerator, RouteOptions};
pub use metadata::{DocMetadata, MetadataOptions, NavLink, build_doc_metadata};
pub use route::{RouteEntry, RouteManifest};
pub use url::join_url;
