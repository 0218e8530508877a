//! Sidebar definition model for docnav.
//!
//! A sidebar file maps sidebar names to ordered item lists:
//!
//! ```yaml
//! dsa:
//!   - intro
//!   - type: category
//!     label: Data Structures
//!     collapsed: false
//!     items: [arrays, linked-list]
//! ```
//!
//! This crate provides:
//! - [`Sidebars`]: the parsed, ordered definition with structural validation
//! - [`SidebarView`]: the UI-state tree derived from it

mod error;
mod item;
mod loader;
mod view;

pub use error::SidebarError;
pub use item::{Category, DocRef, Sidebar, SidebarItem, Sidebars};
pub use view::{DocLink, SidebarView, ViewItem, ViewSidebar};
