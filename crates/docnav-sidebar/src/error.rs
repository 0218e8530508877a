//! Sidebar error types.

use std::path::PathBuf;

/// Error loading or validating a sidebar definition.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// I/O error reading the sidebar file.
    #[error("Failed to read sidebar file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// YAML syntax or shape error.
    #[error("Invalid sidebar YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON syntax or shape error.
    #[error("Invalid sidebar JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// File extension is neither YAML nor JSON.
    #[error("Unsupported sidebar file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// A sidebar has an empty name.
    #[error("Sidebar names cannot be empty")]
    EmptyName,
    /// A category has an empty label.
    #[error("Category in sidebar '{sidebar}' has an empty label")]
    EmptyLabel { sidebar: String },
    /// A doc entry has an empty id.
    #[error("Doc entry in sidebar '{sidebar}' has an empty id")]
    EmptyId { sidebar: String },
    /// A link entry has an empty href.
    #[error("Link '{label}' in sidebar '{sidebar}' has an empty href")]
    EmptyHref { sidebar: String, label: String },
    /// A document id is listed more than once.
    #[error("Document '{id}' appears in sidebar '{first}' and again in sidebar '{second}'")]
    DuplicateDocument {
        id: String,
        first: String,
        second: String,
    },
}
