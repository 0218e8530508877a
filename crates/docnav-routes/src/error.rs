//! Route generation errors.

/// Error generating the route table.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// A sidebar references a document that has no content.
    #[error("Sidebar '{sidebar}' references unknown document '{id}'")]
    UnknownDocument { sidebar: String, id: String },
    /// The configured home sidebar does not exist.
    #[error("Home sidebar '{0}' is not defined")]
    UnknownSidebar(String),
    /// There is no document to serve at the docs root.
    #[error("No landing document: the home sidebar contains no documents")]
    NoLandingDocument,
    /// Two routes resolve to the same path.
    #[error("Route path '{path}' is produced by both '{first}' and '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },
    /// Manifest serialization failed.
    #[error("Failed to serialize routes: {0}")]
    Json(#[from] serde_json::Error),
}
