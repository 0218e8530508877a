//! Route manifest types.

use serde::Serialize;

use crate::RouteError;

/// One route in the manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    /// URL path, or `*` for the catch-all.
    pub path: String,
    /// Theme component module rendered at this route.
    pub component: String,
    /// Stable identifier of the component instance.
    pub component_ref: String,
    /// Exact match only (leaf routes).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub exact: bool,
    /// Document rendered by a leaf route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,
    /// Sidebar the document was reached through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<String>,
    /// Nested routes rendered inside this one.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteEntry>,
}

/// Generated route table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteManifest {
    routes: Vec<RouteEntry>,
}

impl RouteManifest {
    pub(crate) fn new(routes: Vec<RouteEntry>) -> Self {
        Self { routes }
    }

    /// Top-level routes in match order.
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    /// All exact (leaf) routes, depth-first.
    pub fn leaves(&self) -> Vec<&RouteEntry> {
        fn walk<'a>(routes: &'a [RouteEntry], out: &mut Vec<&'a RouteEntry>) {
            for route in routes {
                if route.exact {
                    out.push(route);
                }
                walk(&route.routes, out);
            }
        }

        let mut leaves = Vec::new();
        walk(&self.routes, &mut leaves);
        leaves
    }

    /// Exact route matching `path`, if any.
    pub fn find_exact(&self, path: &str) -> Option<&RouteEntry> {
        self.leaves().into_iter().find(|r| r.path == path)
    }

    /// Leaf routes that render a document.
    pub fn doc_routes(&self) -> Vec<&RouteEntry> {
        self.leaves()
            .into_iter()
            .filter(|r| r.doc_id.is_some())
            .collect()
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, RouteError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
