//! Route table generation.

use std::collections::HashMap;

use docnav_content::ContentSet;
use docnav_sidebar::Sidebars;

use crate::component::{ComponentKey, component_ref};
use crate::url::join_url;
use crate::{RouteEntry, RouteError, RouteManifest};

/// Prefix of framework debug pages below `base_url`.
const DEBUG_PREFIX: &str = "__docnav/debug";

/// Debug pages: path suffix and component.
const DEBUG_ROUTES: [(&str, ComponentKey); 7] = [
    ("", ComponentKey::DebugHome),
    ("config", ComponentKey::DebugConfig),
    ("content", ComponentKey::DebugContent),
    ("globalData", ComponentKey::DebugGlobalData),
    ("metadata", ComponentKey::DebugMetadata),
    ("registry", ComponentKey::DebugRegistry),
    ("routes", ComponentKey::DebugRoutes),
];

/// Inputs that shape route paths.
#[derive(Debug, Clone)]
pub struct RouteOptions {
    /// Site base URL (starts and ends with `/`).
    pub base_url: String,
    /// Docs prefix below the base URL (starts with `/`).
    pub route_base_path: String,
    /// Sidebar providing the landing document (default: first sidebar).
    pub home_sidebar: Option<String>,
    /// Emit framework debug routes.
    pub debug: bool,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            base_url: "/".to_owned(),
            route_base_path: "/".to_owned(),
            home_sidebar: None,
            debug: true,
        }
    }
}

/// Derives the route manifest from sidebars and content.
pub struct RouteGenerator {
    options: RouteOptions,
}

impl RouteGenerator {
    /// Create a generator.
    #[must_use]
    pub fn new(options: RouteOptions) -> Self {
        Self { options }
    }

    /// Path of the docs root (`base_url` + `route_base_path`).
    pub fn docs_root(&self) -> String {
        join_url(&[&self.options.base_url, &self.options.route_base_path])
    }

    /// Full URL path of a document slug.
    ///
    /// The root slug `/` maps to the docs root itself.
    pub fn permalink(&self, slug: &str) -> String {
        if slug == "/" {
            self.docs_root()
        } else {
            join_url(&[&self.options.base_url, &self.options.route_base_path, slug])
        }
    }

    /// Generate the manifest.
    ///
    /// Every document reachable from a sidebar gets exactly one exact route.
    /// The docs root renders the first document of the home sidebar.
    ///
    /// # Errors
    ///
    /// Returns an error if a sidebar references a document missing from
    /// `content`, the home sidebar is unknown or has no documents, or two
    /// routes collide on a path.
    pub fn generate(
        &self,
        sidebars: &Sidebars,
        content: &ContentSet,
    ) -> Result<RouteManifest, RouteError> {
        let docs_root = self.docs_root();
        let landing = self.landing_document(sidebars)?;

        let mut leaves: Vec<RouteEntry> = Vec::new();
        let mut owners: HashMap<String, String> = HashMap::new();

        for doc_ref in sidebars.doc_refs() {
            let doc = content
                .get(doc_ref.id)
                .ok_or_else(|| RouteError::UnknownDocument {
                    sidebar: doc_ref.sidebar.to_owned(),
                    id: doc_ref.id.to_owned(),
                })?;
            let path = self.permalink(&doc.slug);
            claim_path(&mut owners, &path, &doc.id)?;
            leaves.push(doc_leaf(path, &doc.id, doc_ref.sidebar));
        }

        // Landing route goes first unless the landing doc already lives at the root.
        let (landing_sidebar, landing_id) = landing;
        if owners.get(&docs_root).map(String::as_str) != Some(landing_id) {
            claim_path(&mut owners, &docs_root, landing_id)?;
            leaves.insert(0, doc_leaf(docs_root.clone(), landing_id, landing_sidebar));
        }

        let mut routes = Vec::new();
        if self.options.debug {
            routes.extend(self.debug_routes());
        }
        routes.push(wrap_docs(&docs_root, leaves));
        routes.push(RouteEntry {
            path: "*".to_owned(),
            component: ComponentKey::NotFound.module().to_owned(),
            component_ref: component_ref("*", ComponentKey::NotFound, None),
            exact: false,
            doc_id: None,
            sidebar: None,
            routes: Vec::new(),
        });

        tracing::debug!(
            docs_root = %docs_root,
            documents = owners.len(),
            "Generated routes"
        );

        Ok(RouteManifest::new(routes))
    }

    /// Sidebar name and id of the landing document.
    fn landing_document<'a>(
        &self,
        sidebars: &'a Sidebars,
    ) -> Result<(&'a str, &'a str), RouteError> {
        let sidebar = match &self.options.home_sidebar {
            Some(name) => sidebars
                .get(name)
                .ok_or_else(|| RouteError::UnknownSidebar(name.clone()))?,
            None => sidebars.iter().next().ok_or(RouteError::NoLandingDocument)?,
        };
        let id = sidebar.first_doc().ok_or(RouteError::NoLandingDocument)?;
        Ok((sidebar.name.as_str(), id))
    }

    fn debug_routes(&self) -> Vec<RouteEntry> {
        DEBUG_ROUTES
            .iter()
            .map(|&(suffix, component)| {
                let path = join_url(&[&self.options.base_url, DEBUG_PREFIX, suffix]);
                RouteEntry {
                    component: component.module().to_owned(),
                    component_ref: component_ref(&path, component, None),
                    path,
                    exact: true,
                    doc_id: None,
                    sidebar: None,
                    routes: Vec::new(),
                }
            })
            .collect()
    }
}

/// Record `owner` for `path`, failing if another document already has it.
fn claim_path(
    owners: &mut HashMap<String, String>,
    path: &str,
    owner: &str,
) -> Result<(), RouteError> {
    if let Some(first) = owners.get(path) {
        return Err(RouteError::DuplicatePath {
            path: path.to_owned(),
            first: first.clone(),
            second: owner.to_owned(),
        });
    }
    owners.insert(path.to_owned(), owner.to_owned());
    Ok(())
}

fn doc_leaf(path: String, doc_id: &str, sidebar: &str) -> RouteEntry {
    RouteEntry {
        component: ComponentKey::DocItem.module().to_owned(),
        component_ref: component_ref(&path, ComponentKey::DocItem, Some(doc_id)),
        path,
        exact: true,
        doc_id: Some(doc_id.to_owned()),
        sidebar: Some(sidebar.to_owned()),
        routes: Vec::new(),
    }
}

/// Wrap leaves in the layout chain: docs root, version root, doc root.
fn wrap_docs(docs_root: &str, leaves: Vec<RouteEntry>) -> RouteEntry {
    let content = wrapper(docs_root, ComponentKey::DocRoot, leaves);
    let version = wrapper(docs_root, ComponentKey::DocVersionRoot, vec![content]);
    wrapper(docs_root, ComponentKey::DocsRoot, vec![version])
}

fn wrapper(path: &str, component: ComponentKey, routes: Vec<RouteEntry>) -> RouteEntry {
    RouteEntry {
        path: path.to_owned(),
        component: component.module().to_owned(),
        component_ref: component_ref(path, component, None),
        exact: false,
        doc_id: None,
        sidebar: None,
        routes,
    }
}
