//! Site assembly.

use std::path::Path;

use docnav_config::{Config, ThemeConfig};
use docnav_content::{ContentSet, ScanOptions, Scanner};
use docnav_routes::{
    DocMetadata, MetadataOptions, RouteGenerator, RouteManifest, RouteOptions, build_doc_metadata,
};
use docnav_sidebar::{DocLink, SidebarView, Sidebars};
use serde::Serialize;

use crate::SiteError;
use crate::links::{self, BrokenLink, BrokenLinkKind};

/// Site-wide data exposed to the client (`site.json`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteData<'a> {
    pub title: &'a str,
    pub tagline: &'a str,
    pub url: &'a str,
    pub base_url: &'a str,
    pub docs_root: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<&'a str>,
    pub blog: bool,
    pub theme_config: &'a ThemeConfig,
}

/// Builds a [`Site`] from configuration.
pub struct SiteBuilder<'a> {
    config: &'a Config,
}

impl<'a> SiteBuilder<'a> {
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Load, validate, and derive everything the client needs.
    ///
    /// # Errors
    ///
    /// Returns an error if the sidebar file or docs directory cannot be read,
    /// a broken link is found under the `throw` policy, or route generation
    /// fails.
    pub fn build(&self) -> Result<Site<'a>, SiteError> {
        let config = self.config;
        let docs = &config.docs_resolved;

        let mut sidebars = Sidebars::load(&docs.sidebar_path)?;
        let scanner = Scanner::new(
            docs.source_dir.clone(),
            &ScanOptions {
                include: docs.include.clone(),
                exclude: docs.exclude.clone(),
            },
        )?;
        let content = scanner.scan()?;

        let mut tolerated = links::enforce(
            config.on_broken_markdown_links,
            BrokenLinkKind::MarkdownLink,
            links::markdown_links(&content),
        )?;

        let missing = links::enforce(
            config.on_broken_links,
            BrokenLinkKind::Link,
            links::sidebar_links(&sidebars, &content),
        )?;
        let mut home_sidebar = docs.home_sidebar.clone();
        if !missing.is_empty() {
            sidebars = sidebars.retain_docs(|id| content.get(id).is_some());
            if let Some(fallback) = landing_fallback(&sidebars, home_sidebar.as_deref()) {
                home_sidebar = Some(fallback);
            }
        }
        tolerated.extend(missing);

        let generator = RouteGenerator::new(RouteOptions {
            base_url: config.base_url.clone(),
            route_base_path: docs.route_base_path.clone(),
            home_sidebar,
            debug: config.debug,
        });
        let manifest = generator.generate(&sidebars, &content)?;

        tolerated.extend(links::enforce(
            config.on_broken_links,
            BrokenLinkKind::Link,
            links::navbar_links(&config.theme_config.navbar.items, &config.base_url, &manifest),
        )?);

        log_unlisted(&sidebars, &content);

        let metadata = build_doc_metadata(
            &sidebars,
            &content,
            &generator,
            &MetadataOptions {
                edit_url: docs.edit_url.clone(),
                docs_dir: docs_dir_name(config),
            },
        );

        let view = SidebarView::build(&sidebars, |id| {
            content.get(id).map(|doc| DocLink {
                label: doc.sidebar_label().to_owned(),
                permalink: generator.permalink(&doc.slug),
            })
        });

        tracing::info!(
            documents = content.len(),
            routed = metadata.len(),
            sidebars = sidebars.len(),
            broken_links = tolerated.len(),
            "Site built"
        );

        Ok(Site {
            config,
            docs_root: generator.docs_root(),
            sidebars,
            content,
            manifest,
            metadata,
            view,
            broken_links: tolerated,
        })
    }
}

/// A validated site with its generated data.
#[derive(Debug)]
pub struct Site<'a> {
    config: &'a Config,
    docs_root: String,
    sidebars: Sidebars,
    content: ContentSet,
    manifest: RouteManifest,
    metadata: Vec<DocMetadata>,
    view: SidebarView,
    broken_links: Vec<BrokenLink>,
}

impl Site<'_> {
    /// Sidebars after pruning missing documents.
    #[must_use]
    pub fn sidebars(&self) -> &Sidebars {
        &self.sidebars
    }

    #[must_use]
    pub fn content(&self) -> &ContentSet {
        &self.content
    }

    #[must_use]
    pub fn manifest(&self) -> &RouteManifest {
        &self.manifest
    }

    /// Metadata of routed documents in sidebar order.
    #[must_use]
    pub fn metadata(&self) -> &[DocMetadata] {
        &self.metadata
    }

    #[must_use]
    pub fn sidebar_view(&self) -> &SidebarView {
        &self.view
    }

    /// Broken links reported under `warn` or `ignore`.
    #[must_use]
    pub fn broken_links(&self) -> &[BrokenLink] {
        &self.broken_links
    }

    /// Client-facing site data.
    #[must_use]
    pub fn data(&self) -> SiteData<'_> {
        let config = self.config;
        SiteData {
            title: &config.title,
            tagline: &config.tagline,
            url: &config.url,
            base_url: &config.base_url,
            docs_root: self.docs_root.clone(),
            favicon: config.favicon.as_deref(),
            organization_name: config.organization_name.as_deref(),
            project_name: config.project_name.as_deref(),
            blog: config.docs_resolved.blog,
            theme_config: &config.theme_config,
        }
    }
}

/// Sidebar to take the landing document from when pruning emptied the home
/// sidebar. `None` keeps the configured choice.
fn landing_fallback(sidebars: &Sidebars, configured: Option<&str>) -> Option<String> {
    let home = match configured {
        Some(name) => sidebars.get(name)?,
        None => sidebars.iter().next()?,
    };
    if home.first_doc().is_some() {
        return None;
    }

    let fallback = sidebars.iter().find(|s| s.first_doc().is_some())?;
    tracing::warn!(
        home = %home.name,
        fallback = %fallback.name,
        "Home sidebar has no documents left, using fallback for the landing page"
    );
    Some(fallback.name.clone())
}

fn log_unlisted(sidebars: &Sidebars, content: &ContentSet) {
    let listed: std::collections::HashSet<&str> =
        sidebars.doc_refs().into_iter().map(|r| r.id).collect();
    for doc in content.iter().filter(|d| !listed.contains(d.id.as_str())) {
        tracing::info!(
            id = %doc.id,
            source = %doc.source.display(),
            "Document not in any sidebar, no route generated"
        );
    }
}

/// Docs directory relative to the project root, for edit links.
fn docs_dir_name(config: &Config) -> String {
    let docs = &config.docs_resolved;
    docs.project_dir
        .parent()
        .and_then(|root| docs.source_dir.strip_prefix(root).ok())
        .or_else(|| docs.source_dir.file_name().map(Path::new))
        .map(|dir| dir.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default()
}
