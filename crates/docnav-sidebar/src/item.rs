//! Sidebar tree types.
//!
//! The tree is parsed directly from the sidebar file, so it is finite and
//! acyclic by construction: entries never reference each other.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::SidebarError;

/// One entry in a sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarItem {
    /// Reference to a document, with an optional label override.
    Doc { id: String, label: Option<String> },
    /// Named group of entries.
    Category(Category),
    /// External link. Produces no route.
    Link { href: String, label: String },
}

/// Named grouping of sidebar entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Display label. Need not be unique.
    pub label: String,
    /// Initial collapsed state exactly as authored (`None` when not set).
    pub collapsed: Option<bool>,
    /// Ordered child entries.
    pub items: Vec<SidebarItem>,
}

/// A named, ordered sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    /// Sidebar name (e.g. `dsa`).
    pub name: String,
    /// Top-level entries.
    pub items: Vec<SidebarItem>,
}

/// Document reference reached while walking a sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocRef<'a> {
    /// Sidebar the document was reached through.
    pub sidebar: &'a str,
    /// Document id.
    pub id: &'a str,
    /// Label override from a `type: doc` entry.
    pub label: Option<&'a str>,
}

/// All sidebars of a site in authoring order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebars {
    sidebars: Vec<Sidebar>,
}

impl Sidebar {
    /// Document references in depth-first authoring order.
    pub fn doc_refs(&self) -> Vec<DocRef<'_>> {
        fn walk<'a>(sidebar: &'a str, items: &'a [SidebarItem], out: &mut Vec<DocRef<'a>>) {
            for item in items {
                match item {
                    SidebarItem::Doc { id, label } => out.push(DocRef {
                        sidebar,
                        id,
                        label: label.as_deref(),
                    }),
                    SidebarItem::Category(category) => walk(sidebar, &category.items, out),
                    SidebarItem::Link { .. } => {}
                }
            }
        }

        let mut refs = Vec::new();
        walk(&self.name, &self.items, &mut refs);
        refs
    }

    /// First document reached in this sidebar.
    pub fn first_doc(&self) -> Option<&str> {
        self.doc_refs().first().map(|r| r.id)
    }
}

impl Sidebars {
    /// Create sidebars from an ordered list.
    #[must_use]
    pub fn new(sidebars: Vec<Sidebar>) -> Self {
        Self { sidebars }
    }

    /// Iterate sidebars in authoring order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sidebar> {
        self.sidebars.iter()
    }

    /// Look up a sidebar by name.
    pub fn get(&self, name: &str) -> Option<&Sidebar> {
        self.sidebars.iter().find(|s| s.name == name)
    }

    /// Number of sidebars.
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// True when no sidebar is defined.
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }

    /// Document references across all sidebars, sidebar by sidebar.
    pub fn doc_refs(&self) -> Vec<DocRef<'_>> {
        self.sidebars.iter().flat_map(Sidebar::doc_refs).collect()
    }

    /// Copy of these sidebars without the doc entries rejected by `keep`.
    ///
    /// Categories stay in place even when they end up empty, and their
    /// `collapsed` flags are carried over unchanged.
    #[must_use]
    pub fn retain_docs<F>(&self, keep: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        fn filter<F: Fn(&str) -> bool>(items: &[SidebarItem], keep: &F) -> Vec<SidebarItem> {
            items
                .iter()
                .filter_map(|item| match item {
                    SidebarItem::Doc { id, .. } if !keep(id) => None,
                    SidebarItem::Category(category) => Some(SidebarItem::Category(Category {
                        label: category.label.clone(),
                        collapsed: category.collapsed,
                        items: filter(&category.items, keep),
                    })),
                    other => Some(other.clone()),
                })
                .collect()
        }

        Self {
            sidebars: self
                .sidebars
                .iter()
                .map(|sidebar| Sidebar {
                    name: sidebar.name.clone(),
                    items: filter(&sidebar.items, &keep),
                })
                .collect(),
        }
    }

    /// Check structural rules that do not depend on content.
    ///
    /// - sidebar names, category labels, doc ids and link hrefs are non-empty
    /// - no document id appears twice, within or across sidebars
    pub fn validate(&self) -> Result<(), SidebarError> {
        for sidebar in &self.sidebars {
            if sidebar.name.is_empty() {
                return Err(SidebarError::EmptyName);
            }
            validate_items(&sidebar.name, &sidebar.items)?;
        }

        let mut seen: HashMap<&str, &str> = HashMap::new();
        for doc in self.doc_refs() {
            if let Some(first) = seen.insert(doc.id, doc.sidebar) {
                return Err(SidebarError::DuplicateDocument {
                    id: doc.id.to_owned(),
                    first: first.to_owned(),
                    second: doc.sidebar.to_owned(),
                });
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Sidebars {
    type Item = &'a Sidebar;
    type IntoIter = std::slice::Iter<'a, Sidebar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_items(sidebar: &str, items: &[SidebarItem]) -> Result<(), SidebarError> {
    for item in items {
        match item {
            SidebarItem::Doc { id, .. } if id.is_empty() => {
                return Err(SidebarError::EmptyId {
                    sidebar: sidebar.to_owned(),
                });
            }
            SidebarItem::Doc { .. } => {}
            SidebarItem::Category(category) => {
                if category.label.trim().is_empty() {
                    return Err(SidebarError::EmptyLabel {
                        sidebar: sidebar.to_owned(),
                    });
                }
                validate_items(sidebar, &category.items)?;
            }
            SidebarItem::Link { href, label } => {
                if href.is_empty() {
                    return Err(SidebarError::EmptyHref {
                        sidebar: sidebar.to_owned(),
                        label: label.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

/// Item shape as written in the file: a bare id or a typed object.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem {
    Id(String),
    Typed(TypedItem),
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TypedItem {
    Doc {
        id: String,
        #[serde(default)]
        label: Option<String>,
    },
    Category {
        label: String,
        #[serde(default)]
        collapsed: Option<bool>,
        #[serde(default)]
        items: Vec<RawItem>,
    },
    Link {
        href: String,
        label: String,
    },
}

impl From<RawItem> for SidebarItem {
    fn from(raw: RawItem) -> Self {
        match raw {
            RawItem::Id(id) => Self::Doc { id, label: None },
            RawItem::Typed(TypedItem::Doc { id, label }) => Self::Doc { id, label },
            RawItem::Typed(TypedItem::Category {
                label,
                collapsed,
                items,
            }) => Self::Category(Category {
                label,
                collapsed,
                items: items.into_iter().map(Self::from).collect(),
            }),
            RawItem::Typed(TypedItem::Link { href, label }) => Self::Link { href, label },
        }
    }
}

impl<'de> Deserialize<'de> for Sidebars {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SidebarsVisitor;

        impl<'de> Visitor<'de> for SidebarsVisitor {
            type Value = Sidebars;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping from sidebar name to a list of items")
            }

            // Map entries are consumed in file order, which keeps sidebar
            // order stable for both YAML and JSON input.
            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Sidebars, A::Error> {
                let mut sidebars: Vec<Sidebar> = Vec::new();
                while let Some((name, items)) = map.next_entry::<String, Vec<RawItem>>()? {
                    if sidebars.iter().any(|s| s.name == name) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate sidebar '{name}'"
                        )));
                    }
                    sidebars.push(Sidebar {
                        name,
                        items: items.into_iter().map(SidebarItem::from).collect(),
                    });
                }
                Ok(Sidebars { sidebars })
            }
        }

        deserializer.deserialize_map(SidebarsVisitor)
    }
}
