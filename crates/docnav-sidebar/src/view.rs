//! UI-state sidebar tree.
//!
//! [`SidebarView`] is what the client renders: doc entries resolved to
//! labels and permalinks, categories carrying their `collapsed` flag exactly
//! as authored. An unauthored flag stays absent in the output.

use serde::Serialize;

use crate::{Sidebar, SidebarItem, Sidebars};

/// Resolved target of a doc entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLink {
    /// Display label.
    pub label: String,
    /// Full URL path of the page.
    pub permalink: String,
}

/// Sidebar entry as presented to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewItem {
    Doc {
        id: String,
        label: String,
        href: String,
    },
    Category {
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        collapsed: Option<bool>,
        items: Vec<ViewItem>,
    },
    Link {
        label: String,
        href: String,
    },
}

/// One rendered sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ViewSidebar {
    pub name: String,
    pub items: Vec<ViewItem>,
}

/// All rendered sidebars in authoring order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SidebarView {
    pub sidebars: Vec<ViewSidebar>,
}

impl SidebarView {
    /// Build the view, resolving doc ids with `resolve`.
    ///
    /// Docs that `resolve` cannot find are left out. A `type: doc` label
    /// override takes precedence over the resolved label.
    pub fn build<F>(sidebars: &Sidebars, resolve: F) -> Self
    where
        F: Fn(&str) -> Option<DocLink>,
    {
        Self {
            sidebars: sidebars
                .iter()
                .map(|sidebar| build_sidebar(sidebar, &resolve))
                .collect(),
        }
    }
}

fn build_sidebar<F>(sidebar: &Sidebar, resolve: &F) -> ViewSidebar
where
    F: Fn(&str) -> Option<DocLink>,
{
    ViewSidebar {
        name: sidebar.name.clone(),
        items: build_items(&sidebar.items, resolve),
    }
}

fn build_items<F>(items: &[SidebarItem], resolve: &F) -> Vec<ViewItem>
where
    F: Fn(&str) -> Option<DocLink>,
{
    items
        .iter()
        .filter_map(|item| match item {
            SidebarItem::Doc { id, label } => resolve(id).map(|link| ViewItem::Doc {
                id: id.clone(),
                label: label.clone().unwrap_or(link.label),
                href: link.permalink,
            }),
            SidebarItem::Category(category) => Some(ViewItem::Category {
                label: category.label.clone(),
                collapsed: category.collapsed,
                items: build_items(&category.items, resolve),
            }),
            SidebarItem::Link { href, label } => Some(ViewItem::Link {
                label: label.clone(),
                href: href.clone(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn resolve(id: &str) -> Option<DocLink> {
        (id != "missing").then(|| DocLink {
            label: format!("Title of {id}"),
            permalink: format!("/{id}"),
        })
    }

    #[test]
    fn test_collapsed_preserved_verbatim() {
        let yaml = r"
dsa:
  - type: category
    label: Open
    collapsed: false
    items: [a]
  - type: category
    label: Closed
    collapsed: true
    items: [b]
  - type: category
    label: Unset
    items: [c]
";
        let sidebars = Sidebars::from_yaml_str(yaml).unwrap();
        let view = SidebarView::build(&sidebars, resolve);

        let collapsed: Vec<_> = view.sidebars[0]
            .items
            .iter()
            .map(|item| match item {
                ViewItem::Category { collapsed, .. } => *collapsed,
                _ => panic!("expected category"),
            })
            .collect();
        assert_eq!(collapsed, vec![Some(false), Some(true), None]);

        let json = serde_json::to_value(&view).unwrap();
        let items = &json[0]["items"];
        assert_eq!(items[0]["collapsed"], serde_json::json!(false));
        assert_eq!(items[1]["collapsed"], serde_json::json!(true));
        assert!(items[2].get("collapsed").is_none());
    }

    #[test]
    fn test_resolves_labels_and_skips_missing() {
        let yaml = r"
dsa:
  - intro
  - missing
  - type: doc
    id: arrays
    label: Arrays!
  - type: link
    href: https://example.com
    label: Elsewhere
";
        let sidebars = Sidebars::from_yaml_str(yaml).unwrap();
        let view = SidebarView::build(&sidebars, resolve);

        assert_eq!(
            view.sidebars[0].items,
            vec![
                ViewItem::Doc {
                    id: "intro".to_owned(),
                    label: "Title of intro".to_owned(),
                    href: "/intro".to_owned(),
                },
                ViewItem::Doc {
                    id: "arrays".to_owned(),
                    label: "Arrays!".to_owned(),
                    href: "/arrays".to_owned(),
                },
                ViewItem::Link {
                    label: "Elsewhere".to_owned(),
                    href: "https://example.com".to_owned(),
                },
            ]
        );
    }
}
