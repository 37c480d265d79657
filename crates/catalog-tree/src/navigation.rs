//! Navigation views for presentation consumers.
//!
//! Menus, sidebars, and breadcrumb pages consume the catalog through
//! these typed views instead of re-walking [`CategoryNode`] themselves.
//! Views hold clones of display fields only; they never expose the
//! underlying forest for mutation.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::node::CategoryNode;

/// Menu tree item for UI rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label.
    pub name: String,
    /// Link target slug.
    pub slug: String,
    /// Icon hint, when the category carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Child menu items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    fn from_node(node: &CategoryNode) -> Self {
        Self {
            name: node.name.clone(),
            slug: node.slug.clone(),
            icon: node.icon.clone(),
            children: node.subcategories.iter().map(Self::from_node).collect(),
        }
    }
}

/// Breadcrumb trail item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display label.
    pub name: String,
    /// Link target slug.
    pub slug: String,
}

impl Catalog {
    /// Full menu tree in display order.
    #[must_use]
    pub fn menu(&self) -> Vec<NavItem> {
        self.roots().iter().map(NavItem::from_node).collect()
    }

    /// Menu subtree rooted at the category with `slug`.
    ///
    /// `None` for unknown slugs, matching the lookup it wraps.
    #[must_use]
    pub fn menu_for(&self, slug: &str) -> Option<NavItem> {
        self.find_by_slug(slug).map(NavItem::from_node)
    }

    /// Breadcrumb trail for the category with `slug`, root first and the
    /// category itself last. Empty for unknown slugs.
    #[must_use]
    pub fn breadcrumbs(&self, slug: &str) -> Vec<BreadcrumbItem> {
        self.path(slug)
            .into_iter()
            .map(|node| BreadcrumbItem {
                name: node.name.clone(),
                slug: node.slug.clone(),
            })
            .collect()
    }
}
