//! Category node type.
//!
//! [`CategoryNode`] is the fixed-shape record the taxonomy is built from.
//! Nodes form an n-ary forest through `subcategories`; the order of that
//! vector is the display order. `slug` is the routing key, `name` is
//! display-only. Presentation extras (`icon`, `description`) are carried
//! for frontend use and ignored by every query.

use serde::{Deserialize, Serialize};

/// A single category in the storefront taxonomy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Stable identifier, unique across the whole forest.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// URL-safe identifier, unique across the whole forest.
    pub slug: String,
    /// Ordered children; insertion order is display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subcategories: Vec<CategoryNode>,
    /// Icon hint for menu rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Short description for category landing pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryNode {
    /// Create a leaf node with no presentation extras.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            subcategories: Vec::new(),
            icon: None,
            description: None,
        }
    }

    /// Attach ordered subcategories.
    #[must_use]
    pub fn with_subcategories(mut self, subcategories: Vec<CategoryNode>) -> Self {
        self.subcategories = subcategories;
        self
    }

    /// Attach an icon hint.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// True when the node has no subcategories.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.subcategories.is_empty()
    }

    /// Find a node by slug within this node's subtree (self included).
    ///
    /// Pre-order search; returns the first match and stops there.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&CategoryNode> {
        if self.slug == slug {
            return Some(self);
        }
        self.subcategories
            .iter()
            .find_map(|child| child.find_by_slug(slug))
    }

    /// Depth of this node's subtree. A leaf has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .subcategories
            .iter()
            .map(CategoryNode::depth)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_subtree() -> CategoryNode {
        CategoryNode::new("1", "Vêtements homme", "vetements-homme").with_subcategories(vec![
            CategoryNode::new("2", "Pantalons", "pantalons-homme").with_subcategories(vec![
                CategoryNode::new("3", "Pantalons kaki", "pantalons-kaki-homme"),
            ]),
            CategoryNode::new("4", "Chemises", "chemises-homme"),
        ])
    }

    #[test]
    fn test_is_leaf() {
        let tree = sample_subtree();
        assert!(!tree.is_leaf());
        assert!(tree.subcategories[1].is_leaf());
    }

    #[test]
    fn test_find_by_slug_matches_self() {
        let tree = sample_subtree();
        let found = tree.find_by_slug("vetements-homme");
        assert_eq!(found.map(|n| n.id.as_str()), Some("1"));
    }

    #[test]
    fn test_find_by_slug_descends() {
        let tree = sample_subtree();
        let found = tree.find_by_slug("pantalons-kaki-homme");
        assert_eq!(found.map(|n| n.id.as_str()), Some("3"));
    }

    #[test]
    fn test_find_by_slug_unknown_returns_none() {
        let tree = sample_subtree();
        assert!(tree.find_by_slug("__does_not_exist__").is_none());
        assert!(tree.find_by_slug("").is_none());
    }

    #[test]
    fn test_depth() {
        let tree = sample_subtree();
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.subcategories[1].depth(), 1);
    }

    // Serde shape tests

    #[test]
    fn test_deserialize_missing_subcategories_is_leaf() {
        let json = r#"{"id": "7", "name": "Robes", "slug": "robes"}"#;
        let node: CategoryNode = serde_json::from_str(json).unwrap();
        assert!(node.is_leaf());
        assert!(node.icon.is_none());
        assert!(node.description.is_none());
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let node = CategoryNode::new("7", "Robes", "robes");
        let json = serde_json::to_value(&node).unwrap();
        assert!(json.get("subcategories").is_none());
        assert!(json.get("icon").is_none());
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_serialize_keeps_presentation_extras() {
        let node = CategoryNode::new("7", "Robes", "robes").with_icon("dress");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["icon"], "dress");
    }

    #[test]
    fn test_roundtrip_preserves_child_order() {
        let tree = sample_subtree();
        let json = serde_json::to_string(&tree).unwrap();
        let back: CategoryNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
