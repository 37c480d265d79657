//! Validated, immutable category forest with navigational queries.
//!
//! [`Catalog`] owns the root categories and answers the three read-only
//! queries the presentation layer needs: slug lookup, ancestor-path
//! reconstruction, and name search. The forest is validated once at
//! construction (global slug/id uniqueness) and never mutated afterwards,
//! so every query is a pure read.
//!
//! # Thread Safety
//!
//! `Catalog` holds no interior mutability. Queries are re-entrant and
//! safely callable from any number of threads; share it with
//! `Arc<Catalog>` when several consumers need it.

use std::collections::HashSet;

use crate::node::CategoryNode;

/// Error raised when the taxonomy payload violates a uniqueness invariant.
///
/// This is a configuration error: it is fatal at startup and a catalog is
/// never produced in this state.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two nodes share a slug. Slug lookup is global, so slugs must be
    /// unique across all depths.
    #[error("duplicate category slug: {slug}")]
    DuplicateSlug {
        /// The slug that appeared twice.
        slug: String,
    },
    /// Two nodes share an id.
    #[error("duplicate category id: {id}")]
    DuplicateId {
        /// The id that appeared twice.
        id: String,
    },
}

/// A search match with its depth in the forest. Roots are level 0.
#[derive(Clone, Copy, Debug)]
pub struct SearchHit<'a> {
    /// The matching category.
    pub node: &'a CategoryNode,
    /// Depth of the match, counted from the roots.
    pub level: usize,
}

/// The storefront category forest.
///
/// Constructed once at application start from a payload
/// (see the `catalog-source` crate) and passed to consumers explicitly;
/// there is no global instance.
#[derive(Debug)]
pub struct Catalog {
    roots: Vec<CategoryNode>,
}

impl Catalog {
    /// Build a catalog from root categories, validating invariants.
    ///
    /// Walks the forest pre-order and fails on the first duplicate slug
    /// or duplicate id. Empty `name`/`slug` values are not rejected;
    /// lookups simply never return them as matches for other keys.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] naming the duplicated value.
    pub fn new(roots: Vec<CategoryNode>) -> Result<Self, CatalogError> {
        validate_unique(&roots)?;
        Ok(Self { roots })
    }

    /// Root categories in display order.
    #[must_use]
    pub fn roots(&self) -> &[CategoryNode] {
        &self.roots
    }

    /// Total number of categories in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// True when the forest has no categories at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find a category by slug anywhere in the forest.
    ///
    /// Pre-order search over the roots; the first match wins and the
    /// traversal stops there. Unknown and empty slugs return `None`,
    /// an ordinary outcome rather than an error. Scope the search to a
    /// subtree with [`CategoryNode::find_by_slug`] instead.
    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&CategoryNode> {
        self.roots.iter().find_map(|root| root.find_by_slug(slug))
    }

    /// Ancestor chain from a root down to the category with `slug`,
    /// including that category itself.
    ///
    /// This is the breadcrumb trail: the chain is accumulated while
    /// descending pre-order, so no parent back-references are kept on
    /// nodes. The search stops at the first match and does not continue
    /// into siblings. Unknown slugs yield an empty vector.
    #[must_use]
    pub fn path(&self, slug: &str) -> Vec<&CategoryNode> {
        fn descend<'a>(
            nodes: &'a [CategoryNode],
            slug: &str,
            trail: &mut Vec<&'a CategoryNode>,
        ) -> bool {
            for node in nodes {
                trail.push(node);
                if node.slug == slug || descend(&node.subcategories, slug, trail) {
                    return true;
                }
                trail.pop();
            }
            false
        }

        let mut trail = Vec::new();
        descend(&self.roots, slug, &mut trail);
        trail
    }

    /// Search categories by name, case-insensitively.
    ///
    /// Matching is substring-only: no tokenization, no fuzzy matching,
    /// no ranking. Results come back in forest pre-order tagged with
    /// their depth, so the order is deterministic for a fixed catalog
    /// and term. An empty or whitespace-only term yields no results
    /// rather than the whole forest.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<SearchHit<'_>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|(_, node)| node.name.to_lowercase().contains(&needle))
            .map(|(level, node)| SearchHit { node, level })
            .collect()
    }

    /// Pre-order iterator over `(level, node)` pairs. Roots are level 0.
    #[must_use]
    pub fn iter(&self) -> CatalogIter<'_> {
        CatalogIter::new(&self.roots)
    }
}

/// Pre-order validation walk collecting slugs and ids.
fn validate_unique(roots: &[CategoryNode]) -> Result<(), CatalogError> {
    let mut slugs = HashSet::new();
    let mut ids = HashSet::new();
    let mut stack: Vec<&CategoryNode> = roots.iter().rev().collect();

    while let Some(node) = stack.pop() {
        if !slugs.insert(node.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug {
                slug: node.slug.clone(),
            });
        }
        if !ids.insert(node.id.as_str()) {
            return Err(CatalogError::DuplicateId {
                id: node.id.clone(),
            });
        }
        stack.extend(node.subcategories.iter().rev());
    }

    Ok(())
}

/// Pre-order forest iterator driven by an explicit stack.
///
/// Children are pushed in reverse so they pop left-to-right.
pub struct CatalogIter<'a> {
    stack: Vec<(usize, &'a CategoryNode)>,
}

impl<'a> CatalogIter<'a> {
    fn new(roots: &'a [CategoryNode]) -> Self {
        Self {
            stack: roots.iter().rev().map(|root| (0, root)).collect(),
        }
    }
}

impl<'a> Iterator for CatalogIter<'a> {
    type Item = (usize, &'a CategoryNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (level, node) = self.stack.pop()?;
        for child in node.subcategories.iter().rev() {
            self.stack.push((level + 1, child));
        }
        Some((level, node))
    }
}
