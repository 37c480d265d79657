//! Category taxonomy for the storefront.
//!
//! This crate provides:
//! - [`CategoryNode`]: the fixed-shape category record
//! - [`Catalog`]: validated, immutable forest with slug lookup,
//!   breadcrumb paths, and name search
//! - [`NavItem`] / [`BreadcrumbItem`]: typed views for menus and
//!   breadcrumb trails
//!
//! The catalog is built once at application start (usually from the
//! `catalog-source` crate) and shared read-only; every query is a pure
//! function over the fixed forest.
//!
//! # Quick Start
//!
//! ```
//! use catalog_tree::{Catalog, CategoryNode};
//!
//! let catalog = Catalog::new(vec![
//!     CategoryNode::new("1", "Vêtements homme", "vetements-homme").with_subcategories(vec![
//!         CategoryNode::new("2", "Pantalons", "pantalons-homme"),
//!     ]),
//! ])?;
//!
//! let node = catalog.find_by_slug("pantalons-homme").unwrap();
//! assert_eq!(node.name, "Pantalons");
//!
//! let trail = catalog.breadcrumbs("pantalons-homme");
//! assert_eq!(trail.len(), 2);
//!
//! let hits = catalog.search("pantalon");
//! assert_eq!(hits[0].level, 1);
//! # Ok::<(), catalog_tree::CatalogError>(())
//! ```

pub(crate) mod catalog;
pub(crate) mod navigation;
pub(crate) mod node;

pub use catalog::{Catalog, CatalogError, CatalogIter, SearchHit};
pub use navigation::{BreadcrumbItem, NavItem};
pub use node::CategoryNode;
