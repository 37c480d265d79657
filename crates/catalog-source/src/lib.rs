//! Startup taxonomy payloads for the storefront catalog.
//!
//! The category forest is supplied once at application start by a static
//! payload. This crate parses YAML or JSON definitions into a validated
//! [`Catalog`] and ships the default storefront taxonomy as an embedded
//! dataset.
//!
//! Payloads are a top-level sequence of root categories; `subcategories`
//! may be omitted for leaves:
//!
//! ```yaml
//! - id: "100"
//!   name: Vêtements homme
//!   slug: vetements-homme
//!   subcategories:
//!     - id: "110"
//!       name: Pantalons
//!       slug: pantalons-homme
//! ```
//!
//! # Quick Start
//!
//! ```
//! let catalog = catalog_source::builtin();
//! assert!(catalog.find_by_slug("vetements-homme").is_some());
//! ```

use std::path::{Path, PathBuf};

use catalog_tree::{Catalog, CatalogError, CategoryNode};

/// Default storefront taxonomy shipped with the application.
const BUILTIN_CATEGORIES: &str = include_str!("../data/categories.yaml");

/// Error raised while loading a taxonomy payload.
///
/// Every variant is fatal at startup; there is no partial or degraded
/// catalog.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Payload file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// YAML payload is malformed.
    #[error("invalid YAML payload: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON payload is malformed.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    /// Path extension is not a recognized payload format.
    #[error("unsupported payload format: {}", .path.display())]
    UnsupportedFormat {
        /// Path with the unrecognized extension.
        path: PathBuf,
    },
    /// Payload parsed but violates a taxonomy invariant.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Parse a YAML payload into a validated catalog.
///
/// # Errors
///
/// Returns [`SourceError::Yaml`] for malformed YAML and
/// [`SourceError::Catalog`] for duplicate slugs or ids.
pub fn from_yaml_str(content: &str) -> Result<Catalog, SourceError> {
    let roots: Vec<CategoryNode> = serde_yaml::from_str(content)?;
    build(roots)
}

/// Parse a JSON payload into a validated catalog.
///
/// # Errors
///
/// Returns [`SourceError::Json`] for malformed JSON and
/// [`SourceError::Catalog`] for duplicate slugs or ids.
pub fn from_json_str(content: &str) -> Result<Catalog, SourceError> {
    let roots: Vec<CategoryNode> = serde_json::from_str(content)?;
    build(roots)
}

/// Load a taxonomy payload from a file, dispatching on its extension.
///
/// Recognized extensions: `.yaml`, `.yml`, `.json`.
///
/// # Errors
///
/// Returns [`SourceError::Io`] when the file cannot be read,
/// [`SourceError::UnsupportedFormat`] for unrecognized extensions, and
/// the parse/validation errors of the format-specific functions.
pub fn load(path: &Path) -> Result<Catalog, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => from_yaml_str(&content),
        Some("json") => from_json_str(&content),
        _ => Err(SourceError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// The default storefront taxonomy.
///
/// # Panics
///
/// Panics if the embedded payload is invalid, which the crate's tests
/// rule out.
#[must_use]
pub fn builtin() -> Catalog {
    from_yaml_str(BUILTIN_CATEGORIES).expect("embedded taxonomy payload is valid")
}

fn build(roots: Vec<CategoryNode>) -> Result<Catalog, SourceError> {
    let catalog = Catalog::new(roots)?;
    tracing::debug!(categories = catalog.len(), "Loaded category taxonomy");
    Ok(catalog)
}
