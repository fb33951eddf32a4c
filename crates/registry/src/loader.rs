//! JSON catalog loader
//!
//! Parses a catalog document of the form:
//!
//! ```json
//! {
//!   "components": [
//!     {
//!       "provider": "shadcn",
//!       "name": "Button",
//!       "category": "buttons",
//!       "description": "Displays a button element.",
//!       "tags": ["button", "form"]
//!     }
//!   ]
//! }
//! ```
//!
//! The `slug` field is optional; when absent it is derived from the
//! name. Records are validated at construction, so a malformed entry
//! fails the whole load rather than producing a partial registry.

use crate::registry::ComponentRegistry;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;
use uicatalog_core::{Category, ComponentRecord, Error, Provider, Result};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    components: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    provider: Provider,
    name: String,
    #[serde(default)]
    slug: Option<String>,
    category: Category,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: Vec<String>,
}

/// Derive a url-safe slug from a display name
///
/// Lowercases and joins alphanumeric runs with single dashes:
/// "Gradient Text" -> "gradient-text".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Parse a catalog JSON document into a registry
pub fn load_catalog_str(json: &str) -> Result<ComponentRegistry> {
    let catalog: CatalogFile =
        serde_json::from_str(json).map_err(|e| Error::CatalogParse(e.to_string()))?;

    let mut registry = ComponentRegistry::new();
    for entry in catalog.components {
        let slug = match entry.slug {
            Some(slug) => slug,
            None => slugify(&entry.name),
        };
        let record = ComponentRecord::new(entry.provider, slug, entry.name, entry.category)?
            .with_description(entry.description)
            .with_tags(entry.tags);
        registry.add(record)?;
    }

    info!(components = registry.len(), "loaded component catalog");
    Ok(registry)
}

/// Read and parse a catalog file
pub fn load_catalog_path(path: &Path) -> Result<ComponentRegistry> {
    let json = fs::read_to_string(path)?;
    load_catalog_str(&json)
}

// ============================================================================
// Tests
// ============================================================================
