//! Builtin seed catalog
//!
//! A small static catalog covering the most common provider entries,
//! embedded at compile time. Deployments with a full catalog file use
//! `load_catalog_path` instead; the seed exists so the engine is
//! usable out of the box and gives tests realistic data.

use crate::loader::load_catalog_str;
use crate::registry::ComponentRegistry;
use uicatalog_core::Result;

/// The embedded seed catalog document
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../data/seed_catalog.json");

/// Build a registry from the embedded seed catalog
pub fn builtin_catalog() -> Result<ComponentRegistry> {
    load_catalog_str(BUILTIN_CATALOG_JSON)
}
