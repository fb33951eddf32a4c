//! Component registry for the uicatalog search engine
//!
//! This crate provides:
//! - ComponentRegistry: insertion-ordered, immutable-after-population storage
//! - JSON catalog loader (`load_catalog_str`, `load_catalog_path`)
//! - Builtin seed catalog covering the common provider entries
//!
//! The registry is populated once at startup and treated as read-only
//! afterwards; on catalog changes the whole registry is rebuilt and the
//! search engine swaps to it atomically.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod loader;
pub mod registry;
pub mod seed;

pub use loader::{load_catalog_path, load_catalog_str};
pub use registry::ComponentRegistry;
pub use seed::builtin_catalog;
