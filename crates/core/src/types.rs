//! Component catalog types
//!
//! This module defines the typed component model:
//! - Provider: enumerated catalog sources
//! - Category: enumerated semantic categories
//! - ComponentId: canonical `<provider>/<slug>` identifier
//! - ComponentRecord: validated, immutable catalog entry
//!
//! Records are validated at construction time (fail fast on missing
//! name/slug) and never mutated afterwards; the registry reloads
//! wholesale when the catalog changes.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Provider
// ============================================================================

/// Source design system a component belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// shadcn/ui
    Shadcn,
    /// Magic UI
    MagicUi,
    /// daisyUI
    DaisyUi,
    /// Material UI
    Mui,
    /// React Bits
    ReactBits,
    /// Aceternity UI
    Aceternity,
    /// AlignUI
    AlignUi,
    /// 21st.dev
    #[serde(rename = "twenty_first")]
    TwentyFirst,
    /// BentoGrids
    BentoGrids,
    /// Next.js Design
    #[serde(rename = "nextjs_design")]
    NextJsDesign,
    /// HyperUI
    HyperUi,
    /// Tailwind Components
    #[serde(rename = "tailwind_components")]
    TailwindComponents,
}

impl Provider {
    /// Canonical lowercase name, as used in component ids and catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Shadcn => "shadcn",
            Provider::MagicUi => "magicui",
            Provider::DaisyUi => "daisyui",
            Provider::Mui => "mui",
            Provider::ReactBits => "reactbits",
            Provider::Aceternity => "aceternity",
            Provider::AlignUi => "alignui",
            Provider::TwentyFirst => "twenty_first",
            Provider::BentoGrids => "bentogrids",
            Provider::NextJsDesign => "nextjs_design",
            Provider::HyperUi => "hyperui",
            Provider::TailwindComponents => "tailwind_components",
        }
    }

    /// All known providers
    pub fn all() -> &'static [Provider] {
        &[
            Provider::Shadcn,
            Provider::MagicUi,
            Provider::DaisyUi,
            Provider::Mui,
            Provider::ReactBits,
            Provider::Aceternity,
            Provider::AlignUi,
            Provider::TwentyFirst,
            Provider::BentoGrids,
            Provider::NextJsDesign,
            Provider::HyperUi,
            Provider::TailwindComponents,
        ]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Provider::all()
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| Error::InvalidRecord(format!("unknown provider: {s:?}")))
    }
}

// ============================================================================
// Category
// ============================================================================

/// Semantic category of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Animated/motion components
    Animated,
    /// Text effects and typography
    Text,
    /// Form layouts
    Forms,
    /// Navigation bars, menus, tabs
    Navigation,
    /// Background effects
    Backgrounds,
    /// Page-level layouts
    Layouts,
    /// Full page templates
    Templates,
    /// Badges, avatars, stats
    DataDisplay,
    /// Alerts, toasts, progress
    Feedback,
    /// Button variants
    Buttons,
    /// Inputs, selects, switches
    Inputs,
    /// Modal dialogs
    Modals,
    /// Card components
    Cards,
    /// Tabular data
    Tables,
    /// Tooltips, popovers, sheets
    Overlays,
    /// Accordions and collapsibles
    Disclosure,
    /// Structural layout helpers
    Layout,
    /// Anything uncategorized
    Other,
}

impl Category {
    /// Canonical snake_case name, as used in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Animated => "animated",
            Category::Text => "text",
            Category::Forms => "forms",
            Category::Navigation => "navigation",
            Category::Backgrounds => "backgrounds",
            Category::Layouts => "layouts",
            Category::Templates => "templates",
            Category::DataDisplay => "data_display",
            Category::Feedback => "feedback",
            Category::Buttons => "buttons",
            Category::Inputs => "inputs",
            Category::Modals => "modals",
            Category::Cards => "cards",
            Category::Tables => "tables",
            Category::Overlays => "overlays",
            Category::Disclosure => "disclosure",
            Category::Layout => "layout",
            Category::Other => "other",
        }
    }

    /// All known categories
    pub fn all() -> &'static [Category] {
        &[
            Category::Animated,
            Category::Text,
            Category::Forms,
            Category::Navigation,
            Category::Backgrounds,
            Category::Layouts,
            Category::Templates,
            Category::DataDisplay,
            Category::Feedback,
            Category::Buttons,
            Category::Inputs,
            Category::Modals,
            Category::Cards,
            Category::Tables,
            Category::Overlays,
            Category::Disclosure,
            Category::Layout,
            Category::Other,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::all()
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| Error::InvalidRecord(format!("unknown category: {s:?}")))
    }
}

// ============================================================================
// ComponentId
// ============================================================================

/// Unique component identifier in `<provider>/<slug>` form
///
/// Example: `shadcn/button`. Immutable once created; equality is
/// string equality on the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Build an id from a provider and slug
    pub fn new(provider: Provider, slug: &str) -> Self {
        ComponentId(format!("{}/{}", provider.as_str(), slug))
    }

    /// Canonical string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ComponentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (provider, slug) = s
            .split_once('/')
            .ok_or_else(|| Error::InvalidRecord(format!("malformed component id: {s:?}")))?;
        if slug.is_empty() {
            return Err(Error::InvalidRecord(format!(
                "component id has empty slug: {s:?}"
            )));
        }
        let provider: Provider = provider.parse()?;
        Ok(ComponentId::new(provider, slug))
    }
}

// ============================================================================
// ComponentRecord
// ============================================================================

/// A catalogued UI component snippet's metadata
///
/// Created once during registry population and immutable thereafter.
/// Construction validates that name and slug are non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Unique identifier (`<provider>/<slug>`)
    pub id: ComponentId,

    /// Human-readable display name
    pub name: String,

    /// Source design system
    pub provider: Provider,

    /// Semantic category
    pub category: Category,

    /// Free-text summary (may be empty)
    #[serde(default)]
    pub description: String,

    /// Free-text keywords (insertion order irrelevant)
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ComponentRecord {
    /// Create a validated record
    ///
    /// Fails with `Error::InvalidRecord` if the name or slug is empty.
    pub fn new(
        provider: Provider,
        slug: impl Into<String>,
        name: impl Into<String>,
        category: Category,
    ) -> Result<Self> {
        let slug = slug.into();
        let name = name.into();
        if slug.trim().is_empty() {
            return Err(Error::InvalidRecord("empty slug".to_string()));
        }
        if name.trim().is_empty() {
            return Err(Error::InvalidRecord("empty name".to_string()));
        }
        Ok(ComponentRecord {
            id: ComponentId::new(provider, &slug),
            name,
            provider,
            category,
            description: String::new(),
            tags: vec![],
        })
    }

    /// Builder: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
