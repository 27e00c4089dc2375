// crates/rest-survey-core/src/core/model.rs
// ============================================================================
// Module: Resource Model
// Description: Foo, Bar, and Baz resource representations.
// Purpose: Define the serialized shapes returned by every endpoint.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`Foo`] is a named top-level resource owning an ordered list of [`Bar`]
//! records. Each bar may carry a free-form [`Baz`] object that is stored and
//! echoed verbatim.
//!
//! ## Invariants
//! - `Foo::name` never changes after creation.
//! - Within one foo, no two bars share the same (`id`, `category`) pair.
//! - Bars keep insertion order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Open-shaped baz payload attached to a bar.
pub type Baz = Map<String, Value>;

/// Top-level named resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Foo {
    /// Unique, immutable foo name.
    pub name: String,
    /// Free-form description (empty when not provided).
    pub description: String,
    /// Owned bars in insertion order.
    pub bars: Vec<Bar>,
}

/// Child resource owned by a foo, keyed by (`id`, `category`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar identifier (not unique on its own).
    pub id: String,
    /// Bar category.
    pub category: String,
    /// Free-form description (empty when not provided).
    pub description: String,
    /// Optional baz payload; serialized as `null` when absent.
    pub baz: Option<Baz>,
}

// ============================================================================
// SECTION: Behavior
// ============================================================================

impl Foo {
    /// Creates a foo with no bars.
    #[must_use]
    pub const fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            bars: Vec::new(),
        }
    }

    /// Returns the position of the first bar with the given id.
    #[must_use]
    pub fn bar_index(&self, bar_id: &str) -> Option<usize> {
        self.bars.iter().position(|bar| bar.id == bar_id)
    }

    /// Returns true when a bar other than `exclude` already uses the key.
    #[must_use]
    pub fn has_bar_key(&self, id: &str, category: &str, exclude: Option<usize>) -> bool {
        self.bars
            .iter()
            .enumerate()
            .any(|(index, bar)| Some(index) != exclude && bar.id == id && bar.category == category)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
