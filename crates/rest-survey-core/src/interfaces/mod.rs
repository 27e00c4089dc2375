// crates/rest-survey-core/src/interfaces/mod.rs
// ============================================================================
// Module: REST Survey Interfaces
// Description: Backend-agnostic storage interface for foo records.
// Purpose: Define the contract surface used by the survey service.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The service never touches storage directly; it goes through [`FooStore`].
//! Implementations persist whole foo records (bars embedded) and must keep
//! creation order for listings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::model::Foo;

// ============================================================================
// SECTION: Foo Store
// ============================================================================

/// Foo store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("foo store io error: {0}")]
    Io(String),
    /// Store is unusable (e.g. a poisoned lock).
    #[error("foo store error: {0}")]
    Store(String),
}

/// Storage for foo records keyed by name.
pub trait FooStore {
    /// Lists every foo in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be read.
    fn list(&self) -> Result<Vec<Foo>, StoreError>;

    /// Loads a foo by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be read.
    fn load(&self, name: &str) -> Result<Option<Foo>, StoreError>;

    /// Inserts a new foo or replaces an existing one in place.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be written.
    fn save(&self, foo: &Foo) -> Result<(), StoreError>;

    /// Removes a foo by name, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be written.
    fn remove(&self, name: &str) -> Result<Option<Foo>, StoreError>;

    /// Removes every foo, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store cannot be written.
    fn clear(&self) -> Result<usize, StoreError>;
}
