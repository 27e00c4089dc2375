// crates/rest-survey-core/src/runtime/service.rs
// ============================================================================
// Module: Survey Service
// Description: Resource store and validator for foos and bars.
// Purpose: Apply CRUD operations with presence and uniqueness validation.
// Dependencies: crate::{core, interfaces, runtime::store}
// ============================================================================

//! ## Overview
//! [`SurveyService`] is the single entry point for resource operations. Each
//! mutating call holds a write lock across its load-validate-save sequence so
//! a request is applied atomically with respect to other requests.
//!
//! Checks run in a fixed order: foo existence, bar existence, payload
//! validation, then name immutability or key uniqueness.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::core::error::SurveyError;
use crate::core::model::Bar;
use crate::core::model::Foo;
use crate::core::payload::BarCreate;
use crate::core::payload::BarPatch;
use crate::core::payload::BarReplace;
use crate::core::payload::BazUpdate;
use crate::core::payload::FooCreate;
use crate::core::payload::FooReplace;
use crate::core::payload::JsonBody;
use crate::interfaces::FooStore;
use crate::interfaces::StoreError;
use crate::runtime::store::InMemoryFooStore;
use crate::runtime::store::SharedFooStore;

// ============================================================================
// SECTION: Survey Service
// ============================================================================

/// Resource store and validator.
#[derive(Clone)]
pub struct SurveyService {
    /// Backing foo store.
    store: SharedFooStore,
    /// Serializes mutating operations.
    write_lock: Arc<Mutex<()>>,
}

impl Default for SurveyService {
    fn default() -> Self {
        Self::new(SharedFooStore::from_store(InMemoryFooStore::new()))
    }
}

impl SurveyService {
    /// Creates a service over the given store.
    #[must_use]
    pub fn new(store: SharedFooStore) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    // ------------------------------------------------------------------------
    // Foos
    // ------------------------------------------------------------------------

    /// Creates a foo.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] when the payload is invalid or the name is taken.
    pub fn create_foo(&self, body: &JsonBody) -> Result<Foo, SurveyError> {
        let request = FooCreate::from_body(body)?;
        let _guard = self.write_guard()?;
        if self.store.load(&request.name)?.is_some() {
            return Err(SurveyError::DuplicateFoo);
        }
        let foo = Foo::new(request.name, request.description);
        self.store.save(&foo)?;
        Ok(foo)
    }

    /// Lists every foo in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::Store`] when the store fails.
    pub fn list_foos(&self) -> Result<Vec<Foo>, SurveyError> {
        Ok(self.store.list()?)
    }

    /// Returns a single foo.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::FooLookupMissing`] when the foo does not exist.
    pub fn get_foo(&self, name: &str) -> Result<Foo, SurveyError> {
        self.store.load(name)?.ok_or_else(|| SurveyError::FooLookupMissing(name.to_string()))
    }

    /// Replaces a foo's mutable fields, keeping its bars.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] when the foo is missing, the payload is invalid,
    /// or the payload renames the foo.
    pub fn replace_foo(&self, name: &str, body: &JsonBody) -> Result<Foo, SurveyError> {
        let _guard = self.write_guard()?;
        let mut foo = self.require_foo(name)?;
        let request = FooReplace::from_body(body)?;
        if request.name.as_deref().is_some_and(|requested| requested != foo.name) {
            return Err(SurveyError::NameImmutable);
        }
        foo.description = request.description;
        self.store.save(&foo)?;
        Ok(foo)
    }

    /// Deletes a foo and its bars, returning the prior representation.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::FooNotFound`] when the foo does not exist.
    pub fn delete_foo(&self, name: &str) -> Result<Foo, SurveyError> {
        let _guard = self.write_guard()?;
        self.store.remove(name)?.ok_or_else(|| SurveyError::FooNotFound(name.to_string()))
    }

    // ------------------------------------------------------------------------
    // Bars
    // ------------------------------------------------------------------------

    /// Creates a bar under a foo.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] when the foo is missing, the payload is invalid,
    /// or the (`id`, `category`) pair is already used in the foo.
    pub fn create_bar(&self, foo_name: &str, body: &JsonBody) -> Result<Bar, SurveyError> {
        let _guard = self.write_guard()?;
        let mut foo = self.require_foo(foo_name)?;
        let request = BarCreate::from_body(body)?;
        if foo.has_bar_key(&request.id, &request.category, None) {
            return Err(SurveyError::DuplicateBar);
        }
        let bar = Bar {
            id: request.id,
            category: request.category,
            description: request.description,
            baz: request.baz,
        };
        foo.bars.push(bar.clone());
        self.store.save(&foo)?;
        Ok(bar)
    }

    /// Lists the bars of a foo in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::FooNotFound`] when the foo does not exist.
    pub fn list_bars(&self, foo_name: &str) -> Result<Vec<Bar>, SurveyError> {
        Ok(self.require_foo(foo_name)?.bars)
    }

    /// Returns the first bar of a foo with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] when the foo or bar does not exist.
    pub fn get_bar(&self, foo_name: &str, bar_id: &str) -> Result<Bar, SurveyError> {
        let mut foo = self.require_foo(foo_name)?;
        let index = require_bar(&foo, bar_id)?;
        Ok(foo.bars.swap_remove(index))
    }

    /// Applies a partial update to a bar.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] when the foo or bar is missing, the payload is
    /// invalid, or the update collides with another bar's key.
    pub fn patch_bar(
        &self,
        foo_name: &str,
        bar_id: &str,
        body: &JsonBody,
    ) -> Result<Bar, SurveyError> {
        let _guard = self.write_guard()?;
        let foo = self.require_foo(foo_name)?;
        let index = require_bar(&foo, bar_id)?;
        let patch = BarPatch::from_body(body)?;
        let mut bar = foo.bars[index].clone();
        if let Some(category) = patch.category {
            bar.category = category;
        }
        if let Some(description) = patch.description {
            bar.description = description;
        }
        match patch.baz {
            BazUpdate::Keep => {}
            BazUpdate::Clear => bar.baz = None,
            BazUpdate::Set(baz) => bar.baz = Some(baz),
        }
        self.commit_bar(foo, index, bar)
    }

    /// Replaces a bar's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] when the foo or bar is missing, the payload is
    /// incomplete or invalid, or the update collides with another bar's key.
    pub fn replace_bar(
        &self,
        foo_name: &str,
        bar_id: &str,
        body: &JsonBody,
    ) -> Result<Bar, SurveyError> {
        let _guard = self.write_guard()?;
        let foo = self.require_foo(foo_name)?;
        let index = require_bar(&foo, bar_id)?;
        let replacement = BarReplace::from_body(body)?;
        let bar = Bar {
            id: bar_id.to_string(),
            category: replacement.category,
            description: replacement.description,
            baz: replacement.baz,
        };
        self.commit_bar(foo, index, bar)
    }

    /// Deletes a bar, returning its last representation.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError`] when the foo or bar does not exist.
    pub fn delete_bar(&self, foo_name: &str, bar_id: &str) -> Result<Bar, SurveyError> {
        let _guard = self.write_guard()?;
        let mut foo = self.require_foo(foo_name)?;
        let index = require_bar(&foo, bar_id)?;
        let bar = foo.bars.remove(index);
        self.store.save(&foo)?;
        Ok(bar)
    }

    // ------------------------------------------------------------------------
    // Maintenance
    // ------------------------------------------------------------------------

    /// Clears all state, returning the number of foos removed.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::Store`] when the store fails.
    pub fn reset(&self) -> Result<usize, SurveyError> {
        let _guard = self.write_guard()?;
        Ok(self.store.clear()?)
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    /// Acquires the mutation lock.
    fn write_guard(&self) -> Result<MutexGuard<'_, ()>, SurveyError> {
        self.write_lock
            .lock()
            .map_err(|_| SurveyError::Store(StoreError::Store("write lock poisoned".to_string())))
    }

    /// Loads a foo for a mutating or nested operation.
    fn require_foo(&self, name: &str) -> Result<Foo, SurveyError> {
        self.store.load(name)?.ok_or_else(|| SurveyError::FooNotFound(name.to_string()))
    }

    /// Writes an updated bar back into its foo after the uniqueness check.
    fn commit_bar(&self, mut foo: Foo, index: usize, bar: Bar) -> Result<Bar, SurveyError> {
        if foo.has_bar_key(&bar.id, &bar.category, Some(index)) {
            return Err(SurveyError::DuplicateBar);
        }
        foo.bars[index] = bar.clone();
        self.store.save(&foo)?;
        Ok(bar)
    }
}

/// Resolves a bar position within a foo.
fn require_bar(foo: &Foo, bar_id: &str) -> Result<usize, SurveyError> {
    foo.bar_index(bar_id).ok_or_else(|| SurveyError::BarNotFound(bar_id.to_string()))
}
