// crates/rest-survey-core/src/runtime/store.rs
// ============================================================================
// Module: REST Survey In-Memory Store
// Description: In-memory foo store and a shared trait-object wrapper.
// Purpose: Provide the default store without external deps.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! [`InMemoryFooStore`] keeps foos in a mutex-protected vector so listings
//! preserve creation order. State lives only as long as the process.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::core::model::Foo;
use crate::interfaces::FooStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory foo store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryFooStore {
    /// Foo records in creation order.
    foos: Arc<Mutex<Vec<Foo>>>,
}

impl InMemoryFooStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            foos: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Locks the record vector.
    fn guard(&self) -> Result<MutexGuard<'_, Vec<Foo>>, StoreError> {
        self.foos.lock().map_err(|_| StoreError::Store("foo store mutex poisoned".to_string()))
    }
}

impl FooStore for InMemoryFooStore {
    fn list(&self) -> Result<Vec<Foo>, StoreError> {
        Ok(self.guard()?.clone())
    }

    fn load(&self, name: &str) -> Result<Option<Foo>, StoreError> {
        Ok(self.guard()?.iter().find(|foo| foo.name == name).cloned())
    }

    fn save(&self, foo: &Foo) -> Result<(), StoreError> {
        let mut guard = self.guard()?;
        match guard.iter_mut().find(|existing| existing.name == foo.name) {
            Some(existing) => *existing = foo.clone(),
            None => guard.push(foo.clone()),
        }
        drop(guard);
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<Option<Foo>, StoreError> {
        let mut guard = self.guard()?;
        let removed = guard.iter().position(|foo| foo.name == name).map(|index| guard.remove(index));
        drop(guard);
        Ok(removed)
    }

    fn clear(&self) -> Result<usize, StoreError> {
        let mut guard = self.guard()?;
        let removed = guard.len();
        guard.clear();
        drop(guard);
        Ok(removed)
    }
}

// ============================================================================
// SECTION: Shared Store Wrapper
// ============================================================================

/// Shared foo store backed by an `Arc` trait object.
#[derive(Clone)]
pub struct SharedFooStore {
    /// Inner store implementation.
    inner: Arc<dyn FooStore + Send + Sync>,
}

impl SharedFooStore {
    /// Wraps a foo store in a shared, clonable wrapper.
    #[must_use]
    pub fn from_store(store: impl FooStore + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(store),
        }
    }
}

impl FooStore for SharedFooStore {
    fn list(&self) -> Result<Vec<Foo>, StoreError> {
        self.inner.list()
    }

    fn load(&self, name: &str) -> Result<Option<Foo>, StoreError> {
        self.inner.load(name)
    }

    fn save(&self, foo: &Foo) -> Result<(), StoreError> {
        self.inner.save(foo)
    }

    fn remove(&self, name: &str) -> Result<Option<Foo>, StoreError> {
        self.inner.remove(name)
    }

    fn clear(&self) -> Result<usize, StoreError> {
        self.inner.clear()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
