// crates/rest-survey-core/src/lib.rs
// ============================================================================
// Module: REST Survey Core Library
// Description: Public API surface for the REST Survey core.
// Purpose: Expose resource types, store interfaces, and the survey service.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! REST Survey core owns the foo/bar/baz resource model, request payload
//! validation, and the [`SurveyService`] that applies every CRUD operation
//! against a [`FooStore`]. It is transport-agnostic; the HTTP surface lives in
//! `rest-survey-server` and only translates requests and errors.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use interfaces::FooStore;
pub use interfaces::StoreError;
pub use runtime::InMemoryFooStore;
pub use runtime::SharedFooStore;
pub use runtime::SurveyService;
