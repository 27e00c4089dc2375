// crates/rest-survey-core/src/runtime/mod.rs
// ============================================================================
// Module: REST Survey Runtime
// Description: Survey service and store implementations.
// Purpose: Apply resource operations against a foo store.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules hold the in-memory store and the [`SurveyService`] that
//! every transport calls into, so validation behaves identically everywhere.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod service;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use service::SurveyService;
pub use store::InMemoryFooStore;
pub use store::SharedFooStore;
