// crates/rest-survey-core/src/core/mod.rs
// ============================================================================
// Module: REST Survey Core Types
// Description: Canonical resource, payload, and error types.
// Purpose: Provide stable, serializable types shared by every API surface.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Core types define the foo/bar/baz resources, the request payloads accepted
//! for each operation, and the error taxonomy whose messages are returned to
//! clients verbatim.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod error;
pub mod model;
pub mod payload;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::ErrorKind;
pub use error::SurveyError;
pub use model::Bar;
pub use model::Baz;
pub use model::Foo;
pub use payload::BarCreate;
pub use payload::BarPatch;
pub use payload::BarReplace;
pub use payload::BazUpdate;
pub use payload::FooCreate;
pub use payload::FooReplace;
pub use payload::JsonBody;
pub use payload::parse_body;
