// crates/rest-survey-config/src/lib.rs
// ============================================================================
// Module: REST Survey Config Library
// Description: Canonical config model and validation.
// Purpose: Single source of truth for rest-survey.toml semantics.
// Dependencies: serde, toml
// ============================================================================

//! ## Overview
//! `rest-survey-config` defines the configuration model for the REST survey
//! service. Files are optional; when present they are parsed strictly and
//! validated fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
