// system-tests/src/lib.rs
// ============================================================================
// Module: REST Survey System Tests Library
// Description: Shared configuration for system test scenarios.
// Purpose: Provide common utilities for REST survey system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration used by the REST survey system-test
//! binaries in `system-tests/tests`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
