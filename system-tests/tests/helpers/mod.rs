// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for REST survey system-tests.
// Purpose: Provide server harnesses, an HTTP client, and readiness probes.
// Dependencies: system-tests, rest-survey-server, reqwest, tokio
// ============================================================================

//! ## Overview
//! Shared helpers for REST survey system-tests. Each test spawns its own
//! server on a loopback port so suites never share store state.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod client;
pub mod harness;
pub mod timeouts;
