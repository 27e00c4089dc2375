// crates/rest-survey-server/src/lib.rs
// ============================================================================
// Module: REST Survey Server
// Description: HTTP surface for the REST survey service.
// Purpose: Expose foo and bar resources over axum with audit and metrics hooks.
// Dependencies: rest-survey-core, rest-survey-config, axum, tokio
// ============================================================================

//! ## Overview
//! The server maps HTTP routes onto [`rest_survey_core::SurveyService`]
//! operations. Every response that is not a success carries a
//! `{"message": ...}` envelope, and every request produces one audit event
//! and one metrics observation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod routes;
pub mod server;
pub mod telemetry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::FileAuditSink;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use audit::SurveyAuditEvent;
pub use audit::SurveyAuditSink;
pub use routes::ApiError;
pub use server::ServerError;
pub use server::SurveyServer;
pub use telemetry::LATENCY_BUCKETS_MS;
pub use telemetry::NoopMetrics;
pub use telemetry::RequestMetricEvent;
pub use telemetry::RequestOutcome;
pub use telemetry::SurveyMetrics;
