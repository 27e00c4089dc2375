// crates/rest-survey-server/src/telemetry.rs
// ============================================================================
// Module: Request Telemetry
// Description: Observability hooks for HTTP request handling.
// Purpose: Provide metric events and latency buckets without hard deps.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module exposes a thin metrics interface for request counters and
//! latency histograms. Exporters implement [`SurveyMetrics`]; the server ships
//! with [`NoopMetrics`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default latency buckets in milliseconds for request histograms.
pub const LATENCY_BUCKETS_MS: &[u64] =
    &[1, 2, 5, 10, 25, 50, 100, 250, 500, 1_000, 2_500, 5_000, 10_000, 30_000];

// ============================================================================
// SECTION: Metric Labels
// ============================================================================

/// Request outcome classification.
///
/// # Invariants
/// - Variants are stable for telemetry labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestOutcome {
    /// Response status below 400.
    Ok,
    /// Response status 400 or above.
    Error,
}

impl RequestOutcome {
    /// Classifies a response status code.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        if status < 400 { Self::Ok } else { Self::Error }
    }

    /// Returns a stable label for the outcome.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Error => "error",
        }
    }
}

/// Request metric event payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMetricEvent {
    /// Matched route template (e.g. `/foos/{foo_id}`), or `unmatched`.
    pub route: String,
    /// HTTP method.
    pub method: String,
    /// Response status code.
    pub status: u16,
    /// Request outcome.
    pub outcome: RequestOutcome,
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Metrics sink for requests and latencies.
pub trait SurveyMetrics: Send + Sync {
    /// Records a request counter event.
    fn record_request(&self, event: RequestMetricEvent);
    /// Records a latency observation for the request.
    fn record_latency(&self, event: RequestMetricEvent, latency: Duration);
}

/// No-op metrics sink.
pub struct NoopMetrics;

impl SurveyMetrics for NoopMetrics {
    fn record_request(&self, _event: RequestMetricEvent) {}

    fn record_latency(&self, _event: RequestMetricEvent, _latency: Duration) {}
}

// ============================================================================
// SECTION: Tests
// ============================================================================
