// crates/rest-survey-server/src/audit.rs
// ============================================================================
// Module: Request Audit Logging
// Description: Structured audit events for HTTP request handling.
// Purpose: Emit one JSON line per request without hard dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines the request audit event and its sinks. Events are
//! JSON lines so deployments can route them to any log pipeline. Request and
//! response bodies are never logged; only sizes and the error message are.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::telemetry::RequestOutcome;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Request audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// HTTP method.
    pub method: String,
    /// Matched route template, or `unmatched`.
    pub route: String,
    /// Response status code.
    pub status: u16,
    /// Request outcome.
    pub outcome: RequestOutcome,
    /// Error envelope message when the request failed.
    pub error_message: Option<String>,
    /// Declared request body size in bytes.
    pub request_bytes: u64,
    /// Handling latency in milliseconds.
    pub latency_ms: u128,
}

/// Inputs required to construct a request audit event.
pub struct SurveyAuditEventParams {
    /// HTTP method.
    pub method: String,
    /// Matched route template.
    pub route: String,
    /// Response status code.
    pub status: u16,
    /// Error envelope message when present.
    pub error_message: Option<String>,
    /// Declared request body size in bytes.
    pub request_bytes: u64,
    /// Handling latency in milliseconds.
    pub latency_ms: u128,
}

impl SurveyAuditEvent {
    /// Creates a new audit event with a consistent timestamp.
    #[must_use]
    pub fn new(params: SurveyAuditEventParams) -> Self {
        let timestamp_ms =
            SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        Self {
            event: "http_request",
            timestamp_ms,
            method: params.method,
            route: params.route,
            status: params.status,
            outcome: RequestOutcome::from_status(params.status),
            error_message: params.error_message,
            request_bytes: params.request_bytes,
            latency_ms: params.latency_ms,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for request events.
pub trait SurveyAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &SurveyAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl SurveyAuditSink for StderrAuditSink {
    fn record(&self, event: &SurveyAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl SurveyAuditSink for FileAuditSink {
    fn record(&self, event: &SurveyAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl SurveyAuditSink for NoopAuditSink {
    fn record(&self, _event: &SurveyAuditEvent) {}
}

// ============================================================================
// SECTION: Tests
// ============================================================================
