// crates/rest-survey-server/src/server.rs
// ============================================================================
// Module: Survey Server
// Description: HTTP server assembly for the REST survey service.
// Purpose: Build the axum router, observe requests, and serve over TCP.
// Dependencies: rest-survey-core, rest-survey-config, axum, tokio
// ============================================================================

//! ## Overview
//! [`SurveyServer`] owns the survey service plus its audit and metrics sinks.
//! Every route runs behind a body limit and an observation layer that emits
//! one audit event and one metrics event per request.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::HttpBody;
use axum::extract::DefaultBodyLimit;
use axum::extract::MatchedPath;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware;
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use rest_survey_config::AuditConfig;
use rest_survey_config::SurveyConfig;
use rest_survey_core::SurveyService;
use tokio::net::TcpListener;

use crate::audit::FileAuditSink;
use crate::audit::NoopAuditSink;
use crate::audit::StderrAuditSink;
use crate::audit::SurveyAuditEvent;
use crate::audit::SurveyAuditEventParams;
use crate::audit::SurveyAuditSink;
use crate::routes;
use crate::routes::ErrorMessage;
use crate::telemetry::NoopMetrics;
use crate::telemetry::RequestMetricEvent;
use crate::telemetry::RequestOutcome;
use crate::telemetry::SurveyMetrics;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Route label used when no route template matched.
const UNMATCHED_ROUTE: &str = "unmatched";

// ============================================================================
// SECTION: Survey Server
// ============================================================================

/// REST survey server instance.
pub struct SurveyServer {
    /// Server configuration.
    config: SurveyConfig,
    /// Shared handler state.
    state: Arc<ServerState>,
}

impl SurveyServer {
    /// Builds a new server from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when the configuration is invalid or the audit
    /// sink cannot be opened.
    pub fn from_config(config: SurveyConfig) -> Result<Self, ServerError> {
        config.validate().map_err(|err| ServerError::Config(err.to_string()))?;
        let audit = build_audit_sink(&config.server.audit)?;
        Ok(Self::with_components(config, SurveyService::default(), audit, Arc::new(NoopMetrics)))
    }

    /// Builds a server from explicit components.
    #[must_use]
    pub fn with_components(
        config: SurveyConfig,
        service: SurveyService,
        audit: Arc<dyn SurveyAuditSink>,
        metrics: Arc<dyn SurveyMetrics>,
    ) -> Self {
        let state = Arc::new(ServerState {
            service,
            allow_reset: config.store.allow_reset,
            audit,
            metrics,
        });
        Self {
            config,
            state,
        }
    }

    /// Returns the configuration the server was built with.
    #[must_use]
    pub const fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Builds the HTTP router.
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.state), self.config.server.max_body_bytes)
    }

    /// Binds the configured address and serves until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), ServerError> {
        let addr =
            self.config.server.bind_addr().map_err(|err| ServerError::Config(err.to_string()))?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|err| ServerError::Transport(format!("http bind failed: {err}")))?;
        self.serve_with_listener(listener, shutdown_signal()).await
    }

    /// Serves on an already bound listener until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Transport`] when the server fails.
    pub async fn serve_with_listener<F>(
        self,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|err| ServerError::Transport(format!("http server failed: {err}")))
    }
}

/// Shared state for HTTP handlers.
pub(crate) struct ServerState {
    /// Resource store and validator.
    pub(crate) service: SurveyService,
    /// Whether `DELETE /` may clear state.
    pub(crate) allow_reset: bool,
    /// Request audit sink.
    audit: Arc<dyn SurveyAuditSink>,
    /// Request metrics sink.
    metrics: Arc<dyn SurveyMetrics>,
}

/// Selects the audit sink from configuration.
fn build_audit_sink(config: &AuditConfig) -> Result<Arc<dyn SurveyAuditSink>, ServerError> {
    if !config.enabled {
        return Ok(Arc::new(NoopAuditSink));
    }
    match &config.path {
        Some(path) => {
            let sink = FileAuditSink::new(Path::new(path.trim())).map_err(|err| {
                ServerError::Init(format!("audit log open failed: {err}"))
            })?;
            Ok(Arc::new(sink))
        }
        None => Ok(Arc::new(StderrAuditSink)),
    }
}

// ============================================================================
// SECTION: Router
// ============================================================================

/// Assembles routes, fallbacks, and layers.
fn build_router(state: Arc<ServerState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/", delete(routes::reset))
        .route("/foos", post(routes::create_foo).get(routes::list_foos))
        .route(
            "/foos/{foo_id}",
            get(routes::get_foo).put(routes::replace_foo).delete(routes::delete_foo),
        )
        .route("/foos/{foo_id}/bar", post(routes::create_bar).get(routes::list_bars))
        .route(
            "/foos/{foo_id}/bar/{bar_id}",
            get(routes::get_bar)
                .put(routes::replace_bar)
                .patch(routes::patch_bar)
                .delete(routes::delete_bar),
        )
        .fallback(routes::route_not_found)
        .method_not_allowed_fallback(routes::method_not_allowed)
        .layer(middleware::from_fn_with_state(Arc::clone(&state), observe_request))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

/// Emits one audit event and one metrics observation per request.
async fn observe_request(
    State(state): State<Arc<ServerState>>,
    request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().to_string();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| UNMATCHED_ROUTE.to_string(), |path| path.as_str().to_string());
    let request_bytes = request.body().size_hint().exact().unwrap_or(0);

    let response = next.run(request).await;

    let latency = started.elapsed();
    let status = response.status().as_u16();
    let error_message =
        response.extensions().get::<ErrorMessage>().map(|error| error.message.clone());
    let metric = RequestMetricEvent {
        route: route.clone(),
        method: method.clone(),
        status,
        outcome: RequestOutcome::from_status(status),
    };
    state.metrics.record_request(metric.clone());
    state.metrics.record_latency(metric, latency);
    state.audit.record(&SurveyAuditEvent::new(SurveyAuditEventParams {
        method,
        route,
        status,
        error_message,
        request_bytes,
        latency_ms: latency.as_millis(),
    }));
    response
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Survey server errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration errors.
    #[error("config error: {0}")]
    Config(String),
    /// Initialization errors.
    #[error("init error: {0}")]
    Init(String),
    /// Transport errors.
    #[error("transport error: {0}")]
    Transport(String),
}

// ============================================================================
// SECTION: Tests
// ============================================================================
