// system-tests/tests/helpers/harness.rs
// ============================================================================
// Module: Survey Server Harness
// Description: Helpers for spawning survey servers in system-tests.
// Purpose: Provide deterministic server startup and teardown for tests.
// Dependencies: rest-survey-server, rest-survey-config, tokio
// ============================================================================

use rest_survey_config::SurveyConfig;
use rest_survey_server::ServerError;
use rest_survey_server::SurveyServer;
use system_tests::config::SystemTestConfig;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use super::client::SurveyClient;
use super::readiness::wait_for_server_ready;
use super::timeouts::DEFAULT_TIMEOUT;
use super::timeouts::resolve_timeout;

/// Loopback bind used when no override is set; the OS picks the port.
const LOOPBACK_ANY_PORT: &str = "127.0.0.1:0";

/// Handle for a spawned survey server.
pub struct SurveyServerHandle {
    base_url: String,
    client: SurveyClient,
    shutdown: oneshot::Sender<()>,
    join: JoinHandle<Result<(), ServerError>>,
}

impl SurveyServerHandle {
    /// Returns the server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a client bound to this server.
    pub fn client(&self) -> &SurveyClient {
        &self.client
    }

    /// Signals graceful shutdown and waits for the server task.
    pub async fn shutdown(self) -> Result<(), String> {
        let _ = self.shutdown.send(());
        match self.join.await {
            Ok(result) => result.map_err(|err| err.to_string()),
            Err(err) => Err(format!("server task failed: {err}")),
        }
    }
}

/// Builds the base config for system tests.
pub fn base_config() -> SurveyConfig {
    let mut config = SurveyConfig::default();
    config.server.bind = LOOPBACK_ANY_PORT.to_string();
    config.server.audit.enabled = false;
    config
}

/// Spawns a survey server with the default test config.
pub async fn spawn_default_server() -> Result<SurveyServerHandle, String> {
    spawn_survey_server(base_config()).await
}

/// Spawns a survey server and waits until `/health` answers.
pub async fn spawn_survey_server(mut config: SurveyConfig) -> Result<SurveyServerHandle, String> {
    let env = SystemTestConfig::load()?;
    if let Some(bind) = env.http_bind {
        config.server.bind = bind;
    }
    if let Some(path) = env.audit_path {
        config.server.audit.enabled = true;
        config.server.audit.path = Some(path.display().to_string());
    }
    let server = SurveyServer::from_config(config).map_err(|err| err.to_string())?;
    let addr = server.config().server.bind_addr().map_err(|err| err.to_string())?;
    let listener =
        TcpListener::bind(addr).await.map_err(|err| format!("failed to bind {addr}: {err}"))?;
    let local =
        listener.local_addr().map_err(|err| format!("failed to read listener address: {err}"))?;

    let (shutdown, signal) = oneshot::channel::<()>();
    let join = tokio::spawn(server.serve_with_listener(listener, async move {
        let _ = signal.await;
    }));

    let timeout = resolve_timeout(DEFAULT_TIMEOUT)?;
    let base_url = format!("http://{local}");
    let client = SurveyClient::new(base_url.clone(), timeout)?;
    wait_for_server_ready(&client, timeout).await?;
    Ok(SurveyServerHandle {
        base_url,
        client,
        shutdown,
        join,
    })
}
