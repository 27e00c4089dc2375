// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment overrides for spawned survey servers.
// Purpose: Let CI pin the bind address, stretch timeouts, and capture audit logs.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The harness reads three optional variables. Any variable that is set must
//! be valid UTF-8 and non-blank; a bad value stops the run instead of being
//! ignored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// SECTION: Variables
// ============================================================================

/// Environment variables understood by the survey harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Listen address for spawned servers instead of an OS-assigned port.
    HttpBind,
    /// Lower bound, in whole seconds, for client and readiness timeouts.
    TimeoutSeconds,
    /// File that spawned servers append their request audit lines to.
    AuditPath,
}

impl SystemTestEnv {
    /// Every variable, in documentation order.
    pub const ALL: [Self; 3] = [Self::HttpBind, Self::TimeoutSeconds, Self::AuditPath];

    /// Returns the variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HttpBind => "REST_SURVEY_SYSTEM_TEST_HTTP_BIND",
            Self::TimeoutSeconds => "REST_SURVEY_SYSTEM_TEST_TIMEOUT_SEC",
            Self::AuditPath => "REST_SURVEY_SYSTEM_TEST_AUDIT_PATH",
        }
    }

    /// Reads the variable, rejecting non-UTF-8 and blank values.
    fn read(self) -> Result<Option<String>, String> {
        let name = self.as_str();
        match read_env_strict(name)? {
            Some(value) if value.trim().is_empty() => Err(format!("{name} is set but blank")),
            other => Ok(other),
        }
    }
}

// ============================================================================
// SECTION: Harness Settings
// ============================================================================

/// Harness settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Fixed listen address, when pinned.
    pub http_bind: Option<String>,
    /// Minimum timeout, when stretched.
    pub timeout: Option<Duration>,
    /// Audit log destination; spawned servers run without audit when unset.
    pub audit_path: Option<PathBuf>,
}

impl SystemTestConfig {
    /// Resolves harness settings from the current environment.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending variable when a value is not
    /// UTF-8, is blank, or is not a positive number of seconds.
    pub fn load() -> Result<Self, String> {
        let timeout = match SystemTestEnv::TimeoutSeconds.read()? {
            Some(raw) => Some(whole_seconds(&raw)?),
            None => None,
        };
        Ok(Self {
            http_bind: SystemTestEnv::HttpBind.read()?,
            timeout,
            audit_path: SystemTestEnv::AuditPath.read()?.map(PathBuf::from),
        })
    }
}

// ============================================================================
// SECTION: Parsing
// ============================================================================

/// Reads a variable, failing when it holds invalid UTF-8.
///
/// # Errors
///
/// Returns a message naming the variable when its value is not UTF-8.
pub fn read_env_strict(name: &str) -> Result<Option<String>, String> {
    match std::env::var_os(name) {
        None => Ok(None),
        Some(raw) => raw.into_string().map(Some).map_err(|_| format!("{name} is not valid UTF-8")),
    }
}

/// Parses a timeout override; zero is rejected.
fn whole_seconds(raw: &str) -> Result<Duration, String> {
    let name = SystemTestEnv::TimeoutSeconds.as_str();
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(format!("{name} must be at least 1 second")),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(format!("{name} must be a whole number of seconds")),
    }
}
