// system-tests/tests/helpers/timeouts.rs
// ============================================================================
// Module: System Test Timeouts
// Description: Centralized timeout configuration with env overrides.
// Purpose: Keep system-test timeouts consistent and configurable across suites.
// ============================================================================

use std::time::Duration;

use system_tests::config::SystemTestConfig;

/// Default timeout for HTTP calls and readiness probes.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Returns the effective timeout, honoring `REST_SURVEY_SYSTEM_TEST_TIMEOUT_SEC`.
/// The override acts as a minimum so it never shortens a longer request.
pub fn resolve_timeout(requested: Duration) -> Result<Duration, String> {
    let config = SystemTestConfig::load()?;
    Ok(config.timeout.map_or(requested, |timeout| std::cmp::max(requested, timeout)))
}
