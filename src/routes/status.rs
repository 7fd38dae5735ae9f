//! Status endpoints: health aggregation and version.

use std::collections::BTreeMap;

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

const CHECK_PROCESS: &str = "process";
const CHECK_ENV_VARS: &str = "env_vars";
const CHECK_CONTENT_DATA: &str = "content_data";

/// Outcome of a single health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Ok,
    Error,
}

/// Aggregate health report, computed fresh per request and never persisted.
#[derive(Debug, Serialize)]
pub struct HealthSummary {
    pub status: CheckStatus,
    pub checks: BTreeMap<&'static str, CheckStatus>,
    pub env: String,
    pub version: String,
    pub uptime_seconds: f64,
}

/// Version response body.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: String,
}

/// Folds individual check outcomes into an overall status.
fn overall(checks: &BTreeMap<&'static str, CheckStatus>) -> CheckStatus {
    if checks.values().all(|status| *status == CheckStatus::Ok) {
        CheckStatus::Ok
    } else {
        CheckStatus::Error
    }
}

/// `GET /health` - runs the process, configuration, and content checks.
///
/// The process check is pure liveness and always passes when the handler runs
/// at all. Responds 200 when every check passes, 503 with the same body
/// otherwise.
#[instrument(name = "status::health", skip(state))]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthSummary>) {
    let mut checks = BTreeMap::new();
    checks.insert(CHECK_PROCESS, CheckStatus::Ok);

    let missing = state.config.missing_required();
    if missing.is_empty() {
        checks.insert(CHECK_ENV_VARS, CheckStatus::Ok);
    } else {
        tracing::warn!(?missing, "Required configuration absent");
        checks.insert(CHECK_ENV_VARS, CheckStatus::Error);
    }

    if state.content.has_content() {
        checks.insert(CHECK_CONTENT_DATA, CheckStatus::Ok);
    } else {
        tracing::warn!(
            puns = state.content.pun_count(),
            facts = state.content.fact_count(),
            "Content sequence empty"
        );
        checks.insert(CHECK_CONTENT_DATA, CheckStatus::Error);
    }

    let status = overall(&checks);
    let summary = HealthSummary {
        status,
        checks,
        env: state.config.environment.clone(),
        version: state.config.version.clone().unwrap_or_default(),
        uptime_seconds: state.uptime_seconds(),
    };

    let code = match status {
        CheckStatus::Ok => StatusCode::OK,
        CheckStatus::Error => StatusCode::SERVICE_UNAVAILABLE,
    };
    (code, Json(summary))
}

/// `GET /version` - the configured version string, byte-for-byte.
#[instrument(name = "status::version", skip(state))]
pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    let version = state.config.version.clone().unwrap_or_default();
    Json(VersionResponse { version })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_is_ok_when_every_check_passes() {
        let mut checks = BTreeMap::new();
        checks.insert(CHECK_PROCESS, CheckStatus::Ok);
        checks.insert(CHECK_ENV_VARS, CheckStatus::Ok);
        checks.insert(CHECK_CONTENT_DATA, CheckStatus::Ok);
        assert_eq!(overall(&checks), CheckStatus::Ok);
    }

    #[test]
    fn overall_is_error_when_any_check_fails() {
        let mut checks = BTreeMap::new();
        checks.insert(CHECK_PROCESS, CheckStatus::Ok);
        checks.insert(CHECK_CONTENT_DATA, CheckStatus::Error);
        assert_eq!(overall(&checks), CheckStatus::Error);
    }

    #[test]
    fn check_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CheckStatus::Ok).unwrap(), "\"ok\"");
        assert_eq!(
            serde_json::to_string(&CheckStatus::Error).unwrap(),
            "\"error\""
        );
    }
}
