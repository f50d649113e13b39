//! Minimal health reporting for the evaluator service.
//!
//! Returns ok, build_id, and service_version; the surrounding deployment
//! owns how this is exposed (no HTTP surface lives in this workspace).

/// Version of the evaluator service contract.
pub const SERVICE_VERSION: &str = "1.0";

/// Health response record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    /// True when the process is up and healthy.
    pub ok: bool,
    /// Git commit SHA or build identifier.
    pub build_id: String,
    /// Service contract version (e.g., "1.0").
    pub service_version: String,
}

impl HealthResponse {
    /// Create a healthy response with the given build_id.
    pub fn healthy(build_id: impl Into<String>) -> Self {
        Self {
            ok: true,
            build_id: build_id.into(),
            service_version: SERVICE_VERSION.to_string(),
        }
    }

    /// Create an unhealthy response with the given build_id.
    pub fn unhealthy(build_id: impl Into<String>) -> Self {
        Self {
            ok: false,
            build_id: build_id.into(),
            service_version: SERVICE_VERSION.to_string(),
        }
    }
}

/// Check system health and return a HealthResponse.
///
/// The evaluator holds no connections and no state, so process-up is the
/// only health signal today.
pub fn check_health(build_id: &str) -> HealthResponse {
    HealthResponse::healthy(build_id)
}
