use serde::Serialize;
use utoipa::ToSchema;

/// Health payload returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// "ok", or "degraded" when logos cannot be generated or the store is failing.
    pub status: String,
    /// Image providers in the order they are tried.
    pub providers: Vec<String>,
}

impl HealthResponse {
    pub fn ok(providers: Vec<String>) -> Self {
        Self {
            status: "ok".to_string(),
            providers,
        }
    }

    pub fn degraded(providers: Vec<String>) -> Self {
        Self {
            status: "degraded".to_string(),
            providers,
        }
    }
}
