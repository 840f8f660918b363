use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report `ok` when logos can be generated and the store answers.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let providers: Vec<String> = state
        .logos()
        .provider_names()
        .into_iter()
        .map(String::from)
        .collect();

    let store_ok = match state.store().health_check() {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            false
        }
    };

    if providers.is_empty() {
        warn!("no image provider configured (degraded mode)");
    }

    if store_ok && !providers.is_empty() {
        HealthResponse::ok(providers)
    } else {
        HealthResponse::degraded(providers)
    }
}
