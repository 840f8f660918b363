use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::flags::{FlagDto, UpdateFlagRequest},
    error::AppError,
    services::flag_service,
    state::SharedState,
};

/// Feature flag listing and toggling.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/flags", get(list_flags))
        .route("/flags/{name}", put(update_flag))
}

/// List every feature flag with its current state.
#[utoipa::path(
    get,
    path = "/flags",
    tag = "flags",
    responses((status = 200, description = "Feature flags", body = [FlagDto]))
)]
pub async fn list_flags(State(state): State<SharedState>) -> Json<Vec<FlagDto>> {
    Json(flag_service::list_flags(&state).await)
}

/// Switch a feature flag on or off.
#[utoipa::path(
    put,
    path = "/flags/{name}",
    tag = "flags",
    params(("name" = String, Path, description = "Flag name, e.g. brand-voice")),
    request_body = UpdateFlagRequest,
    responses(
        (status = 200, description = "Updated flag", body = FlagDto),
        (status = 404, description = "Unknown flag")
    )
)]
pub async fn update_flag(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Json(payload): Json<UpdateFlagRequest>,
) -> Result<Json<FlagDto>, AppError> {
    Ok(Json(
        flag_service::set_flag(&state, &name, payload.enabled).await?,
    ))
}
