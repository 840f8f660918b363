use axum::{Json, Router, extract::State, routing::post};
use axum_valid::Valid;

use crate::{
    dto::logo::{LogoRequest, LogoResponse},
    error::AppError,
    services::logo_service,
    state::SharedState,
};

/// Render logo images for a prompt through the provider chain.
#[utoipa::path(
    post,
    path = "/logos",
    tag = "logos",
    request_body = LogoRequest,
    responses(
        (status = 200, description = "Generated image URLs", body = LogoResponse),
        (status = 400, description = "Invalid prompt"),
        (status = 502, description = "Every provider failed"),
        (status = 503, description = "No provider configured")
    )
)]
pub async fn generate_logos(
    State(state): State<SharedState>,
    Valid(Json(request)): Valid<Json<LogoRequest>>,
) -> Result<Json<LogoResponse>, AppError> {
    Ok(Json(
        logo_service::generate_logos(&state, &request.prompt, request.n).await?,
    ))
}

/// Logo generation endpoint.
pub fn router() -> Router<SharedState> {
    Router::new().route("/logos", post(generate_logos))
}
