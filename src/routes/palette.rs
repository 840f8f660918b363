use axum::{Json, Router, routing::post};
use axum_valid::Valid;

use crate::{
    dto::palette::{PaletteRequest, PaletteResponse},
    services::palette_service,
    state::SharedState,
};

/// Generate a five-color palette from industry, values and sliders.
#[utoipa::path(
    post,
    path = "/palette",
    tag = "palette",
    request_body = PaletteRequest,
    responses(
        (status = 200, description = "Primary, Secondary, Accent, Background and Text colors", body = PaletteResponse),
        (status = 400, description = "Invalid inputs")
    )
)]
pub async fn create_palette(Valid(Json(request)): Valid<Json<PaletteRequest>>) -> Json<PaletteResponse> {
    Json(palette_service::generate(&request))
}

/// Palette endpoint.
pub fn router() -> Router<SharedState> {
    Router::new().route("/palette", post(create_palette))
}
