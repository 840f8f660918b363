use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use axum_valid::Valid;

use crate::{
    dto::brand::{BrandInputDto, BrandResponse, SavedBrandDto, ShareQuery},
    error::AppError,
    services::brand_service,
    state::SharedState,
};

/// Brand generation, history and share link endpoints.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/brands", get(list_brands))
        .route("/brands/generate", post(generate_brand))
        .route("/brands/share", get(decode_share))
}

/// Generate a complete brand package and append it to the history.
#[utoipa::path(
    post,
    path = "/brands/generate",
    tag = "brands",
    request_body = BrandInputDto,
    responses(
        (status = 200, description = "Generated brand package", body = BrandResponse),
        (status = 400, description = "Invalid inputs")
    )
)]
pub async fn generate_brand(
    State(state): State<SharedState>,
    Valid(Json(payload)): Valid<Json<BrandInputDto>>,
) -> Result<Json<BrandResponse>, AppError> {
    Ok(Json(
        brand_service::generate_brand(&state, payload.into()).await?,
    ))
}

/// List previously generated brands, oldest first.
#[utoipa::path(
    get,
    path = "/brands",
    tag = "brands",
    responses((status = 200, description = "Brand history", body = [SavedBrandDto]))
)]
pub async fn list_brands(State(state): State<SharedState>) -> Json<Vec<SavedBrandDto>> {
    Json(brand_service::list_brands(&state).await)
}

/// Decode the `brand` parameter of a share link back into wizard inputs.
#[utoipa::path(
    get,
    path = "/brands/share",
    tag = "brands",
    params(ShareQuery),
    responses(
        (status = 200, description = "Decoded brand inputs", body = BrandInputDto),
        (status = 400, description = "Malformed share payload"),
        (status = 409, description = "Share links are switched off")
    )
)]
pub async fn decode_share(
    State(state): State<SharedState>,
    Query(query): Query<ShareQuery>,
) -> Result<Json<BrandInputDto>, AppError> {
    Ok(Json(brand_service::decode_share(&state, &query.brand).await?))
}
