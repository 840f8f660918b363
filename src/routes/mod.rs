use axum::Router;

use crate::state::SharedState;

/// Brand generation, history and share links.
pub mod brands;
/// Swagger UI and the raw OpenAPI document.
pub mod docs;
/// Feature flag listing and toggling.
pub mod flags;
/// Health check.
pub mod health;
/// Logo image generation.
pub mod logos;
/// Bare palette generation.
pub mod palette;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(palette::router())
        .merge(brands::router())
        .merge(logos::router())
        .merge(flags::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
