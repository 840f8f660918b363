/// Brand generation, history and share links.
pub mod brand_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Feature flag definitions and persistence.
pub mod flag_service;
/// Health check service.
pub mod health_service;
/// Logo image generation across the provider chain.
pub mod logo_service;
/// Bare palette generation.
pub mod palette_service;
