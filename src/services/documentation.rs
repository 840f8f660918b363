use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for LogoTruffle Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::palette::create_palette,
        crate::routes::brands::generate_brand,
        crate::routes::brands::list_brands,
        crate::routes::brands::decode_share,
        crate::routes::logos::generate_logos,
        crate::routes::flags::list_flags,
        crate::routes::flags::update_flag,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::palette::PaletteRequest,
            crate::dto::palette::PaletteResponse,
            crate::dto::palette::ColorDto,
            crate::dto::brand::BrandInputDto,
            crate::dto::brand::BrandResponse,
            crate::dto::brand::BrandDto,
            crate::dto::brand::FontsDto,
            crate::dto::brand::VoiceDto,
            crate::dto::brand::ContrastDto,
            crate::dto::brand::SavedBrandDto,
            crate::dto::logo::LogoRequest,
            crate::dto::logo::LogoResponse,
            crate::dto::flags::FlagDto,
            crate::dto::flags::UpdateFlagRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "palette", description = "Palette engine"),
        (name = "brands", description = "Brand packages, history and share links"),
        (name = "logos", description = "Logo image generation"),
        (name = "flags", description = "Runtime feature flags"),
    )
)]
/// OpenAPI document covering every route and schema.
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/healthcheck",
            "/palette",
            "/brands",
            "/brands/generate",
            "/brands/share",
            "/logos",
            "/flags",
            "/flags/{name}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
