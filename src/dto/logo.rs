use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Caller-supplied (possibly hand-edited) logo prompt.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LogoRequest {
    #[validate(length(min = 1, max = 4000))]
    pub prompt: String,
    /// Variations to produce; clamped to 1..=4.
    #[serde(default = "default_count")]
    pub n: u32,
}

fn default_count() -> u32 {
    1
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoResponse {
    /// Image URLs, one per successful variation.
    pub images: Vec<String>,
}
