use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A feature flag and its current state.
#[derive(Debug, Serialize, ToSchema)]
pub struct FlagDto {
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFlagRequest {
    pub enabled: bool,
}
