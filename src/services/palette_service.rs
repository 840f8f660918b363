use tracing::debug;

use crate::{
    dto::palette::{ColorDto, PaletteRequest, PaletteResponse},
    engine::{UniformSource, generate_palette},
};

/// Run the engine once for the requested industry, values and sliders.
pub fn generate(request: &PaletteRequest) -> PaletteResponse {
    let palette = generate_palette(
        &request.industry,
        &request.values,
        &request.personality(),
        &mut UniformSource::thread(),
    );
    debug!(
        industry = %request.industry,
        primary = %palette.primary().hex,
        "palette generated"
    );
    PaletteResponse {
        colors: palette.colors().iter().map(ColorDto::from).collect(),
    }
}
