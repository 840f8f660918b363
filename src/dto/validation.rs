//! Validation helpers for DTOs.

use validator::ValidationError;

use crate::engine::Axis;

/// Validates that sliders hold one finite value in `[0, 100]` per personality axis.
///
/// # Examples
///
/// ```ignore
/// validate_sliders(&[50.0; 6])                // Ok
/// validate_sliders(&[50.0; 5])                // Err - wrong count
/// validate_sliders(&[0.0, 0.0, 0.0, 0.0, 0.0, 101.0]) // Err - out of range
/// ```
pub fn validate_sliders(sliders: &[f64]) -> Result<(), ValidationError> {
    if sliders.len() != Axis::ALL.len() {
        let mut err = ValidationError::new("sliders_length");
        err.message = Some(
            format!(
                "Expected {} slider values (got {})",
                Axis::ALL.len(),
                sliders.len()
            )
            .into(),
        );
        return Err(err);
    }

    if let Some((axis, value)) = Axis::ALL
        .iter()
        .zip(sliders)
        .find(|(_, value)| !value.is_finite() || !(0.0..=100.0).contains(*value))
    {
        let mut err = ValidationError::new("sliders_range");
        err.message = Some(format!("Slider {axis} must be within 0..=100 (got {value})").into());
        return Err(err);
    }

    Ok(())
}

/// Neutral slider vector used when a request omits it.
pub fn neutral_sliders() -> Vec<f64> {
    vec![50.0; Axis::ALL.len()]
}
