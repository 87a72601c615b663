//! Spirit level highlights from pitch and roll

use crate::types::{HighlightPalette, IntensitySet};
use nalgebra::ComplexField;

/// Tilt in degrees that drives a highlight to full intensity
const FULL_TILT_DEGREES: f32 = 90.0;

/// Map pitch and roll (degrees) to the four directional highlights
///
/// - pitch > 0 lights `bottom`, otherwise `top`
/// - roll > 0 lights `left`, otherwise `right`
///
/// The lit side gets `|angle| / 90` clamped to [0, 1]; its opposite stays at
/// 0. An angle of exactly 0 selects `top`/`right` with zero intensity.
/// Colors come from the palette.
///
/// # Example
/// ```
/// use tilt_compass::{HighlightColor, HighlightPalette, map_highlights};
///
/// let set = map_highlights(45.0, -95.0, &HighlightPalette::default());
/// assert_eq!(set.bottom.intensity, 0.5);
/// assert_eq!(set.bottom.color, HighlightColor::Red);
/// assert_eq!(set.top.intensity, 0.0);
/// assert_eq!(set.right.intensity, 1.0); // clamped
/// assert_eq!(set.left.intensity, 0.0);
/// ```
pub fn map_highlights(pitch: f32, roll: f32, palette: &HighlightPalette) -> IntensitySet {
    let mut set = IntensitySet::dark(palette);

    let vertical = if pitch > 0.0 {
        &mut set.bottom
    } else {
        &mut set.top
    };
    vertical.intensity = tilt_intensity(pitch);

    let horizontal = if roll > 0.0 {
        &mut set.left
    } else {
        &mut set.right
    };
    horizontal.intensity = tilt_intensity(roll);

    set
}

/// `|angle| / 90` clamped to [0, 1]; NaN maps to 0
#[inline]
fn tilt_intensity(angle: f32) -> f32 {
    if angle.is_nan() {
        return 0.0;
    }
    ComplexField::abs(angle / FULL_TILT_DEGREES).min(1.0)
}
