//! Dead zone for pitch and roll around level

use nalgebra::ComplexField;

/// Zero pitch and roll whose magnitude is below `threshold` degrees
///
/// Each axis is handled independently. Values at or above the threshold pass
/// through unchanged.
///
/// # Example
/// ```
/// use tilt_compass::suppress;
///
/// assert_eq!(suppress(0.04, -0.06, 0.05), (0.0, -0.06));
/// ```
pub fn suppress(pitch: f32, roll: f32, threshold: f32) -> (f32, f32) {
    (dead_zone(pitch, threshold), dead_zone(roll, threshold))
}

#[inline]
fn dead_zone(value: f32, threshold: f32) -> f32 {
    if ComplexField::abs(value) < threshold {
        0.0
    } else {
        value
    }
}
