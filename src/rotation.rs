//! Rotation matrix from gravity and geomagnetic vectors
//!
//! The matrix rows are the east, north and up axes of the world frame
//! expressed in device coordinates, so `R * v` maps a device-frame vector
//! to the world frame.

use crate::error::EstimateError;
use crate::types::LevelSettings;
use core::f32::consts::PI;
use nalgebra::{ComplexField, Matrix3, RealField, Vector3};

/// Compute the device-to-world rotation matrix
///
/// Uses cross products of the acceleration (pointing up when the device is
/// at rest) and the magnetic field to build an orthonormal east/north/up
/// basis.
///
/// # Errors
/// - [`EstimateError::FreeFall`] when `|acceleration|²` is below
///   `settings.free_fall_gravity_squared`
/// - [`EstimateError::ParallelField`] when `|magnetic × acceleration|` is below
///   `settings.min_horizontal_field`
/// - [`EstimateError::Overflow`] when either magnitude is too large for `f32`
///
/// # Example
/// ```
/// use nalgebra::{Matrix3, Vector3};
/// use tilt_compass::{LevelSettings, rotation::rotation_matrix};
///
/// let accel = Vector3::new(0.0, 0.0, 9.8); // lying flat
/// let mag = Vector3::new(0.0, 50.0, 0.0);  // top edge pointing north
/// let r = rotation_matrix(accel, mag, &LevelSettings::default()).unwrap();
/// assert!((r - Matrix3::identity()).norm() < 1e-6);
/// ```
pub fn rotation_matrix(
    acceleration: Vector3<f32>,
    magnetic_field: Vector3<f32>,
    settings: &LevelSettings,
) -> Result<Matrix3<f32>, EstimateError> {
    let magnitude_squared = acceleration.magnitude_squared();
    if !magnitude_squared.is_finite() {
        return Err(EstimateError::Overflow);
    }
    if magnitude_squared < settings.free_fall_gravity_squared {
        return Err(EstimateError::FreeFall { magnitude_squared });
    }

    // East: magnetic × gravity
    let east = magnetic_field.cross(&acceleration);
    let horizontal_magnitude = ComplexField::sqrt(east.magnitude_squared());
    if !horizontal_magnitude.is_finite() {
        return Err(EstimateError::Overflow);
    }
    if horizontal_magnitude < settings.min_horizontal_field {
        return Err(EstimateError::ParallelField {
            horizontal_magnitude,
        });
    }

    let east = east / horizontal_magnitude;
    let up = acceleration / ComplexField::sqrt(magnitude_squared);
    let north = up.cross(&east);

    Ok(Matrix3::from_rows(&[
        east.transpose(),
        north.transpose(),
        up.transpose(),
    ]))
}

/// Extract azimuth, pitch and roll in radians from a rotation matrix
///
/// Returned as `(azimuth, pitch, roll)` in a vector:
/// - azimuth = atan2(R₀₁, R₁₁), in (-π, π]
/// - pitch = asin(-R₂₁)
/// - roll = atan2(-R₂₀, R₂₂)
pub fn orientation_angles(rotation: &Matrix3<f32>) -> Vector3<f32> {
    let mut azimuth = RealField::atan2(rotation[(0, 1)], rotation[(1, 1)]);
    // atan2 gives -π for a -0.0 numerator; due south is reported as +π
    if azimuth <= -PI {
        azimuth = PI;
    }
    // Clamp guards asin against rounding just past ±1
    let pitch = ComplexField::asin((-rotation[(2, 1)]).clamp(-1.0, 1.0));
    let roll = RealField::atan2(-rotation[(2, 0)], rotation[(2, 2)]);

    Vector3::new(azimuth, pitch, roll)
}
