//! Mathematical constants and nalgebra extensions for the tilt-compass library

use nalgebra::Vector3;

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Standard gravity in m/s², the unit accelerometer samples are expected in
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Extension trait for Vector3 operations
pub trait Vector3Ext {
    /// Whether every component is finite (no NaN or infinity)
    fn is_finite(&self) -> bool;

    /// Convert degrees to radians
    fn deg_to_rad(&self) -> Vector3<f32>;

    /// Convert radians to degrees
    fn rad_to_deg(&self) -> Vector3<f32>;
}

impl Vector3Ext for Vector3<f32> {
    fn is_finite(&self) -> bool {
        self.iter().all(|component| component.is_finite())
    }

    fn deg_to_rad(&self) -> Vector3<f32> {
        *self * DEG_TO_RAD
    }

    fn rad_to_deg(&self) -> Vector3<f32> {
        *self * RAD_TO_DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_finite() {
        assert!(Vector3::new(0.0f32, -9.8, 1e30).is_finite());
        assert!(!Vector3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Vector3::new(0.0, f32::INFINITY, 0.0).is_finite());
        assert!(!Vector3::new(0.0, 0.0, f32::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_angle_conversion() {
        let radians = Vector3::new(90.0f32, -180.0, 45.0).deg_to_rad();
        assert!((radians.x - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((radians.y + core::f32::consts::PI).abs() < 1e-6);

        let degrees = radians.rad_to_deg();
        assert!((degrees - Vector3::new(90.0, -180.0, 45.0)).magnitude() < 1e-4);
    }
}
