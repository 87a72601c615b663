//! Core types and configuration for the tilt-compass library

use crate::compass::COMPASS_ANIMATION_MS;
use nalgebra::{Matrix3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sensor a [`VectorSample`] was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorSource {
    /// Accelerometer, in m/s² (gravity plus linear acceleration)
    Acceleration,
    /// Magnetometer, in µT
    MagneticField,
}

impl core::fmt::Display for SensorSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SensorSource::Acceleration => f.write_str("acceleration"),
            SensorSource::MagneticField => f.write_str("magnetic field"),
        }
    }
}

/// A single three-axis reading, tagged with the sensor it came from
///
/// # Example
/// ```
/// use tilt_compass::{SensorSource, VectorSample};
///
/// let sample = VectorSample::acceleration(0.0, 0.0, 9.8);
/// assert_eq!(sample.source(), SensorSource::Acceleration);
/// assert_eq!(sample.vector().z, 9.8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorSample {
    source: SensorSource,
    vector: Vector3<f32>,
}

impl VectorSample {
    /// Create a sample from a source tag and a vector
    pub fn new(source: SensorSource, vector: Vector3<f32>) -> Self {
        Self { source, vector }
    }

    /// Accelerometer sample from its components
    pub fn acceleration(x: f32, y: f32, z: f32) -> Self {
        Self::new(SensorSource::Acceleration, Vector3::new(x, y, z))
    }

    /// Magnetometer sample from its components
    pub fn magnetic_field(x: f32, y: f32, z: f32) -> Self {
        Self::new(SensorSource::MagneticField, Vector3::new(x, y, z))
    }

    pub fn source(&self) -> SensorSource {
        self.source
    }

    pub fn vector(&self) -> Vector3<f32> {
        self.vector
    }
}

/// Device orientation derived from one acceleration and one magnetic sample
///
/// Angles are in degrees:
/// - `azimuth`: heading about the vertical axis, (-180°, +180°], 0° = magnetic north
/// - `pitch`: rotation about the lateral axis, -90° to +90°
/// - `roll`: rotation about the longitudinal axis, -180° to +180°
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrientationEstimate {
    pub azimuth: f32,
    pub pitch: f32,
    pub roll: f32,
    /// Rotation matrix mapping device-frame vectors to the world frame
    /// (rows: east, north, up)
    pub rotation: Matrix3<f32>,
}

/// Color tag attached to a directional highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HighlightColor {
    Red,
    Green,
    Blue,
    Yellow,
}

impl HighlightColor {
    /// Packed opaque 0xAARRGGBB value for renderers that apply a color filter
    ///
    /// ```
    /// use tilt_compass::HighlightColor;
    ///
    /// assert_eq!(HighlightColor::Yellow.argb(), 0xFFFF_FF00);
    /// ```
    pub const fn argb(self) -> u32 {
        match self {
            HighlightColor::Red => 0xFFFF_0000,
            HighlightColor::Green => 0xFF00_FF00,
            HighlightColor::Blue => 0xFF00_00FF,
            HighlightColor::Yellow => 0xFFFF_FF00,
        }
    }
}

/// Colors used for each side of the spirit level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HighlightPalette {
    /// Shown when the device tilts with pitch <= 0
    pub top: HighlightColor,
    /// Shown when the device tilts with pitch > 0
    pub bottom: HighlightColor,
    /// Shown when the device tilts with roll > 0
    pub left: HighlightColor,
    /// Shown when the device tilts with roll <= 0
    pub right: HighlightColor,
}

impl Default for HighlightPalette {
    fn default() -> Self {
        Self {
            top: HighlightColor::Green,
            bottom: HighlightColor::Red,
            left: HighlightColor::Blue,
            right: HighlightColor::Yellow,
        }
    }
}

/// Intensity of one side of the spirit level together with its color
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Highlight {
    /// Opacity-like value in [0, 1]
    pub intensity: f32,
    pub color: HighlightColor,
}

impl Highlight {
    pub fn is_active(&self) -> bool {
        self.intensity > 0.0
    }
}

/// Highlight intensities for the four sides of the spirit level
///
/// At most one of `top`/`bottom` and at most one of `left`/`right` has a
/// nonzero intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IntensitySet {
    pub top: Highlight,
    pub bottom: Highlight,
    pub left: Highlight,
    pub right: Highlight,
}

impl IntensitySet {
    /// All four sides dark, colored from the palette
    pub fn dark(palette: &HighlightPalette) -> Self {
        let off = |color| Highlight {
            intensity: 0.0,
            color,
        };
        Self {
            top: off(palette.top),
            bottom: off(palette.bottom),
            left: off(palette.left),
            right: off(palette.right),
        }
    }
}

/// Compass animation for the external renderer to play
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RotationCommand {
    /// Start angle in degrees
    pub from: f32,
    /// End angle in degrees
    pub to: f32,
    /// Animation length in milliseconds
    pub duration_ms: u32,
}

/// Spirit level and compass settings
///
/// # Example
/// ```
/// use tilt_compass::{HighlightColor, HighlightPalette, LevelSettings};
///
/// let settings = LevelSettings {
///     drift_threshold_degrees: 1.0, // wider dead zone around level
///     palette: HighlightPalette {
///         top: HighlightColor::Blue,
///         ..Default::default()
///     },
///     ..Default::default()
/// };
/// assert_eq!(settings.compass_animation_ms, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelSettings {
    /// Pitch and roll below this magnitude (degrees) are reported as exactly 0
    pub drift_threshold_degrees: f32,
    /// Colors of the four directional highlights
    pub palette: HighlightPalette,
    /// Duration of each compass rotation animation in milliseconds
    pub compass_animation_ms: u32,
    /// Squared acceleration magnitude (m²/s⁴) under which the device is
    /// considered in free fall and no orientation is produced
    pub free_fall_gravity_squared: f32,
    /// Minimum magnitude of `magnetic × acceleration` for the two vectors to
    /// be treated as non-parallel
    pub min_horizontal_field: f32,
}

/// Gravity the free-fall threshold is scaled from, in m/s²
const FREE_FALL_REFERENCE_GRAVITY: f32 = 9.81;

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            drift_threshold_degrees: 0.05,
            palette: HighlightPalette::default(),
            compass_animation_ms: COMPASS_ANIMATION_MS,
            free_fall_gravity_squared: 0.01
                * FREE_FALL_REFERENCE_GRAVITY
                * FREE_FALL_REFERENCE_GRAVITY,
            min_horizontal_field: 0.1,
        }
    }
}
