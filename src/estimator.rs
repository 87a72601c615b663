//! Orientation estimation from the latest accelerometer and magnetometer samples

use crate::error::EstimateError;
use crate::math::Vector3Ext;
use crate::rotation::{orientation_angles, rotation_matrix};
use crate::types::{LevelSettings, OrientationEstimate, SensorSource, VectorSample};
use nalgebra::Vector3;

/// Orientation estimator
///
/// Keeps the most recent sample of each source and recomputes the device
/// orientation whenever either one changes. A stale sample of the other
/// source is reused until that source reports again.
///
/// All state changes go through `&mut self`. Hosts that deliver samples from
/// several threads wrap the estimator in a single mutex and lock it per call.
///
/// # Example
/// ```
/// use tilt_compass::{OrientationEstimator, VectorSample};
///
/// let mut estimator = OrientationEstimator::new();
///
/// // Nothing until both sensors have reported
/// assert!(estimator.update(VectorSample::acceleration(0.0, 0.0, 9.8)).is_none());
///
/// let estimate = estimator
///     .update(VectorSample::magnetic_field(0.0, 50.0, 0.0))
///     .unwrap();
/// assert!(estimate.azimuth.abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct OrientationEstimator {
    settings: LevelSettings,
    /// Last accelerometer reading, `None` until the first one arrives
    acceleration: Option<Vector3<f32>>,
    /// Last magnetometer reading, `None` until the first one arrives
    magnetic_field: Option<Vector3<f32>>,
}

impl OrientationEstimator {
    /// Create an estimator with default settings
    pub fn new() -> Self {
        Self::with_settings(LevelSettings::default())
    }

    /// Create an estimator with the given settings
    pub fn with_settings(settings: LevelSettings) -> Self {
        Self {
            settings,
            acceleration: None,
            magnetic_field: None,
        }
    }

    /// Forget both retained samples
    pub fn reset(&mut self) {
        log::debug!("orientation estimator reset");
        self.acceleration = None;
        self.magnetic_field = None;
    }

    pub fn settings(&self) -> &LevelSettings {
        &self.settings
    }

    /// Replace the settings; retained samples are kept
    pub fn set_settings(&mut self, settings: LevelSettings) {
        self.settings = settings;
    }

    /// Latest accelerometer vector, if any
    pub fn acceleration(&self) -> Option<Vector3<f32>> {
        self.acceleration
    }

    /// Latest magnetometer vector, if any
    pub fn magnetic_field(&self) -> Option<Vector3<f32>> {
        self.magnetic_field
    }

    /// Store a sample and recompute the orientation
    ///
    /// Returns `None` when no estimate can be made (a source not yet seen,
    /// free fall, field parallel to gravity, non-finite or overflowing
    /// input). Callers keep
    /// whatever they displayed last.
    pub fn update(&mut self, sample: VectorSample) -> Option<OrientationEstimate> {
        match self.try_update(sample) {
            Ok(estimate) => Some(estimate),
            Err(error) => {
                log::debug!("orientation withheld: {}", error);
                None
            }
        }
    }

    /// Store a sample and recompute the orientation, reporting why none
    /// could be made
    ///
    /// # Errors
    /// See [`EstimateError`].
    pub fn try_update(
        &mut self,
        sample: VectorSample,
    ) -> Result<OrientationEstimate, EstimateError> {
        match sample.source() {
            SensorSource::Acceleration => self.acceleration = Some(sample.vector()),
            SensorSource::MagneticField => self.magnetic_field = Some(sample.vector()),
        }

        self.estimate()
    }

    /// Compute the orientation from the retained samples without storing anything
    ///
    /// # Errors
    /// See [`EstimateError`].
    pub fn estimate(&self) -> Result<OrientationEstimate, EstimateError> {
        let acceleration = self
            .acceleration
            .ok_or(EstimateError::MissingSample(SensorSource::Acceleration))?;
        let magnetic_field = self
            .magnetic_field
            .ok_or(EstimateError::MissingSample(SensorSource::MagneticField))?;

        if !acceleration.is_finite() {
            return Err(EstimateError::NonFinite(SensorSource::Acceleration));
        }
        if !magnetic_field.is_finite() {
            return Err(EstimateError::NonFinite(SensorSource::MagneticField));
        }

        let rotation = rotation_matrix(acceleration, magnetic_field, &self.settings)?;
        let angles = orientation_angles(&rotation).rad_to_deg();
        if !angles.is_finite() {
            return Err(EstimateError::NonFiniteOrientation);
        }

        log::trace!(
            "orientation azimuth={:.2} pitch={:.2} roll={:.2}",
            angles.x,
            angles.y,
            angles.z
        );

        Ok(OrientationEstimate {
            azimuth: angles.x,
            pitch: angles.y,
            roll: angles.z,
            rotation,
        })
    }
}

impl Default for OrientationEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> VectorSample {
        VectorSample::acceleration(0.0, 0.0, 9.8)
    }

    fn north() -> VectorSample {
        VectorSample::magnetic_field(0.0, 50.0, 0.0)
    }

    #[test]
    fn test_new_estimator() {
        let estimator = OrientationEstimator::new();
        assert!(estimator.acceleration().is_none());
        assert!(estimator.magnetic_field().is_none());
        assert_eq!(
            estimator.estimate(),
            Err(EstimateError::MissingSample(SensorSource::Acceleration))
        );
    }

    #[test]
    fn test_requires_both_sources() {
        let mut estimator = OrientationEstimator::new();
        assert_eq!(
            estimator.try_update(flat()),
            Err(EstimateError::MissingSample(SensorSource::MagneticField))
        );

        let mut estimator = OrientationEstimator::new();
        assert_eq!(
            estimator.try_update(north()),
            Err(EstimateError::MissingSample(SensorSource::Acceleration))
        );
        assert!(estimator.update(flat()).is_some());
    }

    #[test]
    fn test_level_north_estimate() {
        let mut estimator = OrientationEstimator::new();
        estimator.update(flat());
        let estimate = estimator.update(north()).unwrap();

        assert!(estimate.azimuth.abs() < 1e-4);
        assert!(estimate.pitch.abs() < 1e-4);
        assert!(estimate.roll.abs() < 1e-4);
    }

    #[test]
    fn test_overwrites_matching_slot_only() {
        let mut estimator = OrientationEstimator::new();
        estimator.update(flat());
        estimator.update(north());
        estimator.update(VectorSample::acceleration(1.0, 2.0, 9.0));

        assert_eq!(estimator.acceleration(), Some(Vector3::new(1.0, 2.0, 9.0)));
        assert_eq!(estimator.magnetic_field(), Some(Vector3::new(0.0, 50.0, 0.0)));
    }

    #[test]
    fn test_repeated_sample_is_idempotent() {
        let mut estimator = OrientationEstimator::new();
        estimator.update(north());
        let first = estimator.update(VectorSample::acceleration(0.5, -1.5, 9.6)).unwrap();
        let second = estimator.update(VectorSample::acceleration(0.5, -1.5, 9.6)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_free_fall_withholds_estimate() {
        let mut estimator = OrientationEstimator::new();
        estimator.update(north());
        assert!(matches!(
            estimator.try_update(VectorSample::acceleration(0.0, 0.0, 0.0)),
            Err(EstimateError::FreeFall { .. })
        ));

        // Recovers as soon as gravity is back
        assert!(estimator.update(flat()).is_some());
    }

    #[test]
    fn test_non_finite_samples_rejected() {
        let mut estimator = OrientationEstimator::new();
        estimator.update(north());
        assert_eq!(
            estimator.try_update(VectorSample::acceleration(f32::NAN, 0.0, 9.8)),
            Err(EstimateError::NonFinite(SensorSource::Acceleration))
        );

        estimator.update(flat());
        assert_eq!(
            estimator.try_update(VectorSample::magnetic_field(0.0, f32::INFINITY, 0.0)),
            Err(EstimateError::NonFinite(SensorSource::MagneticField))
        );
    }

    #[test]
    fn test_overflowing_sample_withheld() {
        let mut estimator = OrientationEstimator::new();
        estimator.update(north());
        let on_side = estimator.update(VectorSample::acceleration(9.8, 0.0, 0.0)).unwrap();
        assert!((on_side.roll + 90.0).abs() < 1e-3);

        // Finite, but |a|² overflows f32
        assert_eq!(
            estimator.try_update(VectorSample::acceleration(1e20, 0.0, 0.0)),
            Err(EstimateError::Overflow)
        );
        assert!(estimator.update(VectorSample::acceleration(1e20, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_reset_forgets_samples() {
        let mut estimator = OrientationEstimator::new();
        estimator.update(flat());
        estimator.update(north());
        estimator.reset();

        assert!(estimator.acceleration().is_none());
        assert!(estimator.update(flat()).is_none());
    }

    #[test]
    fn test_settings_control_free_fall_threshold() {
        let settings = LevelSettings {
            free_fall_gravity_squared: 0.0,
            ..Default::default()
        };
        let mut estimator = OrientationEstimator::with_settings(settings);
        estimator.update(north());

        // A weak but nonzero reading is accepted once the threshold is lowered
        let estimate = estimator.update(VectorSample::acceleration(0.0, 0.0, 0.5)).unwrap();
        assert!(estimate.pitch.abs() < 1e-4);
        assert_eq!(estimator.settings().free_fall_gravity_squared, 0.0);
    }
}
