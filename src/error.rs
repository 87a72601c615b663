//! Reasons an orientation estimate can be withheld

use crate::types::SensorSource;
use thiserror::Error;

/// Why [`OrientationEstimator::try_update`](crate::OrientationEstimator::try_update)
/// produced no estimate
///
/// None of these are fatal: the caller keeps showing the last estimate and
/// waits for the next sample.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EstimateError {
    /// No sample from this source has been observed yet
    #[error("no {0} sample observed yet")]
    MissingSample(SensorSource),

    /// The latest sample from this source contains NaN or infinity
    #[error("{0} sample is not finite")]
    NonFinite(SensorSource),

    /// Acceleration too small to give a gravity direction
    #[error("device in free fall: |a|² = {magnitude_squared}")]
    FreeFall {
        /// Squared acceleration magnitude of the rejected sample
        magnitude_squared: f32,
    },

    /// Magnetic field parallel to gravity, or too weak to give a heading
    #[error("magnetic field parallel to gravity: |m × a| = {horizontal_magnitude}")]
    ParallelField {
        /// Magnitude of `magnetic × acceleration`
        horizontal_magnitude: f32,
    },

    /// A vector magnitude computed from finite samples overflows `f32`
    #[error("sensor vector magnitude overflows f32")]
    Overflow,

    /// Angle extraction produced a non-finite value
    #[error("orientation angles are not finite")]
    NonFiniteOrientation,
}
