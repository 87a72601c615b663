//! Spirit level + compass pipeline
//!
//! Wires the estimator, drift dead zone, highlight mapping and compass
//! tracker together and hands the results to a [`Presenter`].

use crate::compass::CompassRotationTracker;
use crate::drift::suppress;
use crate::estimator::OrientationEstimator;
use crate::highlight::map_highlights;
use crate::types::{
    IntensitySet, LevelSettings, OrientationEstimate, RotationCommand, VectorSample,
};

/// Renderer for the spirit level and compass
///
/// Only called when a new orientation is available; between calls the
/// presenter keeps showing what it was last given.
pub trait Presenter {
    /// Show the azimuth, pitch and roll readings (before the dead zone)
    fn show_readings(&mut self, estimate: &OrientationEstimate);

    /// Apply opacity and color to the four directional highlights
    fn show_highlights(&mut self, highlights: &IntensitySet);

    /// Animate the compass image
    fn rotate_compass(&mut self, command: &RotationCommand);
}

/// Everything derived from one accepted sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelFrame {
    /// Raw orientation
    pub estimate: OrientationEstimate,
    /// Pitch after the dead zone, in degrees
    pub pitch: f32,
    /// Roll after the dead zone, in degrees
    pub roll: f32,
    pub highlights: IntensitySet,
    pub rotation: RotationCommand,
}

/// Spirit level and compass driven by raw sensor samples
///
/// # Example
/// ```
/// use tilt_compass::{SpiritLevel, VectorSample};
///
/// let mut level = SpiritLevel::new();
/// level.process(VectorSample::acceleration(0.0, 0.0, 9.8));
///
/// let frame = level.process(VectorSample::magnetic_field(0.0, 50.0, 0.0)).unwrap();
/// assert_eq!((frame.pitch, frame.roll), (0.0, 0.0));
/// assert_eq!(frame.rotation.duration_ms, 500);
/// ```
#[derive(Debug, Clone)]
pub struct SpiritLevel {
    estimator: OrientationEstimator,
    compass: CompassRotationTracker,
}

impl SpiritLevel {
    /// Create a spirit level with default settings
    pub fn new() -> Self {
        Self::with_settings(LevelSettings::default())
    }

    /// Create a spirit level with the given settings
    pub fn with_settings(settings: LevelSettings) -> Self {
        Self {
            estimator: OrientationEstimator::with_settings(settings),
            compass: CompassRotationTracker::with_duration(settings.compass_animation_ms),
        }
    }

    pub fn settings(&self) -> &LevelSettings {
        self.estimator.settings()
    }

    pub fn estimator(&self) -> &OrientationEstimator {
        &self.estimator
    }

    pub fn compass(&self) -> &CompassRotationTracker {
        &self.compass
    }

    /// Forget retained samples and return the compass to 0°
    pub fn reset(&mut self) {
        self.estimator.reset();
        self.compass.reset();
    }

    /// Feed one sample and compute the resulting frame
    ///
    /// Returns `None`, leaving the compass untouched, when no orientation can
    /// be estimated yet.
    pub fn process(&mut self, sample: VectorSample) -> Option<LevelFrame> {
        let estimate = self.estimator.update(sample)?;
        let settings = self.estimator.settings();

        let (pitch, roll) = suppress(
            estimate.pitch,
            estimate.roll,
            settings.drift_threshold_degrees,
        );
        let highlights = map_highlights(pitch, roll, &settings.palette);
        let rotation = self.compass.advance(estimate.azimuth);

        Some(LevelFrame {
            estimate,
            pitch,
            roll,
            highlights,
            rotation,
        })
    }

    /// Feed one sample and forward the resulting frame to the presenter
    ///
    /// The presenter is not called when no orientation is available.
    pub fn handle<P: Presenter + ?Sized>(
        &mut self,
        sample: VectorSample,
        presenter: &mut P,
    ) -> Option<LevelFrame> {
        let frame = self.process(sample)?;

        presenter.show_readings(&frame.estimate);
        presenter.show_highlights(&frame.highlights);
        presenter.rotate_compass(&frame.rotation);

        Some(frame)
    }
}

impl Default for SpiritLevel {
    fn default() -> Self {
        Self::new()
    }
}
