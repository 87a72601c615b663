//! Compass needle rotation for the external renderer

use crate::types::RotationCommand;

/// Default compass animation length in milliseconds
pub const COMPASS_ANIMATION_MS: u32 = 500;

/// Compass rotation tracker
///
/// Remembers the angle the compass image was last rotated to and turns each
/// new azimuth into an animation from there. The image rotates by the
/// negated azimuth so its north mark stays put while the device turns.
///
/// No wraparound handling is applied: going from azimuth 179° to -179°
/// animates 358° the long way round.
///
/// # Example
/// ```
/// use tilt_compass::CompassRotationTracker;
///
/// let mut tracker = CompassRotationTracker::new();
/// let command = tracker.advance(10.0);
/// assert_eq!((command.from, command.to, command.duration_ms), (0.0, -10.0, 500));
///
/// let command = tracker.advance(20.0);
/// assert_eq!((command.from, command.to), (-10.0, -20.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassRotationTracker {
    /// Angle the compass image currently rests at, in degrees
    current_azimuth: f32,
    duration_ms: u32,
}

impl CompassRotationTracker {
    /// Create a tracker at 0° with the default 500 ms animation
    pub fn new() -> Self {
        Self::with_duration(COMPASS_ANIMATION_MS)
    }

    /// Create a tracker at 0° with a custom animation length
    pub fn with_duration(duration_ms: u32) -> Self {
        Self {
            current_azimuth: 0.0,
            duration_ms,
        }
    }

    /// Produce the animation to the new azimuth (degrees) and remember its end
    pub fn advance(&mut self, azimuth: f32) -> RotationCommand {
        let command = RotationCommand {
            from: self.current_azimuth,
            to: -azimuth,
            duration_ms: self.duration_ms,
        };
        self.current_azimuth = command.to;

        log::trace!("compass {:.2} -> {:.2}", command.from, command.to);
        command
    }

    /// Angle the compass image currently rests at
    pub fn current_azimuth(&self) -> f32 {
        self.current_azimuth
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Return to 0°
    pub fn reset(&mut self) {
        self.current_azimuth = 0.0;
    }
}

impl Default for CompassRotationTracker {
    fn default() -> Self {
        Self::new()
    }
}
