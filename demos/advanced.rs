//! Spirit level with a terminal presenter
//!
//! Simulates a device being tilted and turned, feeds the accelerometer and
//! magnetometer samples through a [`SpiritLevel`], and renders each frame as
//! text. Includes a free-fall moment to show the display holding its last
//! state.
//!
//! Run with: `cargo run --example advanced`

use nalgebra::{UnitQuaternion, Vector3};
use tilt_compass::{
    HighlightColor, HighlightPalette, IntensitySet, LevelSettings, OrientationEstimate, Presenter,
    RotationCommand, STANDARD_GRAVITY, SensorSource, SpiritLevel, VectorSample,
};

const SAMPLE_COUNT: usize = 40;

/// Presenter that prints instead of drawing
struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn show_readings(&mut self, estimate: &OrientationEstimate) {
        print!(
            "azimuth {:>7.2}  pitch {:>7.2}  roll {:>7.2}",
            estimate.azimuth, estimate.pitch, estimate.roll
        );
    }

    fn show_highlights(&mut self, highlights: &IntensitySet) {
        let sides = [
            ("top", highlights.top),
            ("bottom", highlights.bottom),
            ("left", highlights.left),
            ("right", highlights.right),
        ];
        for (name, highlight) in sides {
            if highlight.is_active() {
                print!(
                    "  {}={:.2} #{:08X}",
                    name,
                    highlight.intensity,
                    highlight.color.argb()
                );
            }
        }
    }

    fn rotate_compass(&mut self, command: &RotationCommand) {
        println!(
            "  compass {:.1} -> {:.1} ({} ms)",
            command.from, command.to, command.duration_ms
        );
    }
}

/// Accelerometer and magnetometer samples for a device at the given attitude
fn simulate(attitude: UnitQuaternion<f32>) -> [VectorSample; 2] {
    let dip = 62.0f32.to_radians();
    let earth_field = Vector3::new(0.0, 48.0 * dip.cos(), -48.0 * dip.sin());
    let inverse = attitude.inverse();

    [
        VectorSample::new(
            SensorSource::Acceleration,
            inverse * Vector3::new(0.0, 0.0, STANDARD_GRAVITY),
        ),
        VectorSample::new(SensorSource::MagneticField, inverse * earth_field),
    ]
}

fn main() {
    let settings = LevelSettings {
        drift_threshold_degrees: 0.5,
        palette: HighlightPalette {
            top: HighlightColor::Blue,
            left: HighlightColor::Green,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut level = SpiritLevel::with_settings(settings);
    let mut presenter = TerminalPresenter;

    for i in 0..SAMPLE_COUNT {
        let t = i as f32 / SAMPLE_COUNT as f32;
        let attitude = UnitQuaternion::from_euler_angles(
            (30.0 * (t * 6.0).sin()).to_radians(),
            (15.0 * (t * 4.0).cos()).to_radians(),
            (-360.0 * t).to_radians(),
        );

        for sample in simulate(attitude) {
            if i == SAMPLE_COUNT / 2 && sample.source() == SensorSource::Acceleration {
                // Dropped: nothing is rendered, the previous frame stays up
                let free_fall = VectorSample::acceleration(0.0, 0.0, 0.0);
                if level.handle(free_fall, &mut presenter).is_none() {
                    println!("free fall, display held");
                }
                continue;
            }
            level.handle(sample, &mut presenter);
        }
    }
}
