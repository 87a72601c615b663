use tilt_compass::{SpiritLevel, VectorSample};

fn main() {
    let mut level = SpiritLevel::new();

    for step in 0..10 {
        // this loop should run each time the accelerometer or magnetometer reports
        let tilt = step as f32 * 0.5; // replace with actual readings in m/s²
        let acceleration = VectorSample::acceleration(0.0, tilt, 9.8);
        let magnetic = VectorSample::magnetic_field(0.0, 22.0, -41.0); // replace with µT readings

        level.process(magnetic);
        let Some(frame) = level.process(acceleration) else {
            continue;
        };

        println!(
            "Azimuth: {:.2}, Pitch: {:.2}, Roll: {:.2}, Top: {:.2}, Compass: {:.1} -> {:.1}",
            frame.estimate.azimuth,
            frame.estimate.pitch,
            frame.estimate.roll,
            frame.highlights.top.intensity,
            frame.rotation.from,
            frame.rotation.to
        );
    }
}
