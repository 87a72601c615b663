#![no_std]

//! Tilt Compass - orientation core for a spirit level and compass display
//!
//! Combines the latest accelerometer and magnetometer readings into a
//! device-to-world rotation matrix, extracts azimuth, pitch and roll, and
//! turns them into what a spirit level + compass screen needs: four
//! directional highlight intensities and a compass rotation animation.
//!
//! # Features
//!
//! - Rotation matrix from gravity and geomagnetic vectors, with free-fall and
//!   parallel-field rejection
//! - Azimuth/pitch/roll extraction in degrees
//! - Configurable dead zone around level
//! - Clamped top/bottom/left/right highlight intensities with a color palette
//! - Compass rotation commands with a fixed animation length
//! - `#![no_std]` compatible, no allocation
//! - Optional `serde` support for settings and output types
//!   (the TOML settings tests only run with `cargo test --features serde`)
//!
//! # Quick Start
//!
//! ```rust
//! use tilt_compass::{SpiritLevel, VectorSample};
//!
//! let mut level = SpiritLevel::new();
//!
//! // Samples arrive one sensor at a time
//! level.process(VectorSample::acceleration(0.0, 0.0, 9.8)); // m/s²
//! let frame = level
//!     .process(VectorSample::magnetic_field(0.0, 22.0, -41.0)) // µT
//!     .unwrap();
//!
//! println!(
//!     "azimuth {:.1} pitch {:.1} roll {:.1}",
//!     frame.estimate.azimuth, frame.estimate.pitch, frame.estimate.roll
//! );
//! println!("top highlight {:.2}", frame.highlights.top.intensity);
//! println!("compass {} -> {}", frame.rotation.from, frame.rotation.to);
//! ```

pub mod compass;
mod drift;
mod error;
mod estimator;
mod highlight;
pub mod level;
mod math;
pub mod rotation;
mod types;

// Re-export all public types and functions
pub use compass::CompassRotationTracker;
pub use drift::suppress;
pub use error::EstimateError;
pub use estimator::OrientationEstimator;
pub use highlight::map_highlights;
pub use level::{LevelFrame, Presenter, SpiritLevel};
pub use math::{DEG_TO_RAD, RAD_TO_DEG, STANDARD_GRAVITY, Vector3Ext};
pub use types::*;
