//! Planetary characterization
//!
//! This crate turns accreted protoplanets into planets with physical,
//! orbital and environmental attributes: radius and density, rotation,
//! gas retention, surface pressure, and a surface temperature settled by
//! iterating albedo against water, ice and cloud cover.

pub mod atmosphere;
pub mod characterize;
pub mod constants;
pub mod interior;
pub mod molecule;
pub mod planet;
pub mod rotation;
pub mod temperature;

// Re-export key types at crate root
pub use characterize::characterize;
pub use molecule::Molecule;
pub use planet::Planet;
pub use rotation::Rotation;
pub use temperature::{DEFAULT_MAX_SURFACE_TEMP_ITERATIONS, SurfaceConditions, SurfaceInputs};

#[cfg(test)]
mod atmosphere_test;
#[cfg(test)]
mod characterize_test;
#[cfg(test)]
mod interior_test;
#[cfg(test)]
mod molecule_test;
