//! Dole/Fogg planetary system generation.
//!
//! Draws a star, accretes planets out of its dust disk, and characterizes
//! each survivor. Every entry point is seeded from a [`Uuid`](uuid::Uuid),
//! so a system can be regenerated from its id alone.
//!
//! ```ignore
//! use accrete::{GenerationConfig, generate_stellar_system_named};
//!
//! let system = generate_stellar_system_named(&GenerationConfig::default(), "kepler-home")?;
//! for planet in &system.planets {
//!     println!("{:.3} AU  {:.2} M⊕", planet.a.to_au(), planet.mass_in_earth_masses());
//! }
//! ```

pub mod config;
pub mod error;
pub mod generation;
pub mod system;

#[cfg(test)]
mod system_test;

pub use config::GenerationConfig;
pub use error::{ConfigError, GenerationError};
pub use generation::{
    distribute_planetary_masses, generate_stellar_system, generate_stellar_system_named,
    generate_stellar_system_random, generate_stellar_system_with_rng,
};
pub use system::StellarSystem;

// Re-export the building blocks callers commonly need alongside a system
pub use planetary::{Molecule, Planet};
pub use protodisk::OrderingPolicy;
pub use stellar::{OrbitalZone, Star};
