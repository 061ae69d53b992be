//! Central star scalars and stellar-mass-dependent limits for accretion.
//!
//! Everything the planet-forming process needs to know about its primary is
//! derived from the stellar mass ratio: luminosity, main-sequence lifetime,
//! the habitable ecosphere, and the extent of the dust disk.

pub mod sampling;
pub mod star;
pub mod zone;

#[cfg(test)]
mod star_test;

pub use sampling::{about, random_eccentricity, random_number};
pub use star::{Star, luminosity, main_sequence_lifetime};
pub use zone::{OrbitalZone, innermost_planet, outermost_planet, stellar_dust_limit};
