//! The central star of a generated system.
//!
//! A star is fully described by its mass ratio (solar masses). Luminosity
//! follows a piecewise mass–luminosity exponent, the main-sequence lifetime
//! scales as `M / L`, and the age is drawn uniformly between one billion
//! years and the lesser of six billion years and that lifetime.

use rand::Rng;
use serde::{Deserialize, Serialize};
use units::{Length, Mass, Time};

use crate::sampling::random_number;
use crate::zone::{OrbitalZone, innermost_planet, outermost_planet, stellar_dust_limit};

/// Main-sequence lifetime of the Sun, in years
pub const SOLAR_LIFETIME_YEARS: f64 = 1.0e10;

/// Youngest age a generated system may have, in years
pub const MIN_SYSTEM_AGE_YEARS: f64 = 1.0e9;

/// Oldest age a generated system may have, in years
pub const MAX_SYSTEM_AGE_YEARS: f64 = 6.0e9;

/// Greenhouse radius as a fraction of the ecosphere radius
pub const GREENHOUSE_RADIUS_FACTOR: f64 = 0.93;

/// Luminosity in solar luminosities for a main-sequence star of the given
/// mass ratio.
pub fn luminosity(mass_ratio: f64) -> f64 {
    let exponent = if mass_ratio < 1.0 {
        1.75 * (mass_ratio - 0.1) + 3.325
    } else {
        0.5 * (2.0 - mass_ratio) + 4.4
    };
    mass_ratio.powf(exponent)
}

/// Time spent on the main sequence.
pub fn main_sequence_lifetime(mass_ratio: f64, luminosity: f64) -> Time {
    Time::from_years(SOLAR_LIFETIME_YEARS * (mass_ratio / luminosity))
}

fn sample_age<R: Rng + ?Sized>(rng: &mut R, lifetime: Time) -> Time {
    let upper = if lifetime.to_years() >= MAX_SYSTEM_AGE_YEARS {
        MAX_SYSTEM_AGE_YEARS
    } else {
        lifetime.to_years()
    };
    Time::from_years(random_number(rng, MIN_SYSTEM_AGE_YEARS, upper))
}

/// System-level stellar scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub mass: Mass,
    /// Luminosity in solar luminosities (L☉)
    pub luminosity: f64,
    pub main_sequence_lifetime: Time,
    pub age: Time,
    pub ecosphere_radius: Length,
    pub greenhouse_radius: Length,
}

impl Star {
    /// Builds a star of the given mass ratio, drawing its age from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, mass_ratio: f64) -> Self {
        let lum = luminosity(mass_ratio);
        let lifetime = main_sequence_lifetime(mass_ratio, lum);
        let age = sample_age(rng, lifetime);
        Self::with_age(mass_ratio, age)
    }

    /// Builds a star with a known age.
    pub fn with_age(mass_ratio: f64, age: Time) -> Self {
        let lum = luminosity(mass_ratio);
        let ecosphere_radius = Length::from_au(lum.sqrt());

        Self {
            mass: Mass::from_solar_masses(mass_ratio),
            luminosity: lum,
            main_sequence_lifetime: main_sequence_lifetime(mass_ratio, lum),
            age,
            ecosphere_radius,
            greenhouse_radius: ecosphere_radius * GREENHOUSE_RADIUS_FACTOR,
        }
    }

    /// Stellar mass in solar masses.
    pub fn mass_ratio(&self) -> f64 {
        self.mass.to_solar_masses()
    }

    /// Outer edge of the protoplanetary dust disk.
    pub fn dust_limit(&self) -> Length {
        stellar_dust_limit(self.mass)
    }

    /// Closest orbit at which a protoplanet may be injected.
    pub fn innermost_planet(&self) -> Length {
        innermost_planet(self.mass)
    }

    /// Farthest orbit at which a protoplanet may be injected.
    pub fn outermost_planet(&self) -> Length {
        outermost_planet(self.mass)
    }

    pub fn orbital_zone(&self, semi_major_axis: Length) -> OrbitalZone {
        OrbitalZone::for_orbit(semi_major_axis, self.luminosity)
    }
}
