//! Bulk structure: radius and density.
//!
//! Rocky bodies get their radius from Kothari's equation of state for a cold
//! sphere of a zone-dependent composition. Gas giants use an empirical
//! density fit and the radius of a sphere of that density.
//!
//! # References
//! - Kothari (1936) - "The Internal Constitution of Planets", MNRAS 96, eq. 23
//! - Fogg (1985) - "Extra-Solar Planetary Systems", eq. 9

use std::f64::consts::PI;

use stellar::OrbitalZone;
use units::{EARTH_MASSES_PER_SOLAR_MASS, Length, Mass, SOLAR_MASS_IN_GRAMS};

use crate::constants::{A1_20, A2_20, BETA_20};

/// Mean atomic weight and atomic number of a body's material.
fn composition(gas_giant: bool, zone: OrbitalZone) -> (f64, f64) {
    match (zone, gas_giant) {
        (OrbitalZone::Inner, true) => (9.5, 4.5),
        (OrbitalZone::Inner, false) => (15.0, 8.0),
        (OrbitalZone::Middle, true) => (2.47, 2.0),
        (OrbitalZone::Middle, false) => (10.0, 5.0),
        (OrbitalZone::Outer, true) => (7.0, 4.0),
        (OrbitalZone::Outer, false) => (10.0, 5.0),
    }
}

/// Equatorial radius from Kothari's mass–radius relation.
pub fn kothari_radius(mass: Mass, gas_giant: bool, zone: OrbitalZone) -> Length {
    let (atomic_weight, atomic_num) = composition(gas_giant, zone);
    let m = mass.to_solar_masses();

    let scale = 2.0 * BETA_20 * SOLAR_MASS_IN_GRAMS.powf(1.0 / 3.0)
        / (A1_20 * (atomic_weight * atomic_num).powf(1.0 / 3.0));
    let compression = 1.0
        + A2_20 * atomic_weight.powf(4.0 / 3.0) * SOLAR_MASS_IN_GRAMS.powf(2.0 / 3.0) * m.powf(2.0 / 3.0)
            / (A1_20 * atomic_num.powi(2));

    Length::from_cm(scale / compression * m.powf(1.0 / 3.0))
}

/// Density in g/cm³ from Fogg's empirical fit.
pub fn empirical_density(mass: Mass, a: Length, ecosphere_radius: Length, gas_giant: bool) -> f64 {
    let density = (mass.to_solar_masses() * EARTH_MASSES_PER_SOLAR_MASS).powf(1.0 / 8.0)
        * (ecosphere_radius / a).powf(0.25);

    if gas_giant { density * 1.2 } else { density * 5.5 }
}

/// Radius of a uniform sphere of the given mass and density (g/cm³).
pub fn volume_radius(mass: Mass, density: f64) -> Length {
    let volume = mass.to_grams() / density;
    Length::from_cm((3.0 * volume / (4.0 * PI)).powf(1.0 / 3.0))
}

/// Mean density in g/cm³ of a sphere with the given equatorial radius.
pub fn volume_density(mass: Mass, radius: Length) -> f64 {
    let volume = 4.0 * PI * radius.to_cm().powi(3) / 3.0;
    mass.to_grams() / volume
}
