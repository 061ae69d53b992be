//! Orbital period, rotation and axial tilt.

use std::f64::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};
use stellar::sampling::about;
use units::{Length, Mass, SECONDS_PER_HOUR, Time};

use crate::constants::{EARTH_AXIAL_TILT, J};

/// Eccentricity above which a tidally slowed body settles into a spin
/// resonance instead of synchronous rotation
const RESONANCE_ECCENTRICITY: f64 = 0.01;

/// Moment-of-inertia coefficients
const GAS_GIANT_K2: f64 = 0.24;
const ROCKY_K2: f64 = 0.33;

/// Length of the local day and whether it is locked in a spin resonance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rotation {
    pub day: Time,
    pub resonant: bool,
}

/// Kepler's third law in solar units.
pub fn orbital_period(a: Length, planet_mass: Mass, stellar_mass: Mass) -> Time {
    let years = (a.to_au().powi(3) / (planet_mass + stellar_mass).to_solar_masses()).sqrt();
    Time::from_years(years)
}

/// Rotation period from Dole's angular momentum scaling.
///
/// A body whose natural day would be at least as long as its year has been
/// tidally slowed: eccentric orbits settle at `(1 - e) / (1 + e)` of the
/// orbital period, near-circular ones rotate synchronously.
pub fn day_length(mass: Mass, radius: Length, orbital_period: Time, e: f64, gas_giant: bool) -> Rotation {
    let k2 = if gas_giant { GAS_GIANT_K2 } else { ROCKY_K2 };
    let angular_velocity = (2.0 * J * mass.to_grams() / (k2 * radius.to_cm().powi(2))).sqrt();
    let natural_day = Time::from_hours(1.0 / ((angular_velocity / (2.0 * PI)) * SECONDS_PER_HOUR));

    if natural_day < orbital_period {
        return Rotation {
            day: natural_day,
            resonant: false,
        };
    }

    if e > RESONANCE_ECCENTRICITY {
        Rotation {
            day: orbital_period * ((1.0 - e) / (1.0 + e)),
            resonant: true,
        }
    } else {
        Rotation {
            day: orbital_period,
            resonant: false,
        }
    }
}

/// Axial tilt in degrees, growing weakly with orbital distance.
pub fn axial_tilt<R: Rng + ?Sized>(rng: &mut R, a: Length) -> f64 {
    (a.to_au().powf(0.2) * about(rng, EARTH_AXIAL_TILT, 0.4)) % 360.0
}
