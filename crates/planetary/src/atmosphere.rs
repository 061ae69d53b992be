//! Gas retention and the volatile inventory.
//!
//! A planet keeps a gas when its escape velocity is at least five times the
//! gas's RMS velocity at the exospheric temperature. The retained volatiles
//! set the surface pressure and with it the boiling point of water.
//!
//! # References
//! - Fogg (1985) - "Extra-Solar Planetary Systems", eqs. 15-18 and 21

use rand::Rng;
use stellar::OrbitalZone;
use stellar::sampling::about;
use units::{
    EARTH_MASSES_PER_SOLAR_MASS, EARTH_RADIUS_IN_KM, Length, Mass, Pressure, Temperature, Velocity,
};

use crate::constants::{
    CM_PER_METER, EARTH_ACCELERATION, EARTH_EXOSPHERE_TEMP, GAS_RETENTION_THRESHOLD, GRAV_CONSTANT,
    MOLAR_GAS_CONST,
};

pub fn escape_velocity(mass: Mass, radius: Length) -> Velocity {
    Velocity::from_cm_per_sec((2.0 * GRAV_CONSTANT * mass.to_grams() / radius.to_cm()).sqrt())
}

/// RMS velocity of a gas of the given molecular weight in the exosphere at `a`.
pub fn rms_velocity(molecular_weight: f64, a: Length) -> Velocity {
    let exospheric_temp = EARTH_EXOSPHERE_TEMP / a.to_au().powi(2);
    Velocity::from_cm_per_sec((3.0 * MOLAR_GAS_CONST * exospheric_temp / molecular_weight).sqrt() * CM_PER_METER)
}

/// Smallest molecular weight the planet can retain.
pub fn molecule_limit(mass: Mass, radius: Length) -> f64 {
    let v_escape = escape_velocity(mass, radius).to_cm_per_sec();
    3.0 * (GAS_RETENTION_THRESHOLD * CM_PER_METER).powi(2) * MOLAR_GAS_CONST * EARTH_EXOSPHERE_TEMP
        / v_escape.powi(2)
}

/// Surface acceleration in cm/s².
pub fn surface_acceleration(mass: Mass, radius: Length) -> f64 {
    GRAV_CONSTANT * mass.to_grams() / radius.to_cm().powi(2)
}

/// Surface gravity in Earth gravities.
pub fn surface_gravity(acceleration: f64) -> f64 {
    acceleration / EARTH_ACCELERATION
}

/// Runaway greenhouse: inside the greenhouse radius and in the hot zone.
pub fn greenhouse(zone: OrbitalZone, a: Length, greenhouse_radius: Length) -> bool {
    a < greenhouse_radius && zone == OrbitalZone::Inner
}

/// Dimensionless volatile gas inventory.
///
/// Without a runaway greenhouse, 99% of the volatiles are locked in surface
/// reservoirs.
pub fn volatile_inventory<R: Rng + ?Sized>(
    rng: &mut R,
    mass: Mass,
    escape_velocity: Velocity,
    rms_velocity: Velocity,
    stellar_mass: Mass,
    zone: OrbitalZone,
    greenhouse_effect: bool,
) -> f64 {
    if escape_velocity / rms_velocity < GAS_RETENTION_THRESHOLD {
        return 0.0;
    }

    let proportion = match zone {
        OrbitalZone::Inner => 100_000.0,
        OrbitalZone::Middle => 75_000.0,
        OrbitalZone::Outer => 250.0,
    };
    let earth_masses = mass.to_solar_masses() * EARTH_MASSES_PER_SOLAR_MASS;
    // The ±0.2 spread can push tiny bodies below zero
    let inventory = about(rng, proportion * earth_masses / stellar_mass.to_solar_masses(), 0.2).max(0.0);

    if greenhouse_effect { inventory } else { inventory / 100.0 }
}

pub fn surface_pressure(volatile_inventory: f64, radius: Length, gravity: f64) -> Pressure {
    let radius_ratio = EARTH_RADIUS_IN_KM / radius.to_km();
    Pressure::from_millibars(volatile_inventory * gravity / radius_ratio.powi(2))
}

/// Boiling point of water; `None` without an atmosphere.
pub fn boiling_point(surface_pressure: Pressure) -> Option<Temperature> {
    let millibars = surface_pressure.to_millibars();
    if millibars <= 0.0 || !millibars.is_finite() {
        return None;
    }

    let kelvin = 1.0 / (surface_pressure.to_bars().ln() / -5050.5 + 1.0 / 373.0);
    Some(Temperature::from_kelvin(kelvin))
}
