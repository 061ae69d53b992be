//! A fully characterized planet.

use serde::{Deserialize, Serialize};
use stellar::OrbitalZone;
use units::{Length, Mass, Pressure, Temperature, Time, Velocity};

use crate::molecule::Molecule;

/// Orbital, physical and environmental attributes of one planet.
///
/// Surface quantities are `None` for gas giants, which have no surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    /// Semi-major axis
    pub a: Length,
    /// Orbital eccentricity
    pub e: f64,
    pub mass: Mass,
    pub gas_giant: bool,
    pub orbit_zone: OrbitalZone,
    /// Equatorial radius
    pub radius: Length,
    /// Mean density (g/cm³)
    pub density: f64,
    pub orbital_period: Time,
    /// Length of the local day
    pub day: Time,
    /// True if locked in a spin-orbit resonance
    pub resonant_period: bool,
    /// Axial tilt (degrees)
    pub axial_tilt: f64,
    pub escape_velocity: Velocity,
    /// Surface acceleration (cm/s²)
    pub surface_accel: f64,
    /// Surface gravity (Earth gravities)
    pub surface_grav: Option<f64>,
    /// RMS velocity of molecular nitrogen in the exosphere
    pub rms_velocity: Velocity,
    /// Smallest molecular weight retained
    pub molecule_weight: f64,
    pub volatile_gas_inventory: Option<f64>,
    pub surface_pressure: Option<Pressure>,
    /// Runaway greenhouse effect
    pub greenhouse_effect: bool,
    /// Boiling point of water at the surface
    pub boil_point: Option<Temperature>,
    pub albedo: f64,
    pub surface_temp: Option<Temperature>,
    /// Fraction of the surface covered by water
    pub hydrosphere: Option<f64>,
    /// Fraction of the surface covered by clouds
    pub cloud_cover: Option<f64>,
    /// Fraction of the surface covered by ice
    pub ice_cover: Option<f64>,
    /// False if the surface temperature solver gave up before settling
    pub temperature_converged: bool,
}

impl Planet {
    pub fn smallest_retained_gas(&self) -> Molecule {
        Molecule::smallest_retained(self.molecule_weight)
    }

    pub fn mass_in_earth_masses(&self) -> f64 {
        self.mass.to_earth_masses()
    }

    pub fn radius_in_km(&self) -> f64 {
        self.radius.to_km()
    }

    /// Rocky planet whose surface sits between freezing and boiling with
    /// some open water.
    pub fn is_habitable_candidate(&self) -> bool {
        if self.gas_giant {
            return false;
        }

        match (self.surface_temp, self.boil_point, self.hydrosphere) {
            (Some(temp), Some(boil), Some(water)) => {
                temp > Temperature::water_freezing() && temp < boil && water > 0.0
            }
            _ => false,
        }
    }
}
