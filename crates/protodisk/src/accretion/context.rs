use serde::{Deserialize, Serialize};
use stellar::Star;
use units::{Length, Mass};

use crate::disk::constants::{
    ALPHA, B, CLOUD_ECCENTRICITY, DEFAULT_MAX_ACCRETION_ITERATIONS, DUST_DENSITY_COEFF, N,
};

/// Local dust density at `a` (solar masses per AU³).
pub fn dust_density(stellar_mass: Mass, a: Length) -> f64 {
    DUST_DENSITY_COEFF * stellar_mass.sqrt() * (-ALPHA * a.powf(1.0 / N)).exp()
}

/// Mass above which a body at perihelion `a(1 - e)` also captures gas.
pub fn critical_mass(a: Length, e: f64, stellar_luminosity: f64) -> Mass {
    let perihelion = a.to_au() * (1.0 - e);
    Mass::from_solar_masses(B * (perihelion * stellar_luminosity.sqrt()).powf(-0.75))
}

pub fn inner_effect_limit(a: Length, e: f64, reduced_mass: f64, cloud_eccentricity: f64) -> Length {
    a * ((1.0 - e) * (1.0 - reduced_mass) / (1.0 + cloud_eccentricity))
}

pub fn outer_effect_limit(a: Length, e: f64, reduced_mass: f64, cloud_eccentricity: f64) -> Length {
    a * ((1.0 + e) * (1.0 + reduced_mass) / (1.0 - cloud_eccentricity))
}

/// Per-candidate accretion parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccretionContext {
    /// Dust density at the candidate's orbit (solar masses per AU³)
    pub dust_density: f64,
    pub critical_mass: Mass,
    pub cloud_eccentricity: f64,
    pub max_iterations: usize,
}

impl AccretionContext {
    pub fn new(dust_density: f64, critical_mass: Mass) -> Self {
        Self {
            dust_density,
            critical_mass,
            cloud_eccentricity: CLOUD_ECCENTRICITY,
            max_iterations: DEFAULT_MAX_ACCRETION_ITERATIONS,
        }
    }

    /// Context for a candidate injected at `(a, e)` around `star`.
    pub fn for_orbit(star: &Star, a: Length, e: f64) -> Self {
        Self::new(dust_density(star.mass, a), critical_mass(a, e, star.luminosity))
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Inner and outer edges of the annulus swept by a body of `mass`.
    ///
    /// The inner edge never goes below the star.
    pub fn effect_limits(&self, a: Length, e: f64, mass: Mass) -> (Length, Length) {
        let reduced = mass.reduced();
        let inner = inner_effect_limit(a, e, reduced, self.cloud_eccentricity).max(Length::zero());
        let outer = outer_effect_limit(a, e, reduced, self.cloud_eccentricity);
        (inner, outer)
    }
}
