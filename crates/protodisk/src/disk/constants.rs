//! Dimensionless and solar-unit constants of the Dole accretion model.

use units::Mass;

/// Seed mass of an injected protoplanet (solar masses)
pub const PROTOPLANET_MASS: f64 = 1.0e-15;

/// Gas-to-dust mass ratio
pub const K: f64 = 50.0;

/// Critical-mass coefficient (solar masses)
pub const B: f64 = 1.2e-5;

/// Dust density coefficient (solar masses per AU³)
pub const DUST_DENSITY_COEFF: f64 = 2.0e-3;

/// Dust density falloff coefficient
pub const ALPHA: f64 = 5.0;

/// Dust density falloff root
pub const N: f64 = 3.0;

/// Eccentricity of the dust cloud particles
pub const CLOUD_ECCENTRICITY: f64 = 0.2;

/// Relative mass gain below which accretion is considered converged
pub const CONVERGENCE_TOLERANCE: f64 = 1.0e-4;

/// Default cap on accretion sweeps for a single body
pub const DEFAULT_MAX_ACCRETION_ITERATIONS: usize = 10_000;

pub fn protoplanet_mass() -> Mass {
    Mass::from_solar_masses(PROTOPLANET_MASS)
}
