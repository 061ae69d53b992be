use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of the Sun in grams, as used by Dole and Fogg
pub const SOLAR_MASS_IN_GRAMS: f64 = 1.989e33;

/// Mass of the Earth in grams
pub const EARTH_MASS_IN_GRAMS: f64 = 5.977e27;

/// Earth masses per solar mass
pub const EARTH_MASSES_PER_SOLAR_MASS: f64 = 332_775.64;

/// A physical mass quantity using f64 precision.
///
/// The base unit is the solar mass, the natural unit for accretion: a
/// protoplanet seed is 10⁻¹⁵ M☉ and a gas giant is a few 10⁻³ M☉.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let earth = Mass::from_earth_masses(1.0);
/// let sun = Mass::from_solar_masses(1.0);
///
/// assert!((sun / earth - 332_775.64).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Solar Masses

impl Mass {
    /// Creates a zero mass value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in solar masses.
    pub fn from_solar_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value / EARTH_MASSES_PER_SOLAR_MASS)
    }

    /// Creates a new `Mass` from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value / SOLAR_MASS_IN_GRAMS)
    }

    /// Returns the mass in solar masses.
    pub fn to_solar_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * EARTH_MASSES_PER_SOLAR_MASS
    }

    /// Converts the mass to grams.
    pub fn to_grams(&self) -> f64 {
        self.0 * SOLAR_MASS_IN_GRAMS
    }

    /// Dole's reduced mass term, `(m / (1 + m))^(1/4)` with `m` in solar
    /// masses. Scales how far a body's gravity reaches into the dust cloud.
    pub fn reduced(&self) -> f64 {
        (self.0 / (1.0 + self.0)).powf(0.25)
    }

    /// Power function
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }

    /// Square root
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Division of Mass by Mass returns a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}
