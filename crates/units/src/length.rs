use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Centimeters per astronomical unit
pub const CM_PER_AU: f64 = 1.495978707e13;
/// Centimeters per kilometer
pub const CM_PER_KM: f64 = 1.0e5;
/// Earth's equatorial radius in kilometers
pub const EARTH_RADIUS_IN_KM: f64 = 6378.0;

/// A physical length quantity using f64 precision.
///
/// The base unit is the astronomical unit (AU), which is what orbital
/// distances and dust band edges are measured in. Planetary radii are usually
/// built with [`Length::from_km`] and read back with [`Length::to_km`].
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let orbit = Length::from_au(1.0);
/// let radius = Length::from_km(6378.0);
///
/// assert!(orbit > radius);
/// assert!((radius.to_earth_radii() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value * CM_PER_KM / CM_PER_AU)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value / CM_PER_AU)
    }

    /// Creates a new `Length` from a value in Earth radii.
    pub fn from_earth_radii(value: f64) -> Self {
        Self::from_km(value * EARTH_RADIUS_IN_KM)
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * CM_PER_AU / CM_PER_KM
    }

    /// Converts the length to centimeters.
    pub fn to_cm(&self) -> f64 {
        self.0 * CM_PER_AU
    }

    /// Converts the length to Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.to_km() / EARTH_RADIUS_IN_KM
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 { self } else { other }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 { self } else { other }
    }

    /// Absolute value, useful for orbital separations.
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Raise to a real power (dimensionless result)
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }

    /// Square root of the value in AU
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
