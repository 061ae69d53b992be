use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Earth days per Earth year
pub const DAYS_IN_A_YEAR: f64 = 365.256;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

const YEARS_PER_MYR: f64 = 1.0e6;
const YEARS_PER_GYR: f64 = 1.0e9;

/// A physical time quantity using f64 precision.
///
/// Years are the base unit. Orbital periods are usually read in days and
/// rotation periods in hours; stellar ages and lifetimes in years or Myr.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let year = Time::from_days(365.256);
/// let day = Time::from_hours(24.0);
///
/// assert!((year.to_years() - 1.0).abs() < 1e-12);
/// assert!(day < year);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in years.
    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Time` from a value in million years.
    pub fn from_myr(value: f64) -> Self {
        Self(value * YEARS_PER_MYR)
    }

    /// Creates a new `Time` from a value in billion years.
    pub fn from_gyr(value: f64) -> Self {
        Self(value * YEARS_PER_GYR)
    }

    /// Creates a new `Time` from a value in days.
    pub fn from_days(value: f64) -> Self {
        Self(value / DAYS_IN_A_YEAR)
    }

    /// Creates a new `Time` from a value in hours.
    pub fn from_hours(value: f64) -> Self {
        Self::from_days(value / HOURS_PER_DAY)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self::from_hours(value / SECONDS_PER_HOUR)
    }

    /// Returns the time in years.
    pub fn to_years(&self) -> f64 {
        self.0
    }

    /// Converts the time to million years.
    pub fn to_myr(&self) -> f64 {
        self.0 / YEARS_PER_MYR
    }

    /// Converts the time to days.
    pub fn to_days(&self) -> f64 {
        self.0 * DAYS_IN_A_YEAR
    }

    /// Converts the time to hours.
    pub fn to_hours(&self) -> f64 {
        self.to_days() * HOURS_PER_DAY
    }

    /// Converts the time to seconds.
    pub fn to_seconds(&self) -> f64 {
        self.to_hours() * SECONDS_PER_HOUR
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}

impl Mul<Time> for f64 {
    type Output = Time;

    fn mul(self, rhs: Time) -> Time {
        rhs * self
    }
}
