use serde::{Deserialize, Serialize};

/// Earth's mean surface pressure in millibars
pub const EARTH_SURFACE_PRESSURE_MB: f64 = 1000.0;

const MILLIBARS_PER_BAR: f64 = 1000.0;

/// Atmospheric pressure, stored in millibars.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pressure(f64); // Base unit: mb

impl Pressure {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_millibars(value: f64) -> Self {
        Self(value)
    }

    pub fn from_bars(value: f64) -> Self {
        Self(value * MILLIBARS_PER_BAR)
    }

    pub fn to_millibars(&self) -> f64 {
        self.0
    }

    pub fn to_bars(&self) -> f64 {
        self.0 / MILLIBARS_PER_BAR
    }

    /// Pressure relative to Earth's surface
    pub fn to_earth_atmospheres(&self) -> f64 {
        self.0 / EARTH_SURFACE_PRESSURE_MB
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}
