use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul};

use crate::length::CM_PER_KM;

/// A speed using f64 precision, stored in cm/s.
///
/// Escape and thermal (RMS) velocities in the Fogg model are worked in CGS
/// units; reports usually want km/s.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: cm/s

impl Velocity {
    pub fn from_cm_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * CM_PER_KM)
    }

    pub fn to_cm_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / CM_PER_KM
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

/// Ratio of two velocities, e.g. escape over RMS velocity
impl Div for Velocity {
    type Output = f64;

    fn div(self, rhs: Velocity) -> f64 {
        self.0 / rhs.0
    }
}
