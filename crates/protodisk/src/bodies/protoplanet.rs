use serde::{Deserialize, Serialize};
use units::{Length, Mass};

/// A body that has finished accreting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protoplanet {
    /// Semi-major axis
    pub a: Length,
    /// Eccentricity, `0 <= e < 1`
    pub e: f64,
    pub mass: Mass,
    pub gas_giant: bool,
}

impl Protoplanet {
    pub fn new(a: Length, e: f64, mass: Mass) -> Self {
        Self {
            a,
            e,
            mass,
            gas_giant: false,
        }
    }

    pub fn reduced_mass(&self) -> f64 {
        self.mass.reduced()
    }

    /// How far past aphelion this body's influence extends, measured from `a`.
    pub fn outward_reach(&self) -> Length {
        self.a * ((1.0 + self.e) * (1.0 + self.reduced_mass())) - self.a
    }

    /// How far inside perihelion this body's influence extends, measured from `a`.
    pub fn inward_reach(&self) -> Length {
        self.a - self.a * ((1.0 - self.e) * (1.0 - self.reduced_mass()))
    }

    /// True if the orbits come within either body's reach of each other.
    pub fn overlaps(&self, other: &Protoplanet) -> bool {
        let separation = other.a - self.a;
        let (own_reach, other_reach) = if separation > Length::zero() {
            (self.outward_reach(), other.inward_reach())
        } else {
            (self.inward_reach(), other.outward_reach())
        };

        let gap = separation.abs();
        gap <= own_reach.abs() || gap <= other_reach.abs()
    }
}

/// Orbit of the body formed by merging `first` and `second`.
///
/// The semi-major axis is the mass-weighted harmonic mean. The eccentricity
/// follows from conserving the combined specific angular momentum; a
/// non-physical result collapses to a circular orbit.
pub fn merged_orbit(first: &Protoplanet, second: &Protoplanet) -> (Length, f64) {
    let (m1, m2) = (first.mass.to_solar_masses(), second.mass.to_solar_masses());
    let (a1, a2) = (first.a.to_au(), second.a.to_au());
    let total = m1 + m2;

    let a = total / (m1 / a1 + m2 / a2);

    let momentum = m1 * a1.sqrt() * (1.0 - first.e.powi(2)).sqrt()
        + m2 * a2.sqrt() * (1.0 - second.e.powi(2)).sqrt();
    let h = momentum / (total * a.sqrt());

    let mut e_squared = 1.0 - h * h;
    if !(0.0..1.0).contains(&e_squared) {
        e_squared = 0.0;
    }

    (Length::from_au(a), e_squared.sqrt())
}
