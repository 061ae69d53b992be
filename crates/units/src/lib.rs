pub mod length;
pub mod mass;
pub mod pressure;
pub mod temperature;
pub mod time;
pub mod velocity;

#[cfg(test)]
mod pressure_test;
#[cfg(test)]
mod velocity_test;

pub use length::{CM_PER_AU, CM_PER_KM, EARTH_RADIUS_IN_KM, Length};
pub use mass::{EARTH_MASS_IN_GRAMS, EARTH_MASSES_PER_SOLAR_MASS, Mass, SOLAR_MASS_IN_GRAMS};
pub use pressure::{EARTH_SURFACE_PRESSURE_MB, Pressure};
pub use temperature::Temperature;
pub use time::{DAYS_IN_A_YEAR, SECONDS_PER_HOUR, Time};
pub use velocity::Velocity;
