//! Physical constants used by the planetary attribute formulas (CGS unless noted).

/// Gravitational constant (cm³ g⁻¹ s⁻²)
pub const GRAV_CONSTANT: f64 = 6.672e-8;

/// Angular momentum scaling constant for rotation (cm² s⁻² g⁻¹)
pub const J: f64 = 1.46e-19;

/// Molar gas constant (g m² s⁻² K⁻¹ mol⁻¹)
pub const MOLAR_GAS_CONST: f64 = 8314.41;

/// Exospheric temperature of the Earth (K)
pub const EARTH_EXOSPHERE_TEMP: f64 = 1273.0;

/// Escape-to-RMS velocity ratio above which a gas is retained
pub const GAS_RETENTION_THRESHOLD: f64 = 5.0;

pub const CM_PER_METER: f64 = 100.0;

/// Surface acceleration of the Earth (cm/s²)
pub const EARTH_ACCELERATION: f64 = 981.0;

/// Axial tilt of the Earth (degrees)
pub const EARTH_AXIAL_TILT: f64 = 23.4;

/// Effective temperature of the Earth (K)
pub const EARTH_EFFECTIVE_TEMP: f64 = 255.0;

pub const EARTH_ALBEDO: f64 = 0.39;

/// Cloud-covered area per kilogram of water vapour (km²/kg)
pub const CLOUD_COVERAGE_FACTOR: f64 = 1.839e-8;

/// Mass of water per unit of Earth's surface area (kg/km²)
pub const EARTH_WATER_MASS_PER_AREA: f64 = 3.83e15;

pub const EARTH_CONVECTION_FACTOR: f64 = 0.43;

pub const GAS_GIANT_ALBEDO: f64 = 0.5;
pub const CLOUD_ALBEDO: f64 = 0.52;
pub const AIRLESS_ROCKY_ALBEDO: f64 = 0.07;
pub const ROCKY_ALBEDO: f64 = 0.15;
pub const WATER_ALBEDO: f64 = 0.04;
pub const AIRLESS_ICE_ALBEDO: f64 = 0.5;
pub const ICE_ALBEDO: f64 = 0.7;

// Kothari's equation of state, scaled by 1e-20
pub const A1_20: f64 = 6.485e12;
pub const A2_20: f64 = 4.0032e-8;
pub const BETA_20: f64 = 5.71e12;

/// Water vapour growth rate with temperature (1/K)
pub const Q2_36: f64 = 0.0698;
