use std::fmt;

use serde::{Deserialize, Serialize};

/// Molecular weight of water vapour (g/mol)
pub const WATER_VAPOR_WEIGHT: f64 = 18.0;

/// Molecular weight of molecular nitrogen (g/mol)
pub const MOLECULAR_NITROGEN_WEIGHT: f64 = 28.0;

/// Gases a planet may hold on to, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Molecule {
    MolecularHydrogen,
    Helium,
    Methane,
    Ammonia,
    WaterVapor,
    Neon,
    MolecularNitrogen,
    CarbonMonoxide,
    NitricOxide,
    MolecularOxygen,
    HydrogenSulfide,
    Argon,
    CarbonDioxide,
    NitrousOxide,
    NitrogenDioxide,
    Ozone,
    SulfurDioxide,
    SulfurTrioxide,
    Krypton,
    Xenon,
    /// Anything heavier than xenon
    Other,
}

impl Molecule {
    pub const ALL: [Molecule; 20] = [
        Molecule::MolecularHydrogen,
        Molecule::Helium,
        Molecule::Methane,
        Molecule::Ammonia,
        Molecule::WaterVapor,
        Molecule::Neon,
        Molecule::MolecularNitrogen,
        Molecule::CarbonMonoxide,
        Molecule::NitricOxide,
        Molecule::MolecularOxygen,
        Molecule::HydrogenSulfide,
        Molecule::Argon,
        Molecule::CarbonDioxide,
        Molecule::NitrousOxide,
        Molecule::NitrogenDioxide,
        Molecule::Ozone,
        Molecule::SulfurDioxide,
        Molecule::SulfurTrioxide,
        Molecule::Krypton,
        Molecule::Xenon,
    ];

    /// Molecular weight in g/mol; `None` for [`Molecule::Other`].
    pub fn weight(&self) -> Option<f64> {
        let weight = match self {
            Molecule::MolecularHydrogen => 2.0,
            Molecule::Helium => 4.0,
            Molecule::Methane => 16.0,
            Molecule::Ammonia => 17.0,
            Molecule::WaterVapor => WATER_VAPOR_WEIGHT,
            Molecule::Neon => 20.2,
            Molecule::MolecularNitrogen => MOLECULAR_NITROGEN_WEIGHT,
            Molecule::CarbonMonoxide => 28.0,
            Molecule::NitricOxide => 30.0,
            Molecule::MolecularOxygen => 32.0,
            Molecule::HydrogenSulfide => 34.1,
            Molecule::Argon => 39.9,
            Molecule::CarbonDioxide => 44.0,
            Molecule::NitrousOxide => 44.0,
            Molecule::NitrogenDioxide => 46.0,
            Molecule::Ozone => 48.0,
            Molecule::SulfurDioxide => 64.1,
            Molecule::SulfurTrioxide => 80.1,
            Molecule::Krypton => 83.8,
            Molecule::Xenon => 131.3,
            Molecule::Other => return None,
        };
        Some(weight)
    }

    pub fn formula(&self) -> &'static str {
        match self {
            Molecule::MolecularHydrogen => "H2",
            Molecule::Helium => "He",
            Molecule::Methane => "CH4",
            Molecule::Ammonia => "NH3",
            Molecule::WaterVapor => "H2O",
            Molecule::Neon => "Ne",
            Molecule::MolecularNitrogen => "N2",
            Molecule::CarbonMonoxide => "CO",
            Molecule::NitricOxide => "NO",
            Molecule::MolecularOxygen => "O2",
            Molecule::HydrogenSulfide => "H2S",
            Molecule::Argon => "Ar",
            Molecule::CarbonDioxide => "CO2",
            Molecule::NitrousOxide => "N2O",
            Molecule::NitrogenDioxide => "NO2",
            Molecule::Ozone => "O3",
            Molecule::SulfurDioxide => "SO2",
            Molecule::SulfurTrioxide => "SO3",
            Molecule::Krypton => "Kr",
            Molecule::Xenon => "Xe",
            Molecule::Other => "OTHER",
        }
    }

    /// Lightest listed gas whose weight exceeds the smallest weight a planet
    /// can retain.
    pub fn smallest_retained(molecule_weight: f64) -> Molecule {
        Molecule::ALL
            .into_iter()
            .find(|molecule| molecule.weight().is_some_and(|weight| molecule_weight < weight))
            .unwrap_or(Molecule::Other)
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formula())
    }
}
