//! Tests for retained gas classification

use crate::molecule::{MOLECULAR_NITROGEN_WEIGHT, Molecule, WATER_VAPOR_WEIGHT};

#[test]
fn test_lightest_gases() {
    assert_eq!(Molecule::smallest_retained(1.5), Molecule::MolecularHydrogen);
    assert_eq!(Molecule::smallest_retained(2.0), Molecule::Helium);
    assert_eq!(Molecule::smallest_retained(6.35), Molecule::Methane);
}

#[test]
fn test_shared_weights_resolve_to_first_listed() {
    // N2 and CO both weigh 28
    assert_eq!(Molecule::smallest_retained(27.0), Molecule::MolecularNitrogen);
    assert_eq!(Molecule::smallest_retained(28.0), Molecule::NitricOxide);
}

#[test]
fn test_heaviest_gases() {
    assert_eq!(Molecule::smallest_retained(100.0), Molecule::Krypton);
    assert_eq!(Molecule::smallest_retained(131.0), Molecule::Xenon);
    assert_eq!(Molecule::smallest_retained(131.3), Molecule::Other);
    assert_eq!(Molecule::smallest_retained(500.0), Molecule::Other);
}

#[test]
fn test_weights_ascend() {
    let weights: Vec<f64> = Molecule::ALL.iter().filter_map(|m| m.weight()).collect();
    assert!(weights.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(Molecule::Other.weight(), None);
}

#[test]
fn test_display_uses_formula() {
    assert_eq!(Molecule::CarbonDioxide.to_string(), "CO2");
    assert_eq!(Molecule::Other.to_string(), "OTHER");
}

#[test]
fn test_named_weights_match_table() {
    assert_eq!(Molecule::WaterVapor.weight(), Some(WATER_VAPOR_WEIGHT));
    assert_eq!(Molecule::MolecularNitrogen.weight(), Some(MOLECULAR_NITROGEN_WEIGHT));
    assert_eq!(Molecule::Other.weight(), None);
}
