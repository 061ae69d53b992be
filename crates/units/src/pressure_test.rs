mod tests {
    use approx::assert_relative_eq;

    use crate::pressure::Pressure;

    #[test]
    fn test_pressure_conversions() {
        let venus = Pressure::from_bars(92.0);
        assert_relative_eq!(venus.to_millibars(), 92_000.0);
        assert_relative_eq!(venus.to_earth_atmospheres(), 92.0);
        assert_relative_eq!(Pressure::from_millibars(6.0).to_bars(), 0.006);
    }

    #[test]
    fn test_zero_pressure() {
        assert!(Pressure::zero().is_zero());
        assert!(!Pressure::from_millibars(1e-9).is_zero());
    }
}
