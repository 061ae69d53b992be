mod tests {
    use approx::assert_relative_eq;

    use crate::velocity::Velocity;

    #[test]
    fn test_velocity_conversions() {
        let escape = Velocity::from_km_per_sec(11.2);
        assert_relative_eq!(escape.to_cm_per_sec(), 1.12e6);
        assert_relative_eq!(Velocity::from_cm_per_sec(5.0e4).to_km_per_sec(), 0.5);
    }

    #[test]
    fn test_velocity_ratio() {
        let escape = Velocity::from_km_per_sec(11.2);
        let rms = Velocity::from_km_per_sec(1.12);
        assert_relative_eq!(escape / rms, 10.0);
        assert_relative_eq!((rms * 5.0).to_km_per_sec(), 5.6);
    }
}
