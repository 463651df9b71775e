mod tests {
    use approx::assert_relative_eq;

    use crate::energy::{Energy, EV_TO_J};

    #[test]
    fn test_energy_conversions() {
        let e = Energy::from_joules(EV_TO_J * 3.0);
        assert_relative_eq!(e.to_electron_volts(), 3.0);
        assert_relative_eq!(Energy::from_electron_volts(2.0).to_joules(), 2.0 * EV_TO_J);
    }

    #[test]
    fn test_energy_scaling() {
        let e = Energy::from_joules(2.0e-21);
        assert_relative_eq!((e * 3.0).to_joules(), 6.0e-21);
    }
}
