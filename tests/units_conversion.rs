use approx::assert_relative_eq;
use engine_performance_estimator::{
    conversion::{self, ConversionError},
    quantity::QuantityKind,
    units::*,
};

#[test]
fn engine_units_convert_both_ways() {
    use LengthUnit::{Inch, Millimeter};
    use VolumeUnit::{CubicCentimeter, CubicInch, Liter};

    assert_relative_eq!(convert_length(25.4, Millimeter, Inch), 1.0, max_relative = 1e-12);
    assert_relative_eq!(convert_volume(1.0, Liter, CubicCentimeter), 1000.0);
    assert_relative_eq!(
        convert_volume(1.0, CubicInch, CubicCentimeter),
        16.387_064,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        convert_pressure(1.0, PressureUnit::Bar, PressureUnit::KiloPascal),
        100.0
    );
    assert_relative_eq!(
        convert_power(1.0, PowerUnit::Horsepower, PowerUnit::Watt),
        745.699_872,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        convert_torque(1.0, TorqueUnit::KilogramForceMeter, TorqueUnit::NewtonMeter),
        9.806_65
    );
    assert_relative_eq!(
        convert_mass_flow(1.0, MassFlowUnit::KilogramPerSecond, MassFlowUnit::KilogramPerHour),
        3600.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        convert_specific_energy(1.0, SpecificEnergyUnit::MjPerKg, SpecificEnergyUnit::KjPerKg),
        1000.0,
        max_relative = 1e-12
    );
}

#[test]
fn string_units_are_case_insensitive() {
    let hp = conversion::convert(QuantityKind::Power, 100.0, "kW", "HP").unwrap();
    assert_relative_eq!(hp, 134.102_208_9, max_relative = 1e-8);
    let lbft = conversion::convert(QuantityKind::Torque, 100.0, "Nm", "lbft").unwrap();
    assert_relative_eq!(lbft, 73.756_214_8, max_relative = 1e-8);
    let cc = conversion::convert(QuantityKind::Volume, 2.0, "L", "cc").unwrap();
    assert_relative_eq!(cc, 2000.0);
}

#[test]
fn unknown_unit_is_an_error() {
    assert_eq!(
        conversion::convert(QuantityKind::Pressure, 1.0, "bar", "atm"),
        Err(ConversionError::UnknownUnit("atm".into()))
    );
}

#[test]
fn quantity_names_in_both_languages() {
    assert_eq!(conversion::parse_quantity("Torque").unwrap(), QuantityKind::Torque);
    assert_eq!(conversion::parse_quantity("배기량").unwrap(), QuantityKind::Volume);
    assert!(matches!(
        conversion::parse_quantity("temperature"),
        Err(ConversionError::UnsupportedQuantity(_))
    ));
    for kind in QuantityKind::ALL {
        assert!(!kind.unit_hint().is_empty());
    }
}

#[test]
fn conversions_invert_each_other() {
    let v = 123.456;
    let ps = convert_power(v, PowerUnit::Kilowatt, PowerUnit::MetricHorsepower);
    let back = convert_power(ps, PowerUnit::MetricHorsepower, PowerUnit::Kilowatt);
    assert_relative_eq!(back, v, max_relative = 1e-12);

    let psi = convert_pressure(v, PressureUnit::Bar, PressureUnit::Psi);
    let back = convert_pressure(psi, PressureUnit::Psi, PressureUnit::Bar);
    assert_relative_eq!(back, v, max_relative = 1e-12);

    let lbft = convert_torque(v, TorqueUnit::NewtonMeter, TorqueUnit::PoundFoot);
    let back = convert_torque(lbft, TorqueUnit::PoundFoot, TorqueUnit::NewtonMeter);
    assert_relative_eq!(back, v, max_relative = 1e-12);

    use SpecificEnergyUnit::{KcalPerKg, KjPerKg};
    let kcal = convert_specific_energy(v, KjPerKg, KcalPerKg);
    assert_relative_eq!(convert_specific_energy(kcal, KcalPerKg, KjPerKg), v, max_relative = 1e-12);
}
