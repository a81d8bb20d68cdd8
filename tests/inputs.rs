use engine_performance_estimator::engine::inputs::{self, InputError};
use engine_performance_estimator::engine::{CycleType, EngineInputs, FuelType};

#[test]
fn defaults_are_within_ranges() {
    let i = EngineInputs::default();
    assert!(i.validate().is_empty());
    assert_eq!(i.engine.bore_mm, 80.0);
    assert_eq!(i.engine.stroke_mm, 90.0);
    assert_eq!(i.engine.cylinders, 4);
    assert_eq!(i.engine.cycle, CycleType::FourStroke);
    assert_eq!(i.engine.compression_ratio, 9.5);
    assert_eq!(i.engine.rpm, 3000.0);
    assert_eq!(i.operating.imep_bar, 8.0);
    assert_eq!(i.operating.torque_nm, 150.0);
    assert_eq!(i.fuel.fuel_type, FuelType::Petrol);
    assert_eq!(i.fuel.calorific_value_kj_per_kg, 44_000.0);
    assert_eq!(i.fuel.fuel_consumption_kg_per_h, 5.0);
}

#[test]
fn validate_reports_each_offending_field() {
    let mut i = EngineInputs::default();
    i.engine.bore_mm = 5.0;
    i.operating.imep_bar = 31.0;
    let errors = i.validate();
    assert_eq!(
        errors,
        vec![
            InputError::OutOfRange {
                field: "bore_mm",
                value: 5.0,
                min: 10.0,
                max: 1000.0
            },
            InputError::OutOfRange {
                field: "imep_bar",
                value: 31.0,
                min: 1.0,
                max: 30.0
            },
        ]
    );
}

#[test]
fn clamped_pulls_values_to_bounds() {
    let mut i = EngineInputs::default();
    i.engine.cylinders = 16;
    i.engine.compression_ratio = 3.0;
    i.fuel.fuel_consumption_kg_per_h = f64::NAN;
    let c = i.clamped();
    assert_eq!(c.engine.cylinders, 12);
    assert_eq!(c.engine.compression_ratio, 6.0);
    assert_eq!(c.fuel.fuel_consumption_kg_per_h, inputs::FUEL_CONSUMPTION.default);
    assert!(c.validate().is_empty());
}

#[test]
fn fuel_change_resets_calorific_value() {
    let mut i = EngineInputs::default();
    i.fuel.calorific_value_kj_per_kg = 43_000.0;
    i.set_fuel_type(FuelType::Petrol);
    assert_eq!(i.fuel.calorific_value_kj_per_kg, 43_000.0);
    i.set_fuel_type(FuelType::Diesel);
    assert_eq!(i.fuel.calorific_value_kj_per_kg, 42_000.0);
    i.set_fuel_type(FuelType::Petrol);
    assert_eq!(i.fuel.calorific_value_kj_per_kg, 44_000.0);
}

#[test]
fn range_contains_is_inclusive() {
    assert!(inputs::RPM.contains(0.0));
    assert!(inputs::RPM.contains(8000.0));
    assert!(!inputs::RPM.contains(8000.1));
    assert!(!inputs::TORQUE_NM.contains(f64::NAN));
}
