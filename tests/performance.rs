use approx::{assert_abs_diff_eq, assert_relative_eq};
use engine_performance_estimator::engine::{
    self, compute, performance, CycleType, Denominator, DomainError, EngineInputs,
};

fn default_result() -> engine::PerformanceResult {
    let i = EngineInputs::default();
    compute(&i.engine, &i.operating, &i.fuel).expect("default inputs")
}

#[test]
fn reference_engine_matches_hand_calculation() {
    let r = default_result();
    // 80 × 90 mm, 4기통, 3000 rpm, 8 bar, 150 N·m
    assert_abs_diff_eq!(r.swept_volume_cc, 1809.557, epsilon = 1e-3);
    assert_abs_diff_eq!(r.brake_power_kw, 47.123_889, epsilon = 1e-5);
    assert_abs_diff_eq!(r.indicated_power_kw, 36.191_147, epsilon = 1e-4);
    assert_eq!(r.torque_nm, 150.0);
    assert_eq!(r.imep_bar, 8.0);
}

#[test]
fn derived_quantities_follow_power_balance() {
    let r = default_result();
    let fuel_kw = 5.0 / 3600.0 * 44_000.0;
    assert_relative_eq!(r.friction_power_kw, r.indicated_power_kw - r.brake_power_kw);
    assert_relative_eq!(
        r.mechanical_efficiency_pct,
        r.brake_power_kw / r.indicated_power_kw * 100.0
    );
    assert_relative_eq!(
        r.brake_thermal_efficiency_pct,
        r.brake_power_kw / fuel_kw * 100.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        r.indicated_thermal_efficiency_pct,
        r.indicated_power_kw / fuel_kw * 100.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(r.bsfc_g_per_kwh, 5000.0 / r.brake_power_kw);
    assert_relative_eq!(r.isfc_g_per_kwh, 5000.0 / r.indicated_power_kw);
}

#[test]
fn friction_power_may_be_negative() {
    // 기본 입력은 도시 동력이 제동 동력보다 작다. 값을 보정하지 않고 그대로 돌려준다.
    let r = default_result();
    assert!(r.friction_power_kw < 0.0);
    assert!(r.mechanical_efficiency_pct > 100.0);
}

#[test]
fn two_stroke_doubles_indicated_power() {
    let mut i = EngineInputs::default();
    let four = compute(&i.engine, &i.operating, &i.fuel).unwrap();
    i.engine.cycle = CycleType::TwoStroke;
    let two = compute(&i.engine, &i.operating, &i.fuel).unwrap();
    assert_relative_eq!(two.indicated_power_kw, 2.0 * four.indicated_power_kw);
    assert_relative_eq!(two.brake_power_kw, four.brake_power_kw);
    assert_relative_eq!(two.swept_volume_cc, four.swept_volume_cc);
}

#[test]
fn zero_torque_is_rejected() {
    let mut i = EngineInputs::default();
    i.operating.torque_nm = 0.0;
    assert_eq!(
        compute(&i.engine, &i.operating, &i.fuel),
        Err(DomainError::InvalidDenominator(Denominator::BrakePower))
    );
}

#[test]
fn zero_rpm_reports_indicated_power_first() {
    let mut i = EngineInputs::default();
    i.engine.rpm = 0.0;
    assert_eq!(
        compute(&i.engine, &i.operating, &i.fuel),
        Err(DomainError::InvalidDenominator(Denominator::IndicatedPower))
    );
}

#[test]
fn zero_fuel_consumption_is_rejected() {
    let mut i = EngineInputs::default();
    i.fuel.fuel_consumption_kg_per_h = 0.0;
    assert_eq!(
        compute(&i.engine, &i.operating, &i.fuel),
        Err(DomainError::InvalidDenominator(Denominator::FuelPower))
    );
}

#[test]
fn nan_torque_is_rejected() {
    let mut i = EngineInputs::default();
    i.operating.torque_nm = f64::NAN;
    assert_eq!(
        engine::analyze(&i).map(|a| a.result),
        Err(DomainError::InvalidDenominator(Denominator::BrakePower))
    );
}

#[test]
fn helper_formulas() {
    assert_relative_eq!(performance::piston_area_m2(0.1), std::f64::consts::PI * 0.0025);
    assert_relative_eq!(
        performance::brake_power_kw(6000.0, 100.0),
        2.0 * std::f64::consts::PI * 10.0
    );
    assert_relative_eq!(
        performance::swept_volume_cc(100.0, 100.0, 1),
        785.398_163_397,
        max_relative = 1e-9
    );
    let i = EngineInputs::default();
    assert_relative_eq!(performance::fuel_power_kw(&i.fuel), 61.111_111_111, max_relative = 1e-9);
}

#[test]
fn analyze_marks_current_operating_points() {
    let i = EngineInputs::default();
    let a = engine::analyze(&i).unwrap();
    assert_eq!(a.efficiency.current.x, i.engine.compression_ratio);
    assert_eq!(a.efficiency.current.y, a.result.brake_thermal_efficiency_pct);
    assert_eq!(a.power.current.x, i.engine.rpm);
    assert_eq!(a.power.current.y, a.result.brake_power_kw);
}

#[test]
fn swept_volume_grows_with_each_dimension() {
    let base = performance::swept_volume_cc(80.0, 90.0, 4);
    assert!(performance::swept_volume_cc(81.0, 90.0, 4) > base);
    assert!(performance::swept_volume_cc(80.0, 91.0, 4) > base);
    assert!(performance::swept_volume_cc(80.0, 90.0, 5) > base);
}
