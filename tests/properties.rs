//! 유효 입력 범위 전체에 대한 성능 계산 성질 테스트.

use engine_performance_estimator::engine::{
    self, curves::CURVE_SAMPLES, CycleType, EngineInputs, FuelType,
};
use proptest::prelude::*;

fn arb_inputs() -> impl Strategy<Value = EngineInputs> {
    (
        (10.0f64..1000.0, 10.0f64..500.0, 1u32..=12, any::<bool>()),
        (6.0f64..20.0, 100.0f64..8000.0),
        (1.0f64..30.0, 10.0f64..1000.0),
        (any::<bool>(), 30_000.0f64..50_000.0, 0.1f64..100.0),
    )
        .prop_map(|((bore, stroke, cyl, two), (cr, rpm), (imep, torque), (diesel, cv, fc))| {
            let mut i = EngineInputs::default();
            i.engine.bore_mm = bore;
            i.engine.stroke_mm = stroke;
            i.engine.cylinders = cyl;
            i.engine.cycle = if two { CycleType::TwoStroke } else { CycleType::FourStroke };
            i.engine.compression_ratio = cr;
            i.engine.rpm = rpm;
            i.operating.imep_bar = imep;
            i.operating.torque_nm = torque;
            i.fuel.fuel_type = if diesel { FuelType::Diesel } else { FuelType::Petrol };
            i.fuel.calorific_value_kj_per_kg = cv;
            i.fuel.fuel_consumption_kg_per_h = fc;
            i
        })
}

proptest! {
    /// 범위 안의 입력은 항상 유한한 결과를 낸다.
    #[test]
    fn valid_inputs_give_finite_results(i in arb_inputs()) {
        prop_assert!(i.validate().is_empty());
        let a = engine::analyze(&i).unwrap();
        let r = a.result;
        for v in [
            r.swept_volume_cc, r.indicated_power_kw, r.brake_power_kw, r.friction_power_kw,
            r.mechanical_efficiency_pct, r.brake_thermal_efficiency_pct,
            r.indicated_thermal_efficiency_pct, r.bsfc_g_per_kwh, r.isfc_g_per_kwh,
        ] {
            prop_assert!(v.is_finite());
        }
        prop_assert!(r.swept_volume_cc > 0.0);
        prop_assert!(r.brake_power_kw > 0.0);
    }

    /// FP = IP − BP, BSFC·BP = 연료 g/h.
    #[test]
    fn power_balance_holds(i in arb_inputs()) {
        let r = engine::analyze(&i).unwrap().result;
        let diff = r.indicated_power_kw - r.brake_power_kw;
        let tol = 1e-9 * r.indicated_power_kw.abs().max(1.0);
        prop_assert!((r.friction_power_kw - diff).abs() <= tol);
        let g_per_h = i.fuel.fuel_consumption_kg_per_h * 1000.0;
        prop_assert!((r.bsfc_g_per_kwh * r.brake_power_kw - g_per_h).abs() <= 1e-9 * g_per_h);
        prop_assert!((r.isfc_g_per_kwh * r.indicated_power_kw - g_per_h).abs() <= 1e-9 * g_per_h);
    }

    /// 곡선 길이는 항상 50점이고 현재 운전점은 입력을 따른다.
    #[test]
    fn curves_have_fixed_length(i in arb_inputs()) {
        let a = engine::analyze(&i).unwrap();
        prop_assert_eq!(a.efficiency.theoretical.len(), CURVE_SAMPLES);
        prop_assert_eq!(a.efficiency.practical.len(), CURVE_SAMPLES);
        prop_assert_eq!(a.power.torque.len(), CURVE_SAMPLES);
        prop_assert_eq!(a.power.power.len(), CURVE_SAMPLES);
        prop_assert_eq!(a.power.current.x, i.engine.rpm);
        prop_assert_eq!(a.efficiency.current.x, i.engine.compression_ratio);
    }

    /// 행정 형식만 바꾸면 도시 동력은 정확히 두 배가 되고 나머지는 그대로이다.
    #[test]
    fn two_stroke_doubles_indicated_power(i in arb_inputs()) {
        let mut four = i;
        four.engine.cycle = CycleType::FourStroke;
        let mut two = i;
        two.engine.cycle = CycleType::TwoStroke;
        let r4 = engine::analyze(&four).unwrap().result;
        let r2 = engine::analyze(&two).unwrap().result;
        prop_assert!((r2.indicated_power_kw - 2.0 * r4.indicated_power_kw).abs()
            <= 1e-12 * r2.indicated_power_kw);
        prop_assert_eq!(r2.brake_power_kw, r4.brake_power_kw);
        prop_assert_eq!(r2.swept_volume_cc, r4.swept_volume_cc);
    }

    /// 범위 밖 값도 clamped() 후에는 검증을 통과한다.
    #[test]
    fn clamped_inputs_always_validate(bore in -1e4f64..1e4, rpm in -1e5f64..1e5, cyl in 0u32..64) {
        let mut i = EngineInputs::default();
        i.engine.bore_mm = bore;
        i.engine.rpm = rpm;
        i.engine.cylinders = cyl;
        prop_assert!(i.clamped().validate().is_empty());
    }
}
