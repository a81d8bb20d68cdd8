//! 엔진 형상/운전점/연료 입력으로부터 동력, 효율, 연료소비율을 계산한다.
//!
//! 모든 함수는 부작용이 없는 순수 함수이며 같은 입력이면 항상 같은 결과를 낸다.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::inputs::{CycleType, EngineSpec, FuelSpec, OperatingPoint};
use crate::units::length::{to_meter, LengthUnit};
use crate::units::pressure::PA_PER_BAR;
use crate::units::volume::{from_cubic_meter, VolumeUnit};

/// 0이 되면 안 되는 분모 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denominator {
    IndicatedPower,
    BrakePower,
    FuelPower,
}

impl std::fmt::Display for Denominator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Denominator::IndicatedPower => "도시 동력(indicated power)",
            Denominator::BrakePower => "제동 동력(brake power)",
            Denominator::FuelPower => "연료 투입 동력(fuel power)",
        };
        f.write_str(name)
    }
}

/// 성능 계산 오류. 상위 입력 범위가 지켜지면 발생하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{0}이(가) 0 또는 NaN이므로 나눗셈을 수행할 수 없습니다")]
    InvalidDenominator(Denominator),
}

/// 성능 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceResult {
    /// 총 행정체적 [cc]
    pub swept_volume_cc: f64,
    /// 도시 동력 [kW]
    pub indicated_power_kw: f64,
    /// 제동 동력 [kW]
    pub brake_power_kw: f64,
    /// 마찰 동력 = 도시 - 제동 [kW]. 입력이 모순되면 음수일 수 있다.
    pub friction_power_kw: f64,
    /// 기계효율 [%]
    pub mechanical_efficiency_pct: f64,
    /// 제동 열효율 [%]
    pub brake_thermal_efficiency_pct: f64,
    /// 도시 열효율 [%]
    pub indicated_thermal_efficiency_pct: f64,
    /// 제동 연료소비율 [g/kWh]
    pub bsfc_g_per_kwh: f64,
    /// 도시 연료소비율 [g/kWh]
    pub isfc_g_per_kwh: f64,
    /// 입력 토크 그대로 [N·m]
    pub torque_nm: f64,
    /// 입력 IMEP 그대로 [bar]
    pub imep_bar: f64,
}

/// 피스톤 단면적 [m²].
pub fn piston_area_m2(bore_m: f64) -> f64 {
    (PI / 4.0) * bore_m.powi(2)
}

/// 총 행정체적 [cc].
pub fn swept_volume_cc(bore_mm: f64, stroke_mm: f64, cylinders: u32) -> f64 {
    let bore_m = to_meter(bore_mm, LengthUnit::Millimeter);
    let stroke_m = to_meter(stroke_mm, LengthUnit::Millimeter);
    let per_cylinder_m3 = piston_area_m2(bore_m) * stroke_m;
    from_cubic_meter(
        per_cylinder_m3 * f64::from(cylinders),
        VolumeUnit::CubicCentimeter,
    )
}

/// 회전 동력 P = 2πNT/60000 [kW].
pub fn brake_power_kw(rpm: f64, torque_nm: f64) -> f64 {
    (2.0 * PI * rpm * torque_nm) / (60.0 * 1000.0)
}

/// 실린더당 분당 폭발 횟수. 2행정은 매 회전, 4행정은 두 회전마다 한 번.
pub fn working_strokes_per_minute(cycle: CycleType, rpm: f64) -> f64 {
    match cycle {
        CycleType::TwoStroke => rpm,
        CycleType::FourStroke => rpm / 2.0,
    }
}

/// 도시 동력 IP = pmi·L·A·n·k / 60 [kW].
pub fn indicated_power_kw(spec: &EngineSpec, imep_bar: f64) -> f64 {
    let bore_m = to_meter(spec.bore_mm, LengthUnit::Millimeter);
    let stroke_m = to_meter(spec.stroke_mm, LengthUnit::Millimeter);
    let imep_pa = imep_bar * PA_PER_BAR;
    let n = working_strokes_per_minute(spec.cycle, spec.rpm);
    (imep_pa * stroke_m * piston_area_m2(bore_m) * n * f64::from(spec.cylinders)) / 60.0 / 1000.0
}

/// 연료 투입 열량 [kW] = (kg/h ÷ 3600) × kJ/kg.
pub fn fuel_power_kw(fuel: &FuelSpec) -> f64 {
    (fuel.fuel_consumption_kg_per_h / 3600.0) * fuel.calorific_value_kj_per_kg
}

fn nonzero(value: f64, which: Denominator) -> Result<f64, DomainError> {
    if value == 0.0 || value.is_nan() {
        Err(DomainError::InvalidDenominator(which))
    } else {
        Ok(value)
    }
}

/// 엔진 성능을 계산한다.
///
/// 분모(도시 동력, 연료 동력, 제동 동력)가 0이면 무한대나 NaN을 돌려주지 않고
/// `DomainError::InvalidDenominator`로 실패한다. 검사 순서는 나눗셈 순서와 같다.
pub fn compute(
    spec: &EngineSpec,
    op: &OperatingPoint,
    fuel: &FuelSpec,
) -> Result<PerformanceResult, DomainError> {
    let swept_volume = swept_volume_cc(spec.bore_mm, spec.stroke_mm, spec.cylinders);
    let brake_power = brake_power_kw(spec.rpm, op.torque_nm);
    let indicated_power = indicated_power_kw(spec, op.imep_bar);
    let friction_power = indicated_power - brake_power;
    let fuel_power = fuel_power_kw(fuel);

    let ip = nonzero(indicated_power, Denominator::IndicatedPower)?;
    let fp = nonzero(fuel_power, Denominator::FuelPower)?;
    let bp = nonzero(brake_power, Denominator::BrakePower)?;

    // g/h
    let fuel_mass_rate = fuel.fuel_consumption_kg_per_h * 1000.0;

    Ok(PerformanceResult {
        swept_volume_cc: swept_volume,
        indicated_power_kw: indicated_power,
        brake_power_kw: brake_power,
        friction_power_kw: friction_power,
        mechanical_efficiency_pct: (brake_power / ip) * 100.0,
        brake_thermal_efficiency_pct: (brake_power / fp) * 100.0,
        indicated_thermal_efficiency_pct: (indicated_power / fp) * 100.0,
        bsfc_g_per_kwh: fuel_mass_rate / bp,
        isfc_g_per_kwh: fuel_mass_rate / ip,
        torque_nm: op.torque_nm,
        imep_bar: op.imep_bar,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_rejects_nan() {
        assert_eq!(
            nonzero(f64::NAN, Denominator::FuelPower),
            Err(DomainError::InvalidDenominator(Denominator::FuelPower))
        );
        assert_eq!(nonzero(-1.0, Denominator::BrakePower), Ok(-1.0));
    }

    #[test]
    fn denominator_message_covers_nan() {
        let msg = DomainError::InvalidDenominator(Denominator::BrakePower).to_string();
        assert_eq!(
            msg,
            "제동 동력(brake power)이(가) 0 또는 NaN이므로 나눗셈을 수행할 수 없습니다"
        );
    }

    #[test]
    fn strokes_per_minute_by_cycle() {
        assert_eq!(working_strokes_per_minute(CycleType::TwoStroke, 3000.0), 3000.0);
        assert_eq!(working_strokes_per_minute(CycleType::FourStroke, 3000.0), 1500.0);
    }
}
