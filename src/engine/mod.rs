//! 내연기관 성능 추정 코어. 입력 범위표, 성능 계산, 차트용 곡선 생성으로 구성한다.

pub mod curves;
pub mod inputs;
pub mod performance;

pub use curves::{efficiency_curve, power_curve, CurvePoint, EfficiencyCurve, PowerCurve};
pub use inputs::{CycleType, EngineInputs, EngineSpec, FuelSpec, FuelType, OperatingPoint};
pub use performance::{compute, Denominator, DomainError, PerformanceResult};

/// 성능 계산과 두 곡선을 한 번에 구한 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub result: PerformanceResult,
    pub efficiency: EfficiencyCurve,
    pub power: PowerCurve,
}

/// 입력 묶음으로 성능을 계산하고 차트 곡선까지 생성한다.
pub fn analyze(inputs: &EngineInputs) -> Result<Analysis, DomainError> {
    let result = compute(&inputs.engine, &inputs.operating, &inputs.fuel)?;
    let efficiency = efficiency_curve(
        inputs.fuel.fuel_type,
        inputs.engine.compression_ratio,
        result.brake_thermal_efficiency_pct,
    );
    let power = power_curve(result.torque_nm, inputs.engine.rpm, result.brake_power_kw);
    Ok(Analysis {
        result,
        efficiency,
        power,
    })
}
