use serde::{Deserialize, Serialize};

/// 연료 질량유량 단위. 내부 기준은 kg/h이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassFlowUnit {
    KilogramPerHour,
    GramPerSecond,
    KilogramPerSecond,
    PoundPerHour,
}

fn to_kg_per_h(value: f64, unit: MassFlowUnit) -> f64 {
    match unit {
        MassFlowUnit::KilogramPerHour => value,
        MassFlowUnit::GramPerSecond => value * 3.6,
        MassFlowUnit::KilogramPerSecond => value * 3600.0,
        MassFlowUnit::PoundPerHour => value * 0.453592,
    }
}

fn from_kg_per_h(value: f64, unit: MassFlowUnit) -> f64 {
    match unit {
        MassFlowUnit::KilogramPerHour => value,
        MassFlowUnit::GramPerSecond => value / 3.6,
        MassFlowUnit::KilogramPerSecond => value / 3600.0,
        MassFlowUnit::PoundPerHour => value / 0.453592,
    }
}

/// 질량유량을 변환한다.
pub fn convert_mass_flow(value: f64, from: MassFlowUnit, to: MassFlowUnit) -> f64 {
    let base = to_kg_per_h(value, from);
    from_kg_per_h(base, to)
}
