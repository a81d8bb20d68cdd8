use serde::{Deserialize, Serialize};

/// 연료 발열량 단위. 내부 기준은 kJ/kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificEnergyUnit {
    KjPerKg,
    MjPerKg,
    KcalPerKg,
    BtuPerPound,
}

fn to_base(value: f64, unit: SpecificEnergyUnit) -> f64 {
    match unit {
        SpecificEnergyUnit::KjPerKg => value,
        SpecificEnergyUnit::MjPerKg => value * 1000.0,
        SpecificEnergyUnit::KcalPerKg => value * 4.184,
        SpecificEnergyUnit::BtuPerPound => value * 2.326,
    }
}

fn from_base(value: f64, unit: SpecificEnergyUnit) -> f64 {
    match unit {
        SpecificEnergyUnit::KjPerKg => value,
        SpecificEnergyUnit::MjPerKg => value / 1000.0,
        SpecificEnergyUnit::KcalPerKg => value / 4.184,
        SpecificEnergyUnit::BtuPerPound => value / 2.326,
    }
}

/// 발열량을 변환한다.
pub fn convert_specific_energy(
    value: f64,
    from: SpecificEnergyUnit,
    to: SpecificEnergyUnit,
) -> f64 {
    let base = to_base(value, from);
    from_base(base, to)
}
